#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    temp: TempDir,
    workon_home: PathBuf,
    config_home: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let workon_home = temp.path().join("virtualenvs");
        let config_home = temp.path().join("config");
        fs::create_dir_all(&workon_home).expect("workon home");
        fs::create_dir_all(&config_home).expect("config home");
        Self {
            temp,
            workon_home,
            config_home,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pipf").expect("pipf binary");
        cmd.current_dir(self.temp.path())
            .env("HOME", self.temp.path())
            .env("WORKON_HOME", &self.workon_home)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("PIPENV_VENV_IN_PROJECT")
            .env_remove("PIPENV_ACTIVE")
            .env_remove("VIRTUAL_ENV");
        cmd
    }

    fn add_env(&self, dir_name: &str, project: Option<&Path>) -> PathBuf {
        let env_dir = self.workon_home.join(dir_name);
        fs::create_dir_all(env_dir.join("bin")).expect("env dir");
        if let Some(project) = project {
            fs::write(env_dir.join(".project"), format!("{}\n", project.display()))
                .expect("marker file");
        }
        env_dir
    }

    /// An env whose `bin/activate` records `$PIPENV_ACTIVE` into the returned file.
    fn add_recording_env(&self, dir_name: &str) -> PathBuf {
        let env_dir = self.add_env(dir_name, None);
        let seen = self.temp.path().join(format!("{}.seen", dir_name));
        fs::write(
            env_dir.join("bin").join("activate"),
            format!("printf '%s' \"$PIPENV_ACTIVE\" > '{}'\n", seen.display()),
        )
        .expect("activate script");
        seen
    }

    #[cfg(target_os = "linux")]
    fn project_dir(&self, name: &str) -> PathBuf {
        let dir = self.temp.path().join(name);
        fs::create_dir_all(&dir).expect("project dir");
        fs::canonicalize(dir).expect("canonical project dir")
    }

    #[cfg(target_os = "linux")]
    fn wrap_tool(&self, command: &str) {
        let dir = self.config_home.join("pipf");
        fs::create_dir_all(&dir).expect("pipf config dir");
        fs::write(
            dir.join("config.toml"),
            format!("[pipenv]\ncommand = \"{}\"\n", command),
        )
        .expect("config file");
    }
}

#[test]
fn venv_in_project_aborts_before_anything_else() {
    let fx = Fixture::new();

    fx.command()
        .env("PIPENV_VENV_IN_PROJECT", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PIPENV_VENV_IN_PROJECT"));

    fx.add_env("foo-Ab12Cd34", None);
    fx.command()
        .env("PIPENV_VENV_IN_PROJECT", "1")
        .args(["-n", "foo", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("currently not supported"));
}

#[test]
fn non_utf8_venv_in_project_still_aborts() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let fx = Fixture::new();

    fx.command()
        .env("PIPENV_VENV_IN_PROJECT", OsStr::from_bytes(b"\xff"))
        .arg("lock")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PIPENV_VENV_IN_PROJECT"));
}

#[test]
fn ambiguous_name_is_reported() {
    let fx = Fixture::new();
    fx.add_env("foo-Ab12Cd34", None);
    fx.add_env("foobar-Ef56Gh78", None);

    fx.command()
        .args(["-n", "foo", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("More than one environment matches 'foo'"));
}

#[test]
fn unknown_name_is_reported() {
    let fx = Fixture::new();
    fx.add_env("bar-Ab12Cd34", None);

    fx.command()
        .args(["-n", "foo", "shell"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No environment matching 'foo'"));
}

#[test]
fn missing_marker_file_is_reported() {
    let fx = Fixture::new();
    fx.add_env("foo-Ab12Cd34", None);

    fx.command()
        .args(["-n", "foo", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".project"));
}

#[test]
fn no_name_and_no_pipfile_is_reported() {
    let fx = Fixture::new();

    fx.command()
        .arg("lock")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Found no Pipfile in current dir"));
}

// The config file location follows XDG only on Linux.
#[cfg(target_os = "linux")]
#[test]
fn forwards_to_tool_in_project_dir_and_propagates_exit_code() {
    let fx = Fixture::new();
    let project = fx.project_dir("proj");
    fx.add_env("foo-Ab12Cd34", Some(&project));
    fx.wrap_tool("sh");

    fx.command()
        .args(["-n", "foo", "--", "-c", "pwd -P; exit 4"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains(project.display().to_string()));
}

#[cfg(target_os = "linux")]
#[test]
fn shell_without_name_is_forwarded_to_active_env() {
    let fx = Fixture::new();
    let project = fx.project_dir("active-proj");
    let env_dir = fx.add_env("active-Ab12Cd34", Some(&project));
    fx.wrap_tool("echo");

    fx.command()
        .env("PIPENV_ACTIVE", "1")
        .env("VIRTUAL_ENV", &env_dir)
        .arg("shell")
        .assert()
        .success()
        .stdout(predicate::str::diff("shell\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn pipfile_in_cwd_runs_in_place_with_warning() {
    let fx = Fixture::new();
    fs::write(fx.temp.path().join("Pipfile"), "[packages]\n").expect("Pipfile");
    fx.wrap_tool("echo");

    fx.command()
        .args(["install", "--dev"])
        .assert()
        .success()
        .stdout(predicate::str::diff("install --dev\n"))
        .stderr(predicate::str::contains("Found a Pipfile in current dir"));
}

#[test]
fn named_shell_sources_activation_and_exits_with_shell_status() {
    if !Path::new("/bin/bash").exists() {
        return;
    }
    let fx = Fixture::new();
    let seen = fx.add_recording_env("foo-Ab12Cd34");

    fx.command()
        .env("SHELL", "/bin/bash")
        .args(["-n", "foo", "shell"])
        .write_stdin("exit 5\n")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Launching subshell"));

    assert_eq!(fs::read_to_string(&seen).expect("activation ran"), "1");
}

#[test]
fn fallback_shell_sources_activation_with_dot() {
    let fx = Fixture::new();
    let seen = fx.add_recording_env("foo-Ab12Cd34");

    fx.command()
        .env_remove("SHELL")
        .args(["-n", "foo", "shell"])
        .write_stdin("exit 3\n")
        .assert()
        .code(3);

    assert_eq!(fs::read_to_string(&seen).expect("activation ran"), "1");
}
