use crate::core::error::Result;
use std::path::{Path, PathBuf};

/// Shell families that differ in how an activation script is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavour {
    /// sh, dash, bash, zsh, ksh and anything unrecognised.
    Posix,
    Fish,
    Csh,
}

impl ShellFlavour {
    pub fn of(shell: &Path) -> Self {
        let name = shell
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match name.as_str() {
            "fish" => Self::Fish,
            "csh" | "tcsh" => Self::Csh,
            _ => Self::Posix,
        }
    }

    fn script_name(self) -> &'static str {
        match self {
            Self::Posix => "activate",
            Self::Fish => "activate.fish",
            Self::Csh => "activate.csh",
        }
    }

    /// `source` is not a POSIX builtin; dash only knows `.`.
    fn source_command(self) -> &'static str {
        match self {
            Self::Posix => ".",
            Self::Fish | Self::Csh => "source",
        }
    }
}

/// Activation script under `<env>/bin` matching the shell's syntax.
pub fn activation_script(env_dir: &Path, flavour: ShellFlavour) -> PathBuf {
    env_dir.join("bin").join(flavour.script_name())
}

/// `. '<script>'` or `source '<script>'`, single-quoted so spaces and
/// metacharacters survive.
pub fn activation_line(script: &Path, flavour: ShellFlavour) -> String {
    format!(
        "{} {}",
        flavour.source_command(),
        quote(&script.to_string_lossy())
    )
}

fn quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', r"'\''"))
}

/// The user's shell with an environment's activation script sourced into it.
#[cfg_attr(not(unix), allow(dead_code))]
pub struct Subshell {
    shell: PathBuf,
    env_dir: PathBuf,
}

impl Subshell {
    pub fn new(shell: impl Into<PathBuf>, env_dir: PathBuf) -> Self {
        Self {
            shell: shell.into(),
            env_dir,
        }
    }

    /// Spawn the shell interactively in `cwd` and relay it until it exits.
    ///
    /// The process environment seen by the caller is the same afterwards,
    /// whatever the outcome.
    #[cfg(unix)]
    pub fn run(&self, cwd: &Path) -> Result<i32> {
        use crate::config::env::{PIPENV_ACTIVE, PIP_SHIMS_BASE_MODULE};
        use crate::core::ScopedEnv;
        use crate::pty::{terminal_size, PtySession};

        let scoped = ScopedEnv::capture();
        scoped
            .set(PIPENV_ACTIVE, "1")
            .remove(PIP_SHIMS_BASE_MODULE);

        let size = terminal_size();
        let mut session = PtySession::spawn(&self.shell, &["-i"], cwd, size)?;

        let flavour = ShellFlavour::of(&self.shell);
        let script = activation_script(&self.env_dir, flavour);
        session.send_line(&activation_line(&script, flavour))?;

        session.interact()
    }

    #[cfg(not(unix))]
    pub fn run(&self, _cwd: &Path) -> Result<i32> {
        Err(crate::core::PipfError::Pty(
            "The interactive shell requires a Unix terminal".to_string(),
        ))
    }
}
