use std::ffi::OsString;
use std::path::PathBuf;

pub const VENV_IN_PROJECT: &str = "PIPENV_VENV_IN_PROJECT";
pub const PIPENV_ACTIVE: &str = "PIPENV_ACTIVE";
pub const WORKON_HOME: &str = "WORKON_HOME";
pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
pub const SHELL: &str = "SHELL";
/// Unset before spawning a subshell, the same way pipenv does.
pub const PIP_SHIMS_BASE_MODULE: &str = "PIP_SHIMS_BASE_MODULE";

/// The process environment variables pipf reacts to, read once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    pub venv_in_project: bool,
    pub pipenv_active: bool,
    pub workon_home: Option<PathBuf>,
    pub xdg_data_home: Option<PathBuf>,
    pub virtual_env: Option<PathBuf>,
    pub shell: Option<PathBuf>,
}

impl EnvVars {
    /// Values are taken as raw OS strings; non-UTF-8 bytes still count as set.
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            venv_in_project: non_empty(VENV_IN_PROJECT).is_some(),
            pipenv_active: lookup(PIPENV_ACTIVE).is_some_and(|v| v == "1"),
            workon_home: non_empty(WORKON_HOME).map(PathBuf::from),
            xdg_data_home: non_empty(XDG_DATA_HOME).map(PathBuf::from),
            virtual_env: non_empty(VIRTUAL_ENV).map(PathBuf::from),
            shell: non_empty(SHELL).map(PathBuf::from),
        }
    }
}
