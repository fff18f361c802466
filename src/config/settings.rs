use crate::config::env::EnvVars;
use crate::config::schema::GlobalConfig;
use crate::core::expand_home;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_HOME: &str = "~/.local/share";
const ENVIRONMENTS_DIR: &str = "virtualenvs";
const FALLBACK_SHELL: &str = "/bin/sh";

/// Environment variables merged with the global config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub env: EnvVars,
    pub tool: String,
    pub workon_home: PathBuf,
    pub shell: PathBuf,
}

impl Settings {
    pub fn resolve(env: EnvVars, config: &GlobalConfig, home: Option<&Path>) -> Self {
        let workon_home = match (&env.workon_home, &config.pipenv.workon_home) {
            (Some(dir), _) => expand_home(dir, home),
            (None, Some(dir)) => expand_home(dir, home),
            (None, None) => {
                let data_home = env
                    .xdg_data_home
                    .as_deref()
                    .unwrap_or(Path::new(DEFAULT_DATA_HOME));
                expand_home(data_home, home).join(ENVIRONMENTS_DIR)
            }
        };

        let shell = env
            .shell
            .clone()
            .or_else(|| config.shell.program.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_SHELL));

        Self {
            tool: config.pipenv.command.clone(),
            workon_home,
            shell,
            env,
        }
    }
}
