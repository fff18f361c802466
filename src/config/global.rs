use crate::config::schema::GlobalConfig;
use crate::core::error::{PipfError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;

const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub struct GlobalConfigManager {
    config_path: PathBuf,
}

impl GlobalConfigManager {
    pub fn new() -> Self {
        Self::with_config_dir(&Self::get_config_dir())
    }

    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self {
            config_path: config_dir.join(GLOBAL_CONFIG_FILE),
        }
    }

    fn get_config_dir() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "pipf", "pipf") {
            proj_dirs.config_dir().to_path_buf()
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pipf")
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub async fn load(&self) -> Result<GlobalConfig> {
        if !self.config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: GlobalConfig = toml::from_str(&content)?;

        if config.pipenv.command.trim().is_empty() {
            return Err(PipfError::Config(format!(
                "pipenv.command cannot be empty ({})",
                self.config_path.display()
            )));
        }

        Ok(config)
    }
}

impl Default for GlobalConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = GlobalConfigManager::with_config_dir(dir.path());

        let config = mgr.load().await.unwrap();
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(config.pipenv.command, "pipenv");
    }

    #[tokio::test]
    async fn reads_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = GlobalConfigManager::with_config_dir(dir.path());

        let toml = r#"
[pipenv]
workon_home = "~/envs"

[shell]
program = "/bin/zsh"
"#;
        std::fs::write(mgr.config_path(), toml).unwrap();

        let config = mgr.load().await.unwrap();
        assert_eq!(config.pipenv.command, "pipenv");
        assert_eq!(config.pipenv.workon_home.as_deref(), Some("~/envs"));
        assert_eq!(config.shell.program.as_deref(), Some("/bin/zsh"));
    }

    #[tokio::test]
    async fn rejects_empty_command() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = GlobalConfigManager::with_config_dir(dir.path());
        std::fs::write(mgr.config_path(), "[pipenv]\ncommand = \"  \"\n").unwrap();

        let err = mgr.load().await.unwrap_err();
        assert!(err.to_string().contains("pipenv.command cannot be empty"));
    }

    #[tokio::test]
    async fn reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = GlobalConfigManager::with_config_dir(dir.path());
        std::fs::write(mgr.config_path(), "[pipenv\n").unwrap();

        assert!(matches!(mgr.load().await, Err(PipfError::Toml(_))));
    }
}
