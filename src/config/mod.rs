pub mod env;
pub mod global;
pub mod schema;
pub mod settings;

use crate::core::error::{PipfError, Result};

pub use env::EnvVars;
pub use global::GlobalConfigManager;
pub use schema::{GlobalConfig, PipenvConfig, ShellConfig, DEFAULT_TOOL};
pub use settings::Settings;

/// Environments created with `PIPENV_VENV_IN_PROJECT` live inside their
/// projects, where the central lookup cannot find them.
pub fn ensure_supported_layout(env: &EnvVars) -> Result<()> {
    if env.venv_in_project {
        return Err(PipfError::VenvInProject);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venv_in_project_is_rejected() {
        let env = EnvVars {
            venv_in_project: true,
            ..EnvVars::default()
        };
        assert!(matches!(
            ensure_supported_layout(&env),
            Err(PipfError::VenvInProject)
        ));
        assert!(ensure_supported_layout(&EnvVars::default()).is_ok());
    }
}
