use crate::config::EnvVars;
use crate::core::error::{PipfError, Result};
use std::path::PathBuf;

/// Finds environment directories under a storage root such as
/// `~/.local/share/virtualenvs`.
pub struct EnvLocator {
    root: PathBuf,
}

impl EnvLocator {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directories directly under the root whose name starts with `name`, sorted.
    pub fn candidates(&self, name: &str) -> Result<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("environment root {} does not exist", self.root.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            // A bare `*` glob never matches dot entries.
            if file_name.starts_with('.') && !name.starts_with('.') {
                continue;
            }

            if file_name.starts_with(name) {
                matches.push(path);
            }
        }

        matches.sort();
        Ok(matches)
    }

    /// Resolve `name` to exactly one environment directory.
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        let mut matches = self.candidates(name)?;
        tracing::debug!("'{}' matched {} environment(s)", name, matches.len());

        match matches.len() {
            0 => Err(PipfError::EnvironmentNotFound {
                name: name.to_string(),
                root: self.root.clone(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(PipfError::AmbiguousName {
                name: name.to_string(),
                matches,
            }),
        }
    }
}

/// Directory of the currently active environment, from `VIRTUAL_ENV`.
pub fn active_env_dir(env: &EnvVars) -> Result<PathBuf> {
    env.virtual_env.clone().ok_or(PipfError::NoActiveEnvironment)
}
