use crate::core::error::{PipfError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File pipenv writes into each environment, naming the project it belongs to.
pub const PROJECT_MARKER_FILE: &str = ".project";

pub fn marker_path(env_dir: &Path) -> PathBuf {
    env_dir.join(PROJECT_MARKER_FILE)
}

/// Read the originating project directory recorded in `env_dir`.
pub async fn read_project_dir(env_dir: &Path) -> Result<PathBuf> {
    let path = marker_path(env_dir);

    let content = fs::read_to_string(&path)
        .await
        .map_err(|source| PipfError::MarkerFile {
            path: path.clone(),
            source,
        })?;

    match first_line(&content) {
        Some(line) => Ok(PathBuf::from(line)),
        None => Err(PipfError::EmptyMarkerFile(path)),
    }
}

fn first_line(content: &str) -> Option<&str> {
    content
        .lines()
        .next()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
}
