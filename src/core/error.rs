use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipfError {
    #[error(
        "You have set the PIPENV_VENV_IN_PROJECT variable, so pipf can't find the environment locations. This is currently not supported"
    )]
    VenvInProject,

    #[error(
        "More than one environment matches '{}'. Not currently supported: {}",
        .name,
        format_matches(.matches)
    )]
    AmbiguousName { name: String, matches: Vec<PathBuf> },

    #[error("No environment matching '{}' found in {}", .name, .root.display())]
    EnvironmentNotFound { name: String, root: PathBuf },

    #[error("No active environment: VIRTUAL_ENV is not set")]
    NoActiveEnvironment,

    #[error("Failed to read project marker {}: {}", .path.display(), .source)]
    MarkerFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Project marker {} is empty", .0.display())]
    EmptyMarkerFile(PathBuf),

    #[error(
        "Not in a venv and no name supplied. Found no Pipfile in current dir, cannot identify which venv to use"
    )]
    NoPipfile,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Terminal error: {0}")]
    Pty(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_matches(matches: &[PathBuf]) -> String {
    matches
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, PipfError>;
