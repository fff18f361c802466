pub mod executor;
pub mod locator;
pub mod project;
pub mod shell;

pub use executor::PipenvExecutor;
pub use locator::{active_env_dir, EnvLocator};
pub use project::{read_project_dir, PROJECT_MARKER_FILE};
pub use shell::{activation_line, activation_script, ShellFlavour, Subshell};
