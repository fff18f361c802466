use crate::config::Settings;
use crate::core::error::{PipfError, Result};
use crate::pipenv::{EnvLocator, Subshell};
use colored::Colorize;
use std::path::PathBuf;

pub async fn execute(settings: &Settings, name: &str, cwd: PathBuf) -> Result<()> {
    let env_dir = EnvLocator::new(settings.workon_home.clone()).locate(name)?;

    eprintln!(
        "{} Launching subshell in virtual environment {}",
        "→".blue().bold(),
        env_dir.display().to_string().yellow()
    );

    let subshell = Subshell::new(settings.shell.clone(), env_dir);
    let exit_code = tokio::task::spawn_blocking(move || subshell.run(&cwd))
        .await
        .map_err(|e| PipfError::Pty(format!("Shell session aborted: {}", e)))??;

    std::process::exit(exit_code);
}
