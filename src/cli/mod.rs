pub mod commands;
pub mod plan;

use crate::config::{EnvVars, GlobalConfigManager, Settings};
use crate::core::home_dir;
use clap::Parser;
use std::env;

pub use plan::{plan, Invocation, Target};

#[derive(Parser)]
#[command(
    name = "pipf",
    version,
    about = "Wrapper around pipenv that allows for conda-like activation and management of envs from anywhere, not just the env of the current directory.",
    long_about = None
)]
pub struct Cli {
    /// Which env to use, matched by name prefix. The names of the envs must be unique!
    #[arg(short, long)]
    pub name: Option<String>,

    /// Command to forward to pipenv. See `pipenv --help` for options
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let config = GlobalConfigManager::new().load().await?;
    let settings = Settings::resolve(EnvVars::from_process(), &config, home_dir().as_deref());
    tracing::debug!("environment root: {}", settings.workon_home.display());

    let cwd = env::current_dir()?;

    match plan(&cli, &settings.env, &cwd)? {
        Invocation::Forward { args, target } => {
            commands::forward::execute(&settings, args, target).await
        }
        Invocation::Shell { name } => commands::shell::execute(&settings, &name, cwd).await,
    }
}
