use crate::cli::Target;
use crate::config::Settings;
use crate::core::error::Result;
use crate::pipenv::{active_env_dir, read_project_dir, EnvLocator, PipenvExecutor};
use colored::Colorize;
use std::path::{Path, PathBuf};

pub async fn execute(settings: &Settings, args: Vec<String>, target: Target) -> Result<()> {
    let project_dir = resolve_project_dir(settings, target).await?;

    let executor = PipenvExecutor::new(settings.tool.clone());
    let exit_code = executor
        .run_interactive(&args, project_dir.as_deref())
        .await?;

    std::process::exit(exit_code);
}

async fn resolve_project_dir(settings: &Settings, target: Target) -> Result<Option<PathBuf>> {
    let env_dir = match target {
        Target::CurrentDir => {
            eprintln!(
                "{} Not in a venv and no name supplied. Found a Pipfile in current dir, using this environment",
                "⚠".yellow().bold()
            );
            return Ok(None);
        }
        Target::Active => active_env_dir(&settings.env)?,
        Target::Named(name) => {
            let env_dir = EnvLocator::new(settings.workon_home.clone()).locate(&name)?;
            warn_if_other_env_active(settings, &env_dir);
            env_dir
        }
    };

    Ok(Some(read_project_dir(&env_dir).await?))
}

fn warn_if_other_env_active(settings: &Settings, env_dir: &Path) {
    if !settings.env.pipenv_active {
        return;
    }

    if let Some(active) = &settings.env.virtual_env {
        if active != env_dir {
            eprintln!(
                "{} Using {} while {} is active",
                "⚠".yellow().bold(),
                env_dir.display().to_string().cyan(),
                active.display().to_string().yellow()
            );
        }
    }
}
