use crate::cli::Cli;
use crate::config::EnvVars;
use crate::core::error::{PipfError, Result};
use std::path::Path;

const SHELL_COMMAND: &str = "shell";
const PIPFILE: &str = "Pipfile";

/// What a single invocation will do, decided before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run `pipenv <args>` with `target`'s project directory as cwd.
    Forward { args: Vec<String>, target: Target },
    /// Interactive subshell with the named environment activated.
    Shell { name: String },
}

/// Which directory a forwarded command runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Named(String),
    Active,
    /// A Pipfile sits in the current directory; pipenv finds it by itself.
    CurrentDir,
}

pub fn plan(cli: &Cli, env: &EnvVars, cwd: &Path) -> Result<Invocation> {
    // `-n ""` means the currently active environment, same as no name.
    let name = cli.name.as_deref().filter(|n| !n.is_empty());

    if let Some(name) = name {
        if cli.command.first().map(String::as_str) == Some(SHELL_COMMAND) {
            return Ok(Invocation::Shell {
                name: name.to_string(),
            });
        }
    }

    let target = match name {
        Some(name) => Target::Named(name.to_string()),
        None if env.pipenv_active => Target::Active,
        None if cwd.join(PIPFILE).exists() => Target::CurrentDir,
        None => return Err(PipfError::NoPipfile),
    };

    Ok(Invocation::Forward {
        args: cli.command.clone(),
        target,
    })
}
