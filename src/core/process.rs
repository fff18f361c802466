use crate::core::error::{PipfError, Result};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Program, arguments and working directory of a child to run with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[String]) -> Self {
        Self {
            program: program.into(),
            args: args.to_vec(),
            cwd: None,
        }
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The full argument vector as it would appear in `ps`.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Run a command with full stdio passthrough and return its exit code.
    pub async fn run_interactive(spec: &CommandSpec) -> Result<i32> {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        let status = command.status().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PipfError::CommandFailed(format!(
                    "{} not found. Is it installed and on PATH?",
                    spec.program
                ))
            } else {
                PipfError::CommandFailed(format!("Failed to execute {}: {}", spec.program, e))
            }
        })?;

        Ok(exit_code(status))
    }
}

/// Exit code to report for a finished child; signal terminations map to 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
