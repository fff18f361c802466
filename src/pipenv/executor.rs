use crate::core::error::Result;
use crate::core::{CommandSpec, ProcessExecutor};
use std::path::Path;

/// Forwards commands to the wrapped pipenv binary.
pub struct PipenvExecutor {
    tool: String,
}

impl PipenvExecutor {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// `[tool, ...args]`, run from `project_dir` when one is given.
    pub fn command(&self, args: &[String], project_dir: Option<&Path>) -> CommandSpec {
        let spec = CommandSpec::new(self.tool.clone(), args);
        match project_dir {
            Some(dir) => spec.current_dir(dir),
            None => spec,
        }
    }

    /// Run pipenv with full stdio passthrough and return its exit code.
    pub async fn run_interactive(
        &self,
        args: &[String],
        project_dir: Option<&Path>,
    ) -> Result<i32> {
        let spec = self.command(args, project_dir);
        match &spec.cwd {
            Some(dir) => tracing::debug!("forwarding {:?} in {}", spec.argv(), dir.display()),
            None => tracing::debug!("forwarding {:?} in current dir", spec.argv()),
        }

        ProcessExecutor::run_interactive(&spec).await
    }
}
