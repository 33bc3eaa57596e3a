use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, error};

use crate::config::CommandSpec;
use crate::contract::{InvocationOutcome, Invoker};

/// Spawns the configured ingestion tool as a child process.
///
/// The child inherits stdin, stdout and stderr; its output is never captured
/// or inspected.
pub struct ProcessInvoker {
    command: CommandSpec,
}

impl ProcessInvoker {
    pub fn new(command: CommandSpec) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }
}

#[async_trait]
impl Invoker for ProcessInvoker {
    async fn invoke(&self, path: &Path) -> InvocationOutcome {
        // `<program> <args...> <path>`
        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .status()
            .await;

        match status {
            Ok(s) if s.success() => {
                debug!(
                    program = %self.command.program,
                    path = %path.display(),
                    status = ?s,
                    "Ingestion tool finished"
                );
                InvocationOutcome::Succeeded
            }
            Ok(s) => {
                debug!(
                    program = %self.command.program,
                    path = %path.display(),
                    "Ingestion tool exited with non-zero status: {}", s
                );
                InvocationOutcome::Failed { code: s.code() }
            }
            Err(e) => {
                error!(
                    error = ?e,
                    program = %self.command.program,
                    path = %path.display(),
                    "Failed to launch ingestion tool"
                );
                InvocationOutcome::LaunchFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
