//! # contract: the seam between the driver and the ingestion tool
//!
//! The driver never talks to a process directly. It hands each derived path
//! to an [`Invoker`] and records the [`InvocationOutcome`] it gets back.
//!
//! - [`crate::invoke::ProcessInvoker`] is the production implementation.
//! - `MockInvoker` is generated by `mockall` for tests (enabled under `cfg(test)`
//!   and the default `test-export-mocks` feature).
//!
//! Implementations must not fail: anything that goes wrong while running the
//! tool is folded into the returned outcome.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// What happened when the ingestion tool was run for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationOutcome {
    /// The tool exited with status zero.
    Succeeded,
    /// The tool ran but exited non-zero. `code` is `None` when it was killed by a signal.
    Failed { code: Option<i32> },
    /// The tool could not be started at all.
    LaunchFailed { reason: String },
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Succeeded)
    }
}

impl fmt::Display for InvocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationOutcome::Succeeded => write!(f, "succeeded"),
            InvocationOutcome::Failed { code: Some(code) } => {
                write!(f, "exited with code {code}")
            }
            InvocationOutcome::Failed { code: None } => write!(f, "terminated by signal"),
            InvocationOutcome::LaunchFailed { reason } => write!(f, "failed to launch: {reason}"),
        }
    }
}

/// Runs the ingestion tool for a single file and waits for it to finish.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Invoke the tool with `path` as its final argument.
    async fn invoke(&self, path: &Path) -> InvocationOutcome;
}
