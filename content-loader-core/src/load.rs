//! The content-load driver.
//!
//! [`load_contents`] walks the configured index range in increasing order and,
//! for every index:
//!   - derives the file path from the texts directory and file template
//!   - hands the path to the [`Invoker`] and waits for it to finish
//!   - writes one `Added content <file>` line to the progress writer
//!
//! Invocations run strictly one after another. A failed or unlaunchable
//! invocation is recorded in the [`LoadReport`] and logged, and the loop moves
//! on; only a broken progress writer stops it early.

use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::{ConfigError, LoadConfig};
use crate::contract::{InvocationOutcome, Invoker};

/// One processed index.
#[derive(Debug, Clone, Serialize)]
pub struct LoadEntry {
    pub index: u32,
    pub path: PathBuf,
    pub outcome: InvocationOutcome,
}

/// Per-index outcomes of a run, in invocation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub entries: Vec<LoadEntry>,
}

impl LoadReport {
    pub fn invocations(&self) -> usize {
        self.entries.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &LoadEntry> {
        self.entries.iter().filter(|e| !e.outcome.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to write progress for index {index}: {source}")]
    Progress { index: u32, source: io::Error },
}

/// The line reported once the tool has been run for `file_name`.
pub fn progress_line(file_name: &str) -> String {
    format!("Added content {file_name}")
}

pub async fn load_contents<I, W>(
    config: &LoadConfig,
    invoker: &I,
    progress: &mut W,
) -> Result<LoadReport, LoadError>
where
    I: Invoker + ?Sized,
    W: Write,
{
    config.validate()?;

    info!(
        start = config.range.start,
        end = config.range.end,
        count = config.range.len(),
        texts_dir = %config.texts_dir.display(),
        "[LOAD] Starting content load"
    );

    let mut report = LoadReport::default();

    for index in config.range.iter() {
        let file_name = config.file_name_for(index);
        let path = config.path_for(index);

        debug!(index, path = %path.display(), "[LOAD] Invoking ingestion tool");
        let outcome = invoker.invoke(&path).await;

        if !outcome.is_success() {
            warn!(
                index,
                path = %path.display(),
                outcome = %outcome,
                "[LOAD] Ingestion tool did not succeed, continuing"
            );
        }

        writeln!(progress, "{}", progress_line(&file_name))
            .and_then(|_| progress.flush())
            .map_err(|source| {
                error!(index, error = ?source, "[LOAD][ERROR] Failed to write progress line");
                LoadError::Progress { index, source }
            })?;

        report.entries.push(LoadEntry {
            index,
            path,
            outcome,
        });
    }

    info!(
        invocations = report.invocations(),
        failures = report.failure_count(),
        "[LOAD] Content load finished"
    );
    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "[LOAD][DEBUG] Load report as JSON"),
        Err(e) => error!(error = ?e, "[LOAD][DEBUG] Failed to serialize load report as JSON"),
    }

    Ok(report)
}
