//! Command-line interface for content-loader.
//!
//! Parses arguments, loads configuration and hands off to the driver in
//! `content-loader-core`. Running the binary with no subcommand is the same as
//! `content-loader load` with built-in defaults.
use crate::load_config::load_config;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use content_loader_core::fix_text::fix_files;
use content_loader_core::invoke::ProcessInvoker;
use content_loader_core::load::load_contents;
use std::path::PathBuf;

/// CLI for content-loader: feed numbered text files to an ingestion tool.
#[derive(Parser)]
#[clap(
    name = "content-loader",
    version,
    about = "Invoke an external content-ingestion tool once per numbered text file"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the ingestion tool for every file in the configured range (the default)
    Load {
        /// Path to an optional YAML config file overriding the defaults
        #[clap(long)]
        config: Option<PathBuf>,
        /// Exit non-zero once the range is done if any invocation failed
        #[clap(long)]
        strict: bool,
    },
    /// Replace em-dashes and curly double quotes in UTF-8 text files, in place (other files are skipped)
    Fix {
        /// Files to fix
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Load {
            config: None,
            strict: false,
        }
    }
}

/// Async entrypoint shared by `main()` and the integration tests.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Commands::Load { config, strict } => {
            let config = load_config(config.as_deref())?;
            tracing::info!(command = "load", strict, "Starting content load");

            let invoker = ProcessInvoker::new(config.command.clone());
            tracing::debug!(
                program = %invoker.command().program,
                args = ?invoker.command().args,
                "Ingestion tool configured"
            );
            let mut stdout = std::io::stdout();
            let report = load_contents(&config, &invoker, &mut stdout)
                .await
                .context("Content load failed")?;

            let failed: Vec<String> = report.failures().map(|e| e.index.to_string()).collect();
            if failed.is_empty() {
                tracing::info!(command = "load", invocations = report.invocations(), "Content load complete");
            } else {
                tracing::warn!(
                    command = "load",
                    invocations = report.invocations(),
                    failures = failed.len(),
                    "Content load complete with failed invocations"
                );
            }

            if strict && !failed.is_empty() {
                bail!(
                    "{} of {} invocations failed (indices: {})",
                    failed.len(),
                    report.invocations(),
                    failed.join(", ")
                );
            }
            Ok(())
        }
        Commands::Fix { files } => {
            tracing::info!(command = "fix", files = files.len(), "Fixing text files");
            let mut stdout = std::io::stdout();
            let rewritten = fix_files(&files, &mut stdout).context("Fixing text files failed")?;
            tracing::info!(command = "fix", rewritten, "Text files fixed");
            Ok(())
        }
    }
}
