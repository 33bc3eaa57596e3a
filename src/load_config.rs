/// `load_config` module: turns an optional YAML file plus environment into a validated [`LoadConfig`].
///
/// Order of precedence, lowest first:
///   1. built-in defaults (`LoadConfig::default()`)
///   2. keys present in the YAML file, if one is given
///   3. `CONTENT_LOADER_PROGRAM` from the environment
///
/// Any failure (unreadable file, bad YAML, unknown keys, invalid values) is an
/// `anyhow::Error` surfaced at the CLI boundary before the first invocation.
use anyhow::{Context, Result};
use content_loader_core::config::LoadConfig;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Overrides `command.program` when set to a non-blank value.
pub const PROGRAM_ENV_VAR: &str = "CONTENT_LOADER_PROGRAM";

pub fn load_config(path: Option<&Path>) -> Result<LoadConfig> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => {
            info!("No config file given, using built-in defaults");
            LoadConfig::default()
        }
    };

    if let Ok(program) = std::env::var(PROGRAM_ENV_VAR) {
        if !program.trim().is_empty() {
            info!(program = %program, "CONTENT_LOADER_PROGRAM found in env, overriding program");
            config.command.program = program;
        }
    }

    config.validate().map_err(|e| {
        error!(error = %e, "Configuration failed validation");
        anyhow::anyhow!("Invalid configuration: {e}")
    })?;

    config.trace_loaded();
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<LoadConfig> {
    info!(config_path = ?path, "Loading configuration from file");

    let content = fs::read_to_string(path)
        .map_err(|e| {
            error!(error = ?e, config_path = ?path, "Failed to read config file");
            e
        })
        .with_context(|| format!("Failed to read config file {:?}", path))?;

    // An empty file means "all defaults"; serde_yaml rejects it as a struct.
    if content.trim().is_empty() {
        info!(config_path = ?path, "Config file is empty, using built-in defaults");
        return Ok(LoadConfig::default());
    }

    match serde_yaml::from_str(&content) {
        Ok(config) => {
            info!(config_path = ?path, "Parsed config YAML successfully");
            Ok(config)
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path, "Failed to parse config YAML");
            Err(anyhow::anyhow!("Failed to parse config YAML: {e}"))
        }
    }
}
