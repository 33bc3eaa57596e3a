use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_RANGE_START: u32 = 32;
pub const DEFAULT_RANGE_END: u32 = 100;
pub const DEFAULT_TEXTS_DIR: &str = "./texts";
pub const DEFAULT_FILE_TEMPLATE: &str = "text_{index}.txt";
pub const DEFAULT_PROGRAM: &str = "bun";
pub const DEFAULT_PROGRAM_ARGS: [&str; 2] = ["run", "pull-content.ts"];

/// Placeholder in [`LoadConfig::file_template`] replaced by the loop index.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Half-open span `[start, end)` of numeric file suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexRange {
    pub start: u32,
    pub end: u32,
}

impl IndexRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn iter(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IndexRange {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_START, DEFAULT_RANGE_END)
    }
}

/// The ingestion tool and the arguments placed before the file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for CommandSpec {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_PROGRAM_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Everything the driver needs for one run. `Default` reproduces the
/// historical fixed setup: `bun run pull-content.ts ./texts/text_N.txt`
/// for `N` in `32..100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    pub range: IndexRange,
    pub texts_dir: PathBuf,
    pub file_template: String,
    pub command: CommandSpec,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            range: IndexRange::default(),
            texts_dir: PathBuf::from(DEFAULT_TEXTS_DIR),
            file_template: DEFAULT_FILE_TEMPLATE.to_string(),
            command: CommandSpec::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("range start {start} is greater than range end {end}")]
    InvertedRange { start: u32, end: u32 },
    #[error("command program must not be empty")]
    EmptyProgram,
    #[error("file template {0:?} has no {{index}} placeholder")]
    MissingPlaceholder(String),
}

impl LoadConfig {
    /// File name for `index`, e.g. `text_32.txt`.
    pub fn file_name_for(&self, index: u32) -> String {
        self.file_template
            .replace(INDEX_PLACEHOLDER, &index.to_string())
    }

    /// Path handed to the ingestion tool, e.g. `./texts/text_32.txt`.
    /// Existence is not checked.
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.texts_dir.join(self.file_name_for(index))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range.start > self.range.end {
            return Err(ConfigError::InvertedRange {
                start: self.range.start,
                end: self.range.end,
            });
        }
        if self.command.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }
        if !self.file_template.contains(INDEX_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(self.file_template.clone()));
        }
        Ok(())
    }

    pub fn trace_loaded(&self) {
        info!(
            start = self.range.start,
            end = self.range.end,
            texts_dir = %self.texts_dir.display(),
            program = %self.command.program,
            "Loaded LoadConfig"
        );
        debug!(?self, "LoadConfig loaded (full debug)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_historical_layout() {
        let config = LoadConfig::default();
        assert_eq!(config.file_name_for(32), "text_32.txt");
        assert_eq!(
            config.path_for(32).to_string_lossy(),
            "./texts/text_32.txt"
        );
        assert_eq!(
            config.path_for(99).to_string_lossy(),
            "./texts/text_99.txt"
        );
    }

    #[test]
    fn default_range_covers_sixty_eight_indices() {
        let range = IndexRange::default();
        assert_eq!(range.len(), 68);
        assert_eq!(range.iter().next(), Some(32));
        assert_eq!(range.iter().last(), Some(99));
    }

    #[test]
    fn trailing_slash_on_texts_dir_is_harmless() {
        let config = LoadConfig {
            texts_dir: PathBuf::from("./texts/"),
            ..LoadConfig::default()
        };
        assert_eq!(config.path_for(5).to_string_lossy(), "./texts/text_5.txt");
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let inverted = LoadConfig {
            range: IndexRange::new(10, 5),
            ..LoadConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvertedRange { start: 10, end: 5 })
        );

        let mut no_program = LoadConfig::default();
        no_program.command.program = "  ".into();
        assert_eq!(no_program.validate(), Err(ConfigError::EmptyProgram));

        let no_placeholder = LoadConfig {
            file_template: "text.txt".into(),
            ..LoadConfig::default()
        };
        assert!(matches!(
            no_placeholder.validate(),
            Err(ConfigError::MissingPlaceholder(_))
        ));
    }

    #[test]
    fn empty_range_is_valid() {
        let config = LoadConfig {
            range: IndexRange::new(7, 7),
            ..LoadConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.range.is_empty());
    }
}
