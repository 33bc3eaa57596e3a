//! Typography clean-up for text assets before they are ingested.
//!
//! Replaces the em-dash with `-` and curly double quotes with `"`. Everything
//! else is left untouched. Files that are not valid UTF-8 are skipped, never
//! rewritten.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub const EM_DASH: char = '\u{2014}';
pub const LEFT_DOUBLE_QUOTATION_MARK: char = '\u{201C}';
pub const RIGHT_DOUBLE_QUOTATION_MARK: char = '\u{201D}';

#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to report progress: {0}")]
    Progress(#[source] io::Error),
}

/// What [`fix_file`] did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Rewritten,
    Unchanged,
    SkippedNotUtf8,
}

pub fn normalise_typography(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            EM_DASH => '-',
            LEFT_DOUBLE_QUOTATION_MARK | RIGHT_DOUBLE_QUOTATION_MARK => '"',
            other => other,
        })
        .collect()
}

/// Normalises `path` in place.
pub fn fix_file(path: &Path) -> Result<FixOutcome, FixError> {
    let bytes = fs::read(path).map_err(|source| {
        error!(path = %path.display(), error = ?source, "Failed to read text file");
        FixError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e.utf8_error(),
                "Text file is not valid UTF-8, skipping"
            );
            return Ok(FixOutcome::SkippedNotUtf8);
        }
    };

    let fixed = normalise_typography(&text);
    if fixed == text {
        debug!(path = %path.display(), "Text file already clean");
        return Ok(FixOutcome::Unchanged);
    }

    fs::write(path, fixed).map_err(|source| {
        error!(path = %path.display(), error = ?source, "Failed to write text file");
        FixError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), "Normalised typography");
    Ok(FixOutcome::Rewritten)
}

/// Fixes each file in order. Prints a `Fixing files: [...]` header, then
/// `Fixing file` / `Done fixing file` lines with a running count. Stops at the
/// first file that cannot be read or written. Returns how many files were
/// rewritten.
pub fn fix_files<W: Write>(paths: &[PathBuf], progress: &mut W) -> Result<usize, FixError> {
    let total = paths.len();
    let mut rewritten = 0;

    let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    writeln!(progress, "Fixing files: {listed:?}").map_err(FixError::Progress)?;

    for (n, path) in paths.iter().enumerate() {
        let n = n + 1;
        writeln!(progress, "Fixing file {} ({n} of {total})", path.display())
            .map_err(FixError::Progress)?;
        match fix_file(path)? {
            FixOutcome::Rewritten => rewritten += 1,
            FixOutcome::Unchanged => {}
            FixOutcome::SkippedNotUtf8 => {
                writeln!(
                    progress,
                    "Skipped file {} ({n} of {total}): not valid UTF-8",
                    path.display()
                )
                .map_err(FixError::Progress)?;
                continue;
            }
        }
        writeln!(progress, "Done fixing file {} ({n} of {total})", path.display())
            .map_err(FixError::Progress)?;
    }

    Ok(rewritten)
}
