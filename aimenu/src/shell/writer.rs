//! Idempotent append-only writer for the shell startup file.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::alias::ShellAlias;

/// Failures touching the startup file.
///
/// These never abort an install run; callers report them as warnings.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// What a call to [`ShellIntegrationWriter::register`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AliasReport {
    /// Lines appended to the file.
    pub added: usize,
    /// Lines skipped because they were already present.
    pub existing: usize,
}

/// Appends alias lines to one shell startup file.
#[derive(Debug, Clone)]
pub struct ShellIntegrationWriter {
    rc_path: PathBuf,
}

impl ShellIntegrationWriter {
    pub fn new(rc_path: impl Into<PathBuf>) -> Self {
        Self {
            rc_path: rc_path.into(),
        }
    }

    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }

    /// Append every alias not already in the file, under `marker`.
    ///
    /// The marker comment is written once, directly before the first new
    /// alias, and only when the file does not contain it yet. When nothing
    /// new needs writing the file is left untouched (and not created).
    pub fn register(
        &self,
        marker: &str,
        aliases: &[ShellAlias],
    ) -> Result<AliasReport, ShellError> {
        let existing = self.read_existing()?;
        let present: HashSet<&str> = existing.lines().collect();

        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        let mut report = AliasReport::default();
        for alias in aliases {
            let line = alias.line();
            if present.contains(line.as_str()) {
                report.existing += 1;
            } else if seen.insert(line.clone()) {
                pending.push(line);
            }
        }

        if pending.is_empty() {
            debug!(path = %self.rc_path.display(), "No new aliases to write");
            return Ok(report);
        }

        let mut block = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            block.push('\n');
        }
        if !present.contains(marker) {
            block.push('\n');
            block.push_str(marker);
            block.push('\n');
        }
        for line in &pending {
            block.push_str(line);
            block.push('\n');
        }

        self.append(&block)?;
        report.added = pending.len();
        info!(
            path = %self.rc_path.display(),
            added = report.added,
            "Wrote shell aliases"
        );
        Ok(report)
    }

    fn read_existing(&self) -> Result<String, ShellError> {
        match fs::read_to_string(&self.rc_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(ShellError::Read {
                path: self.rc_path.clone(),
                source,
            }),
        }
    }

    fn append(&self, block: &str) -> Result<(), ShellError> {
        let to_write_error = |source| ShellError::Write {
            path: self.rc_path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.rc_path)
            .map_err(to_write_error)?;
        file.write_all(block.as_bytes()).map_err(to_write_error)
    }
}
