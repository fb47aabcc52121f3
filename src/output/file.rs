//! Plain-text file sink.

use super::{LogRecord, Output};
use crate::internal;

use chrono::{SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends `<timestamp> - <level>: [name] message` lines to a single file,
/// opening it in append mode for every record.
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
    timestamps: bool,
}

impl FileOutput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timestamps: true,
        }
    }

    /// Drops the leading RFC 3339 timestamp from each line.
    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Points subsequent writes at `path`. Does not create directories.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// The line written for `record`, without the trailing newline.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> String {
        let body = format!("{}: {}", record.level, record.line());
        if self.timestamps {
            let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            format!("{ts} - {body}")
        } else {
            body
        }
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Single write per line so concurrent appenders don't interleave.
        let mut content = self.format_record(record);
        content.push('\n');
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Creates the parent directory of `path` (recursively) if it is missing.
///
/// # Errors
/// Propagates the I/O error from directory creation.
pub fn ensure_parent_dir(path: &Path) -> Result<(), crate::Error> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }

    match fs::create_dir_all(parent) {
        Ok(()) => {
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
            Ok(())
        }
        Err(e) => {
            internal::error(
                "FILE",
                &format!("Failed to create directory {}: {}", parent.display(), e),
            );
            Err(e.into())
        }
    }
}
