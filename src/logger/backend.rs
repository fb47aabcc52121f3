//! Two independent sinks behind one dispatch: each decides on its own
//! enabled flag and threshold, so a call can produce zero, one or two writes.

use crate::config::{Config, ConfigPatch, expand_path};
use crate::internal;
use crate::output::{FileOutput, LogRecord, Output, ensure_parent_dir};

pub(super) struct Backend {
    config: Config,
    console: Box<dyn Output>,
    file: FileOutput,
}

impl Backend {
    /// Creates the file sink's parent directory even when the sink is disabled,
    /// so enabling it later never hits a missing directory.
    pub(super) fn new(
        config: Config,
        console: Box<dyn Output>,
        file_timestamps: bool,
    ) -> Result<Self, crate::Error> {
        let path = config.file_path();
        ensure_parent_dir(&path)?;
        let file = FileOutput::new(path).timestamps(file_timestamps);
        Ok(Self {
            config,
            console,
            file,
        })
    }

    pub(super) const fn config(&self) -> &Config {
        &self.config
    }

    pub(super) const fn file(&self) -> &FileOutput {
        &self.file
    }

    pub(super) fn dispatch(&self, record: &LogRecord) {
        let console = &self.config.console;
        if console.enabled
            && console.level.admits_severity(record.level)
            && let Err(e) = self.console.write(record)
        {
            internal::warn("CONSOLE", &format!("Write failed: {e}"));
        }

        let file = &self.config.file;
        if file.enabled
            && file.level.admits_severity(record.level)
            && let Err(e) = self.file.write(record)
        {
            internal::warn(
                "FILE",
                &format!("Write to {} failed: {e}", self.file.path().display()),
            );
        }
    }

    /// Partial merge. A new file path gets its directory first; if that fails
    /// nothing in the configuration changes.
    pub(super) fn apply(&mut self, patch: &ConfigPatch) -> Result<(), crate::Error> {
        if let Some(path) = &patch.file.path {
            let expanded = expand_path(path);
            ensure_parent_dir(&expanded)?;
            self.file.set_path(expanded);
        }
        self.config.apply(patch);
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), crate::Error> {
        self.console.flush()?;
        self.file.flush()
    }
}
