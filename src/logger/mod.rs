//! Console + file logger family.
//!
//! A [`LoggerFactory`] owns the backend (console sink, file sink, effective
//! [`Config`]) and an optional [`Reporter`]. Every [`Logger`] it creates
//! tags its calls with `[name]` and forwards them unconditionally; each sink
//! applies its own gate.

mod backend;
mod builder;
mod from_config;

pub use builder::LoggerFactoryBuilder;

use crate::config::{Config, ConfigPatch};
use crate::fmt::Args;
use crate::internal;
use crate::level::Level;
use crate::log::Log;
use crate::output::LogRecord;
use crate::report::{ReportContext, ReportedError, Reporter};
use backend::Backend;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

struct Shared {
    backend: RwLock<Backend>,
    reporter: Option<Box<dyn Reporter>>,
    report_context: ReportContext,
}

impl Shared {
    fn backend(&self) -> RwLockReadGuard<'_, Backend> {
        self.backend.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn reconfigure(&self, patch: &ConfigPatch) -> Result<(), crate::Error> {
        internal::debug("LOGGER", "Reconfiguring");
        self.backend
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(patch)
    }

    /// Side channel: ignores sink gating entirely.
    fn report(&self, record: &LogRecord) {
        let Some(reporter) = &self.reporter else {
            return;
        };
        internal::trace("REPORT", "Forwarding error to reporter");
        let error = ReportedError::new(record.line());
        reporter.report(&error, &self.report_context);
    }
}

/// Factory for loggers sharing one console sink, one file sink and one configuration.
#[derive(Clone)]
pub struct LoggerFactory {
    shared: Arc<Shared>,
}

impl LoggerFactory {
    /// Builds a family from an initial partial configuration, without a reporter.
    ///
    /// # Errors
    /// Fails if the file sink's parent directory cannot be created.
    pub fn new(patch: &ConfigPatch) -> Result<Self, crate::Error> {
        Self::builder().config(patch.clone()).build()
    }

    /// Same as [`LoggerFactory::new`], additionally reporting every `error` call.
    ///
    /// # Errors
    /// Fails if the file sink's parent directory cannot be created.
    pub fn with_reporter(
        patch: &ConfigPatch,
        reporter: impl Reporter + 'static,
    ) -> Result<Self, crate::Error> {
        Self::builder()
            .config(patch.clone())
            .reporter(reporter)
            .build()
    }

    #[must_use]
    pub fn builder() -> LoggerFactoryBuilder {
        LoggerFactoryBuilder::new()
    }

    /// A logger whose lines start with `[name]`.
    #[must_use]
    pub fn logger(&self, name: impl Into<String>) -> Logger {
        Logger {
            name: name.into(),
            shared: Arc::clone(&self.shared),
        }
    }

    /// Partial merge into the shared configuration, applied before this returns.
    ///
    /// # Errors
    /// Fails if a new file path's parent directory cannot be created; the
    /// configuration is unchanged in that case.
    pub fn reconfigure(&self, patch: &ConfigPatch) -> Result<(), crate::Error> {
        self.shared.reconfigure(patch)
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn settings(&self) -> Config {
        self.shared.backend().config().clone()
    }

    /// The resolved file the file sink writes to (`~` expanded).
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.shared.backend().file().path().to_path_buf()
    }

    /// # Errors
    /// Returns the first I/O error from either sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.shared.backend().flush()
    }
}

/// Named logger of a [`LoggerFactory`] family.
#[derive(Clone)]
pub struct Logger {
    name: String,
    shared: Arc<Shared>,
}

impl Logger {
    /// Reconfigures the whole family this logger belongs to.
    ///
    /// # Errors
    /// Same as [`LoggerFactory::reconfigure`].
    pub fn global_reconfigure(&self, patch: &ConfigPatch) -> Result<(), crate::Error> {
        self.shared.reconfigure(patch)
    }

    #[must_use]
    pub fn settings(&self) -> Config {
        self.shared.backend().config().clone()
    }
}

impl Log for Logger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, args: Args) {
        let record = LogRecord::new(level, args.tagged(&self.name));
        self.shared.backend().dispatch(&record);
        if level == Level::Error {
            self.shared.report(&record);
        }
    }

    fn log_replicants(&self, args: Args) {
        let backend = self.shared.backend();
        if !backend.config().replicants {
            return;
        }
        let record = LogRecord::new(Level::Info, args.tagged(&self.name));
        backend.dispatch(&record);
    }
}
