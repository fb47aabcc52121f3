//! Console-only logger family.
//!
//! A [`Gate`] owns one shared [`Config`]; every [`GateLogger`] it hands out
//! checks that state on each call, so a `reconfigure` is seen by all
//! existing and future loggers of the family immediately. Families are
//! independent of each other.

use crate::config::{Config, ConfigPatch};
use crate::fmt::Args;
use crate::level::Level;
use crate::log::Log;
use crate::output::{ConsoleOutput, LogRecord, Output};
use std::sync::{Arc, PoisonError, RwLock};

struct Shared {
    config: RwLock<Config>,
    output: Box<dyn Output>,
}

impl Shared {
    fn config(&self) -> Config {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Enabled flag first, then the threshold.
    fn fires(&self, level: Level) -> bool {
        let config = self.config.read().unwrap_or_else(PoisonError::into_inner);
        config.console.enabled && config.console.level.admits(level)
    }

    fn fires_replicants(&self) -> bool {
        let config = self.config.read().unwrap_or_else(PoisonError::into_inner);
        config.console.enabled && config.replicants
    }

    fn emit(&self, level: Level, name: &str, args: Args) {
        let record = LogRecord::new(level, args.tagged(name));
        // A logging call never fails; there is nowhere to report a broken stdout.
        let _ = self.output.write(&record);
    }
}

/// Factory for console-only loggers sharing one configuration.
#[derive(Clone)]
pub struct Gate {
    shared: Arc<Shared>,
}

impl Gate {
    /// Writes to stdout/stderr. The `file` section of `patch` is ignored.
    #[must_use]
    pub fn new(patch: &ConfigPatch) -> Self {
        Self::with_output(patch, ConsoleOutput::new())
    }

    /// Same as [`Gate::new`] but writing to a caller-supplied sink.
    #[must_use]
    pub fn with_output(patch: &ConfigPatch, output: impl Output + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                config: RwLock::new(Config::from_patch(patch)),
                output: Box::new(output),
            }),
        }
    }

    /// A logger whose lines start with `[name]`.
    #[must_use]
    pub fn logger(&self, name: impl Into<String>) -> GateLogger {
        GateLogger {
            name: name.into(),
            shared: Arc::clone(&self.shared),
        }
    }

    /// Partial merge into the shared configuration; visible before this returns.
    pub fn reconfigure(&self, patch: &ConfigPatch) {
        self.shared
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(patch);
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn settings(&self) -> Config {
        self.shared.config()
    }
}

/// Named console logger. Holds nothing but its name and the family handle.
#[derive(Clone)]
pub struct GateLogger {
    name: String,
    shared: Arc<Shared>,
}

impl GateLogger {
    /// Reconfigures the whole family this logger belongs to.
    pub fn global_reconfigure(&self, patch: &ConfigPatch) {
        self.shared
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(patch);
    }

    #[must_use]
    pub fn settings(&self) -> Config {
        self.shared.config()
    }
}

impl Log for GateLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, args: Args) {
        if !self.shared.fires(level) {
            return;
        }
        self.shared.emit(level, &self.name, args);
    }

    fn log_replicants(&self, args: Args) {
        if !self.shared.fires_replicants() {
            return;
        }
        self.shared.emit(Level::Info, &self.name, args);
    }
}
