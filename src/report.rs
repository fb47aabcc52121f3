//! Optional error-reporting side channel.
//!
//! Error trackers differ in API shape, but the adapter only needs one
//! capability: hand over an error and a label. Bind a concrete SDK with a
//! closure:
//!
//! ```no_run
//! use prefixlog::{LoggerFactory, ReportContext, ReportedError};
//!
//! let factory = LoggerFactory::builder()
//!     .reporter(|err: &ReportedError, ctx: &ReportContext| {
//!         eprintln!("captured {err} from {}", ctx.logger());
//!     })
//!     .build()?;
//! # Ok::<(), prefixlog::Error>(())
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Label attached to every report from the console/file adapter.
pub const SERVER_LOGGER_LABEL: &str = concat!("server ", env!("CARGO_PKG_NAME"));

/// Carrier error whose message is the fully formatted `[name] args...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    message: String,
}

impl ReportedError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ReportedError {}

/// Which logical sub-logger produced a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    logger: String,
}

impl ReportContext {
    #[must_use]
    pub fn new(logger: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
        }
    }

    #[must_use]
    pub fn logger(&self) -> &str {
        &self.logger
    }
}

/// Receives every `error` call, regardless of sink gating.
pub trait Reporter: Send + Sync {
    fn report(&self, error: &ReportedError, context: &ReportContext);
}

impl<F> Reporter for F
where
    F: Fn(&ReportedError, &ReportContext) + Send + Sync,
{
    fn report(&self, error: &ReportedError, context: &ReportContext) {
        self(error, context);
    }
}

/// Collects reports in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    reports: Arc<Mutex<Vec<(ReportedError, ReportContext)>>>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> Vec<(ReportedError, ReportContext)> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, error: &ReportedError, context: &ReportContext) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((error.clone(), context.clone()));
    }
}
