//! `prefixlog` - name-prefixing logging facade with runtime reconfiguration.
//!
//! A factory owns one shared configuration and hands out named loggers.
//! Every logger prepends `[name]` to its arguments and forwards the call to
//! the family's sinks; a `reconfigure` on the factory (or any of its
//! loggers) is seen by all of them immediately.
//!
//! Two families are provided:
//! - [`LoggerFactory`]: console and file sinks, each with its own enabled
//!   flag and threshold, plus an optional error [`Reporter`].
//! - [`Gate`]: console only, gating in the facade itself.
//!
//! # Example
//!
//! ```no_run
//! use prefixlog::{ConfigPatch, Log, LoggerFactory, args};
//!
//! let factory = LoggerFactory::new(
//!     &ConfigPatch::new().console_enabled(true).console_level("debug"),
//! )?;
//! let log = factory.logger("net");
//! log.info("connected");
//! log.debug(args!["retries:", 3]);
//!
//! factory.reconfigure(&ConfigPatch::new().console_level("warn"))?;
//! log.info("dropped");
//! # Ok::<(), prefixlog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `prefixlog` binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod gate;
pub mod internal;
pub mod level;
pub mod log;
pub mod logger;
pub mod output;
pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, ConfigPatch};
pub use error::Error;
pub use fmt::{Args, Color, LevelColors, Value};
pub use gate::{Gate, GateLogger};
pub use level::{Level, Threshold};
pub use log::Log;
pub use logger::{Logger, LoggerFactory, LoggerFactoryBuilder};
pub use output::{ConsoleOutput, FileOutput, LogRecord, MemoryOutput, Output};
pub use report::{MemoryReporter, ReportContext, ReportedError, Reporter};
