//! Command-line front end: log one line through a console/file family from a
//! shell script.
//!
//! The config file is loaded as a patch, the flags are a second patch on top,
//! both merged with the same partial merge `reconfigure` uses.

use crate::config::ConfigPatch;
use crate::internal;
use crate::level::{Level, Threshold};
use crate::log::Log;
use crate::logger::LoggerFactory;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Threshold accepted by `--level` and `--file-level`, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[value(alias = "warning")]
    Warn,
    #[value(alias = "err")]
    Error,
    /// Silences the sink.
    #[value(alias = "_infinite")]
    Infinite,
}

impl From<LogLevel> for Threshold {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::At(Level::Trace),
            LogLevel::Debug => Self::At(Level::Debug),
            LogLevel::Info => Self::At(Level::Info),
            LogLevel::Warn => Self::At(Level::Warn),
            LogLevel::Error => Self::At(Level::Error),
            LogLevel::Infinite => Self::Infinite,
        }
    }
}

/// Method to call on the named logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Method {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Replicants,
}

impl Method {
    /// `None` for `replicants`, which has no level of its own.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        match self {
            Self::Trace => Some(Level::Trace),
            Self::Debug => Some(Level::Debug),
            Self::Info => Some(Level::Info),
            Self::Warn => Some(Level::Warn),
            Self::Error => Some(Level::Error),
            Self::Replicants => None,
        }
    }
}

/// prefixlog - log a name-tagged line to the console and/or a file.
#[derive(Debug, Parser)]
#[command(name = "prefixlog", version, about = "Log a name-tagged line")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Enable the console sink
    #[arg(long)]
    pub console: bool,

    /// Console threshold
    #[arg(long, value_enum, ignore_case = true)]
    pub level: Option<LogLevel>,

    /// Enable the file sink, writing to PATH
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// File threshold
    #[arg(long, value_enum, ignore_case = true)]
    pub file_level: Option<LogLevel>,

    /// Enable replicant logging
    #[arg(long)]
    pub replicants: bool,

    /// Print prefixlog's own diagnostics
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Logger name used as the `[name]` tag
    pub name: String,

    #[arg(value_enum)]
    pub method: Method,

    /// Message words
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Only flags that were actually given end up in the patch.
    #[must_use]
    pub fn patch(&self) -> ConfigPatch {
        let mut patch = ConfigPatch::new();
        if self.console {
            patch = patch.console_enabled(true);
        }
        if let Some(level) = self.level {
            patch = patch.console_level(level);
        }
        if let Some(path) = &self.file {
            patch = patch.file_enabled(true).file_path(path.as_str());
        }
        if let Some(level) = self.file_level {
            patch = patch.file_level(level);
        }
        if self.replicants {
            patch = patch.replicants(true);
        }
        patch
    }
}

/// Parses arguments from the process and runs.
#[must_use]
pub fn main() -> ExitCode {
    run(&Cli::parse())
}

#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    if cli.verbose {
        internal::init(Level::Debug);
    }

    let loaded = match &cli.config {
        Some(path) => ConfigPatch::load_from(path),
        None => ConfigPatch::load(),
    };
    let base = match loaded {
        Ok(patch) => patch,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let factory = match LoggerFactory::new(&base.merged(&cli.patch())) {
        Ok(factory) => factory,
        Err(e) => {
            eprintln!("Error initializing logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = factory.logger(&cli.name);
    let message = cli.message.join(" ");
    match cli.method.level() {
        Some(level) => logger.log(level, message.into()),
        None => logger.replicants(message),
    }

    if let Err(e) = factory.flush() {
        internal::warn("CLI", &format!("Flush failed: {e}"));
    }
    ExitCode::SUCCESS
}
