//! Severity levels and the configured minimum that gates them.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a message's level can be compared against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// The highest level of logging, logs everything.
    Trace = 0,
    /// Less spammy than trace, includes most info relevant for debugging.
    Debug = 1,
    /// The default logging level. Logs useful info, warnings, and errors.
    #[default]
    Info = 2,
    /// Only logs warnings and errors.
    Warn = 3,
    /// Only logs errors.
    Error = 4,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }

    /// Ascending encoding: trace=0 … error=4.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Backend encoding where a lower number is more severe: error=0 … trace=4.
    #[must_use]
    pub const fn severity(self) -> u8 {
        4 - self as u8
    }

    /// Warnings and errors are written to stderr, everything else to stdout.
    #[must_use]
    pub const fn uses_error_stream(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }

    /// Strict lookup used for configured thresholds: exact lowercase names only.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|level| level.as_str() == name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The configured minimum level of a sink.
///
/// Built from any string without failing. `Infinite` and `Unrecognized`
/// both admit nothing, so a typo in a config file silences the sink
/// instead of raising.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Threshold {
    At(Level),
    /// Sentinel above `error`.
    Infinite,
    /// A name that is not a known level; kept verbatim for display.
    Unrecognized(String),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::At(Level::Info)
    }
}

impl Threshold {
    /// Ascending comparison: fires iff `rank(level) >= rank(min)`.
    #[must_use]
    pub const fn admits(&self, level: Level) -> bool {
        match self {
            Self::At(min) => level.rank() >= min.rank(),
            Self::Infinite | Self::Unrecognized(_) => false,
        }
    }

    /// Backend comparison: fires iff `severity(level) <= severity(min)`.
    #[must_use]
    pub const fn admits_severity(&self, level: Level) -> bool {
        match self {
            Self::At(min) => level.severity() <= min.severity(),
            Self::Infinite | Self::Unrecognized(_) => false,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::At(level) => level.as_str(),
            Self::Infinite => "infinite",
            Self::Unrecognized(name) => name,
        }
    }

    /// The configured level, if the threshold names one.
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        match self {
            Self::At(level) => Some(*level),
            _ => None,
        }
    }
}

impl From<&str> for Threshold {
    fn from(name: &str) -> Self {
        match name {
            "infinite" | "_infinite" => Self::Infinite,
            _ => Level::from_name(name)
                .map_or_else(|| Self::Unrecognized(name.to_string()), Self::At),
        }
    }
}

impl From<String> for Threshold {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Level> for Threshold {
    fn from(level: Level) -> Self {
        Self::At(level)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
