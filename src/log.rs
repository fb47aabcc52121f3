//! The six logging methods shared by every named logger.

use crate::fmt::Args;
use crate::level::Level;

/// A named logger. Implementors decide fire-or-drop in `log` and
/// `log_replicants`; the level methods are thin wrappers over them.
///
/// No method returns an error or panics, whatever the arguments.
pub trait Log {
    /// The tag every fired line starts with, without brackets.
    fn name(&self) -> &str;

    /// Gate, tag and forward one call at `level`.
    fn log(&self, level: Level, args: Args);

    /// Replicant logging: its own flag, written as `info` when it fires.
    fn log_replicants(&self, args: Args);

    fn trace(&self, args: impl Into<Args>)
    where
        Self: Sized,
    {
        self.log(Level::Trace, args.into());
    }

    fn debug(&self, args: impl Into<Args>)
    where
        Self: Sized,
    {
        self.log(Level::Debug, args.into());
    }

    fn info(&self, args: impl Into<Args>)
    where
        Self: Sized,
    {
        self.log(Level::Info, args.into());
    }

    fn warn(&self, args: impl Into<Args>)
    where
        Self: Sized,
    {
        self.log(Level::Warn, args.into());
    }

    fn error(&self, args: impl Into<Args>)
    where
        Self: Sized,
    {
        self.log(Level::Error, args.into());
    }

    fn replicants(&self, args: impl Into<Args>)
    where
        Self: Sized,
    {
        self.log_replicants(args.into());
    }
}
