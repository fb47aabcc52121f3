//! Sinks a gated, tagged call is finally written to. The `Output` trait lets
//! tests and embedders swap the console for something they can inspect.

mod console;
mod file;
mod memory;

pub use console::ConsoleOutput;
pub use file::{FileOutput, ensure_parent_dir};
pub use memory::MemoryOutput;

use crate::fmt::Args;
use crate::level::Level;

/// One call that passed its gate. `args[0]` is the `[name]` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub args: Args,
}

impl LogRecord {
    #[must_use]
    pub const fn new(level: Level, args: Args) -> Self {
        Self { level, args }
    }

    /// Tag and arguments joined by single spaces.
    #[must_use]
    pub fn line(&self) -> String {
        self.args.line()
    }
}

/// `Send + Sync` so logger families can be shared across threads.
pub trait Output: Send + Sync {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
