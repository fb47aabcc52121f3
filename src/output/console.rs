//! Console sink: stdout for trace/debug/info, stderr for warn/error.

use super::{LogRecord, Output};
use crate::fmt::LevelColors;
use std::io::{self, Write};

/// Writes one line per record. With level labels on, lines read
/// `info: [name] message`, the label coloured when colours are enabled.
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    level_labels: bool,
    colors_enabled: bool,
    level_colors: LevelColors,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput {
    /// Bare lines, no level label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level_labels: false,
            colors_enabled: true,
            level_colors: LevelColors::default(),
        }
    }

    #[must_use]
    pub const fn level_labels(mut self, enabled: bool) -> Self {
        self.level_labels = enabled;
        self
    }

    /// Piped output and CI logs can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn level_colors(mut self, colors: LevelColors) -> Self {
        self.level_colors = colors;
        self
    }

    /// The exact text written for `record`, without the trailing newline.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> String {
        let line = record.line();
        if !self.level_labels {
            return line;
        }
        let label = if self.colors_enabled {
            self.level_colors.paint(record.level)
        } else {
            record.level.as_str().to_string()
        };
        format!("{label}: {line}")
    }

    /// Writes `record` to `err` for warn/error and to `out` otherwise.
    fn write_to(
        &self,
        record: &LogRecord,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        let formatted = self.format_record(record);
        if record.level.uses_error_stream() {
            writeln!(err, "{formatted}")
        } else {
            writeln!(out, "{formatted}")
        }
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        self.write_to(record, &mut io::stdout(), &mut io::stderr())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn warn_and_error_go_to_the_error_stream() {
        let console = ConsoleOutput::new();
        let mut out = Vec::new();
        let mut err = Vec::new();

        for level in Level::all() {
            let record = LogRecord::new(level, level.as_str().into());
            console.write_to(&record, &mut out, &mut err).unwrap();
        }

        assert_eq!(String::from_utf8(out).unwrap(), "trace\ndebug\ninfo\n");
        assert_eq!(String::from_utf8(err).unwrap(), "warn\nerror\n");
    }

    #[test]
    fn labels_follow_the_record_to_its_stream() {
        let console = ConsoleOutput::new().level_labels(true).colors(false);
        let mut out = Vec::new();
        let mut err = Vec::new();

        let record = LogRecord::new(Level::Error, "[app] boom".into());
        console.write_to(&record, &mut out, &mut err).unwrap();

        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "error: [app] boom\n");
    }
}
