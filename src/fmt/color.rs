//! Level labels are colourised with the basic 16-colour ANSI palette so they
//! render the same in every terminal. Purely presentational: nothing here
//! affects whether a message is written.

use crate::level::Level;
use std::collections::HashMap;
use std::fmt;

/// Named foreground colours understood by any ANSI terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

impl Color {
    /// Restores the default foreground colour without touching other attributes.
    pub const RESET: &'static str = "\x1b[39m";

    /// SGR foreground code for this colour.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Grey => 90,
        }
    }

    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Grey => "grey",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps `text` in the colour's escape and the foreground reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}

/// Level → colour associations registered when a console sink is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelColors {
    colors: HashMap<Level, Color>,
}

impl Default for LevelColors {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert(Level::Trace, Color::Green);
        colors.insert(Level::Debug, Color::Cyan);
        colors.insert(Level::Info, Color::White);
        colors.insert(Level::Warn, Color::Yellow);
        colors.insert(Level::Error, Color::Red);
        Self { colors }
    }
}

impl LevelColors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one association; the rest keep their defaults.
    #[must_use]
    pub fn set(mut self, level: Level, color: Color) -> Self {
        self.colors.insert(level, color);
        self
    }

    #[must_use]
    pub fn get(&self, level: Level) -> Color {
        self.colors.get(&level).copied().unwrap_or(Color::White)
    }

    /// The level name wrapped in its colour, e.g. `"\x1b[32mtrace\x1b[39m"`.
    #[must_use]
    pub fn paint(&self, level: Level) -> String {
        colorize(level.as_str(), self.get(level))
    }
}
