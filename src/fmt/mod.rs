//! Rendering concerns shared by every sink: argument values, the structured
//! value pretty-printer, and level colours.

mod color;
mod inspect;
mod value;

pub use color::{Color, LevelColors, colorize};
pub use inspect::inspect;
pub use value::{Args, Value};
