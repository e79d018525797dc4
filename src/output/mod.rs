//! Terminal output formatting
//!
//! Console renderer and pretty-printing helpers for the simple mode.

pub mod display;
pub mod formatters;

pub use display::ConsoleRenderer;
pub use formatters::{colored_tile, format_keyboard, format_row, guess_summary};
