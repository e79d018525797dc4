//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Highlight, Message, MessageStyle, Screen, Tile, run_tui};
