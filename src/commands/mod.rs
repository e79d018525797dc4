//! Command implementations

pub mod simple;

pub use simple::{Command, idle_hint, play_word, run_simple};
