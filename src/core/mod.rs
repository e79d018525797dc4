//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod board;
mod feedback;
mod keys;
mod word;

pub use board::{Board, BoardError, Cursor, MAX_GUESSES};
pub use feedback::{Feedback, FeedbackTier, LetterVerdict};
pub use keys::{KEYBOARD_ROWS, KeyState};
pub use word::{WORD_LENGTH, Word, WordError};
