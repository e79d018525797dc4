//! Wordle Clone
//!
//! A five-letter word guessing game: six tries, per-letter feedback, an
//! on-screen keyboard that remembers what it has learned, and a terminal UI.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{Feedback, LetterVerdict, Word};
//!
//! let guess = Word::new("stale").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.verdicts()[2], LetterVerdict::Correct);
//! assert_eq!(feedback.score(), 4);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Round state machine and presentation seam
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
