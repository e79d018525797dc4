//! Word lists for the game
//!
//! `WordSource` owns an already-loaded list: it draws the target word for a
//! round and validates guesses against the list. The default list is
//! compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;

/// Errors raised while loading or drawing from a word list
#[derive(Debug)]
pub enum WordListError {
    /// The list has no usable words
    Empty,
    Io(io::Error),
    Malformed(serde_json::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty or not loaded"),
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Malformed(err) => write!(f, "Malformed word list: {err}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for WordListError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err)
    }
}

/// A materialized word list
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a word uniformly at random using the thread RNG
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the list has no words.
    pub fn pick_random(&self) -> Result<&Word, WordListError> {
        self.pick_random_with(&mut rand::rng())
    }

    /// Draw a word uniformly at random using the given RNG
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the list has no words.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, WordListError> {
        self.words.choose(rng).ok_or(WordListError::Empty)
    }

    /// Whether the word is in the list
    ///
    /// Words are normalized to uppercase on construction, so the match is
    /// case-insensitive.
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Whether raw text names a word in the list
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.is_valid(&word))
    }
}
