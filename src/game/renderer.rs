//! Presentation capability injected into the controller
//!
//! The controller only calls out through this trait; front ends decide how
//! cells, keys and messages look.

use super::effects::Effect;
use crate::core::LetterVerdict;
use std::time::Duration;

/// Content state of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Filled,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Receiver of everything the player should see
pub trait Renderer {
    /// A cell gained or lost its letter
    fn cell_updated(&mut self, row: usize, col: usize, letter: Option<char>, state: CellState);

    /// A submitted letter was judged
    fn letter_verdict(&mut self, row: usize, col: usize, verdict: LetterVerdict);

    /// A keyboard key changed colour
    fn key_verdict(&mut self, letter: char, verdict: LetterVerdict);

    /// Show a message, replacing the current one unless `append` is set
    fn message(&mut self, text: &str, duration: Duration, append: bool);

    /// The round reached a terminal state
    fn game_ended(&mut self, outcome: Outcome);

    /// A fresh round started; board, keyboard and messages should be cleared
    fn round_started(&mut self, _generation: u64) {}

    /// A scheduled visual effect is due
    fn effect(&mut self, _effect: &Effect) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn cell_updated(&mut self, row: usize, col: usize, letter: Option<char>, state: CellState) {
        (**self).cell_updated(row, col, letter, state);
    }

    fn letter_verdict(&mut self, row: usize, col: usize, verdict: LetterVerdict) {
        (**self).letter_verdict(row, col, verdict);
    }

    fn key_verdict(&mut self, letter: char, verdict: LetterVerdict) {
        (**self).key_verdict(letter, verdict);
    }

    fn message(&mut self, text: &str, duration: Duration, append: bool) {
        (**self).message(text, duration, append);
    }

    fn game_ended(&mut self, outcome: Outcome) {
        (**self).game_ended(outcome);
    }

    fn round_started(&mut self, generation: u64) {
        (**self).round_started(generation);
    }

    fn effect(&mut self, effect: &Effect) {
        (**self).effect(effect);
    }
}
