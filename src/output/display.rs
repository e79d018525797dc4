//! Line-based renderer for the simple console mode

use super::formatters::{format_keyboard, format_row};
use crate::core::{LetterVerdict, WORD_LENGTH};
use crate::game::{CellState, Outcome, Renderer};
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Prints each judged row and every message as it happens
///
/// Visual effects have no console counterpart and are ignored.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    letters: [char; WORD_LENGTH],
    verdicts: Vec<LetterVerdict>,
    keys: FxHashMap<char, LetterVerdict>,
    rows_shown: usize,
    outcome: Option<Outcome>,
}

impl ConsoleRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard colours earned this round
    #[must_use]
    pub const fn keys(&self) -> &FxHashMap<char, LetterVerdict> {
        &self.keys
    }

    /// Number of rows printed this round
    #[must_use]
    pub const fn rows_shown(&self) -> usize {
        self.rows_shown
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn print_row(&mut self) {
        self.rows_shown += 1;
        println!(
            "  {}  {}",
            self.rows_shown.to_string().bright_black(),
            format_row(&self.letters, &self.verdicts)
        );
        self.verdicts.clear();
    }
}

impl Renderer for ConsoleRenderer {
    fn cell_updated(&mut self, _row: usize, col: usize, letter: Option<char>, state: CellState) {
        if let Some(slot) = self.letters.get_mut(col) {
            *slot = match state {
                CellState::Filled => letter.unwrap_or(' '),
                CellState::Empty => ' ',
            };
        }
    }

    fn letter_verdict(&mut self, _row: usize, col: usize, verdict: LetterVerdict) {
        self.verdicts.push(verdict);
        if col + 1 == WORD_LENGTH {
            self.print_row();
        }
    }

    fn key_verdict(&mut self, letter: char, verdict: LetterVerdict) {
        self.keys.insert(letter, verdict);
    }

    fn message(&mut self, text: &str, _duration: Duration, append: bool) {
        if append {
            println!("  {}", text.bright_white());
        } else {
            println!("\n{}", format_keyboard(&self.keys));
            println!("\n  {}", text.bright_yellow().bold());
        }
    }

    fn game_ended(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    fn round_started(&mut self, generation: u64) {
        *self = Self::default();
        println!("\n{}", "═".repeat(40).bright_cyan());
        println!("  {}", format!("Round {generation}").bright_cyan().bold());
        println!("{}", "═".repeat(40).bright_cyan());
    }
}
