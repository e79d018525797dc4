//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, LetterVerdict, Word};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashMap;

/// Format one board tile, coloured by its verdict if it has one
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Format a judged row as coloured tiles
#[must_use]
pub fn format_row(letters: &[char], verdicts: &[LetterVerdict]) -> String {
    letters
        .iter()
        .zip(verdicts)
        .map(|(&letter, &verdict)| colored_tile(letter, Some(verdict)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the on-screen keyboard with the colours earned so far
#[must_use]
pub fn format_keyboard(keys: &FxHashMap<char, LetterVerdict>) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys_line = row
                .iter()
                .filter(|label| label.len() == 1)
                .filter_map(|label| label.chars().next())
                .map(|ch| colored_tile(ch, keys.get(&ch).copied()).to_string())
                .collect::<Vec<_>>()
                .join("");
            format!("  {keys_line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a finished round as numbered emoji lines
#[must_use]
pub fn guess_summary(guesses: &[(Word, Feedback)]) -> String {
    guesses
        .iter()
        .enumerate()
        .map(|(i, (word, feedback))| format!("{}. {word} {}", i + 1, feedback.to_emoji()))
        .collect::<Vec<_>>()
        .join("\n")
}
