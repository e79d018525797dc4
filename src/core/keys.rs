//! Best verdict seen per keyboard letter

use super::feedback::LetterVerdict;
use super::word::Word;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// On-screen keyboard layout, top to bottom
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "⌫"],
];

/// Per-letter keyboard colouring accumulated over a round
///
/// A key only ever moves up: `Absent < Present < Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    keys: FxHashMap<u8, LetterVerdict>,
}

impl KeyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verdict recorded for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterVerdict> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Record a verdict for a letter
    ///
    /// Returns `true` if the key's colouring changed: the letter was unseen or
    /// the verdict beats the one already recorded.
    pub fn record(&mut self, letter: u8, verdict: LetterVerdict) -> bool {
        match self.keys.entry(letter.to_ascii_uppercase()) {
            Entry::Vacant(slot) => {
                slot.insert(verdict);
                true
            }
            Entry::Occupied(mut slot) if verdict > *slot.get() => {
                slot.insert(verdict);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Record every letter of an evaluated row
    ///
    /// Returns the keys whose colouring changed, in guess order.
    pub fn record_row(
        &mut self,
        guess: &Word,
        verdicts: &[LetterVerdict],
    ) -> Vec<(u8, LetterVerdict)> {
        guess
            .chars()
            .iter()
            .zip(verdicts)
            .filter_map(|(&letter, &verdict)| {
                self.record(letter, verdict).then_some((letter, verdict))
            })
            .collect()
    }

    /// Number of letters with a recorded verdict
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Present};

    #[test]
    fn unseen_letter_has_no_verdict() {
        let keys = KeyState::new();
        assert_eq!(keys.get(b'A'), None);
        assert!(keys.is_empty());
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut keys = KeyState::new();
        assert!(keys.record(b'A', Present));
        assert!(keys.record(b'A', Correct));
        assert_eq!(keys.get(b'A'), Some(Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keys = KeyState::new();
        keys.record(b'E', Correct);
        assert!(!keys.record(b'E', Present));
        assert!(!keys.record(b'E', Absent));
        assert_eq!(keys.get(b'E'), Some(Correct));
    }

    #[test]
    fn absent_upgrades_but_present_does_not_downgrade() {
        let mut keys = KeyState::new();
        keys.record(b'r', Absent);
        assert!(keys.record(b'R', Present));
        assert!(!keys.record(b'R', Absent));
        assert_eq!(keys.get(b'r'), Some(Present));
    }

    #[test]
    fn record_row_reports_changed_keys() {
        let mut keys = KeyState::new();
        keys.record(b'L', Correct);

        let guess = Word::new("llama").unwrap();
        let changed = keys.record_row(&guess, &[Correct, Present, Absent, Present, Absent]);

        // L stays Correct; the second A is already Absent
        assert_eq!(changed, vec![(b'A', Absent), (b'M', Present)]);
        assert_eq!(keys.get(b'L'), Some(Correct));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn keyboard_layout_covers_alphabet() {
        let letters: Vec<&str> = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|key| key.len() == 1)
            .collect();
        assert_eq!(letters.len(), 26);
    }
}
