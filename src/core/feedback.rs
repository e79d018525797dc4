//! Guess evaluation and per-row feedback
//!
//! Each position of a guess is judged on its own:
//! - Correct: the letter sits at the same position in the target
//! - Present: the target contains the letter somewhere else
//! - Absent: the target does not contain the letter
//!
//! Letters are not consumed by earlier matches, so a repeated guess letter is
//! marked Present every time the target contains it at least once.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered so that a better verdict compares greater: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Encouragement shown after a non-winning row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Nice,
    Great,
    Excellent,
}

impl FeedbackTier {
    /// Pick the tier for a row score, or `None` when nothing matched
    #[must_use]
    pub const fn from_score(score: u32) -> Option<Self> {
        match score {
            0 => None,
            1..=2 => Some(Self::Nice),
            3..=5 => Some(Self::Great),
            _ => Some(Self::Excellent),
        }
    }

    /// Text shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Nice => "Nice👍",
            Self::Great => "Great🌟",
            Self::Excellent => "Excellent🔥",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Verdicts for one evaluated row together with its green/yellow tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    verdicts: [LetterVerdict; WORD_LENGTH],
    greens: u8,
    yellows: u8,
}

impl Feedback {
    /// Feedback for a guess that equals the target
    pub const SOLVED: Self = Self {
        verdicts: [LetterVerdict::Correct; WORD_LENGTH],
        greens: WORD_LENGTH as u8,
        yellows: 0,
    };

    /// Evaluate `guess` against `target`
    ///
    /// Pure and deterministic. Repeated letters are not limited by how often
    /// they occur in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, LetterVerdict, Word};
    ///
    /// let guess = Word::new("stale").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.verdicts()[0], LetterVerdict::Absent);
    /// assert_eq!(feedback.verdicts()[2], LetterVerdict::Correct);
    /// assert_eq!((feedback.greens(), feedback.yellows()), (2, 0));
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        let mut greens = 0;
        let mut yellows = 0;

        for (i, (&letter, &expected)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if !target.has_letter(letter) {
                continue;
            }
            if letter == expected {
                verdicts[i] = LetterVerdict::Correct;
                greens += 1;
            } else {
                verdicts[i] = LetterVerdict::Present;
                yellows += 1;
            }
        }

        Self {
            verdicts,
            greens,
            yellows,
        }
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.verdicts
    }

    #[inline]
    #[must_use]
    pub const fn greens(&self) -> u8 {
        self.greens
    }

    #[inline]
    #[must_use]
    pub const fn yellows(&self) -> u8 {
        self.yellows
    }

    /// Whether every letter is Correct
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.greens as usize == WORD_LENGTH
    }

    /// Row score: two points per green, one per yellow
    #[must_use]
    pub const fn score(&self) -> u32 {
        2 * self.greens as u32 + self.yellows as u32
    }

    /// Encouragement tier for this row
    #[must_use]
    pub const fn tier(&self) -> Option<FeedbackTier> {
        FeedbackTier::from_score(self.score())
    }

    /// Convert the row to an emoji string like "⬜⬜🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}
