//! Letter grid and input cursor
//!
//! The board is a fixed 6×5 grid. Letters are written at the cursor, which
//! only ever moves within the active row; a row is left by `advance_row`.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Number of guesses in a round
pub const MAX_GUESSES: usize = 6;

/// Position of the next writable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Errors raised by board operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The active row is incomplete
    Incomplete { filled: usize },
    /// Attempted to advance past the final row
    Exhausted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { filled } => {
                write!(f, "Row has {filled} of {WORD_LENGTH} letters")
            }
            Self::Exhausted => write!(f, "No rows left after row {MAX_GUESSES}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// The guess grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<u8>; WORD_LENGTH]; MAX_GUESSES],
    cursor: Cursor,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Letter stored at a cell, if any
    ///
    /// # Panics
    /// Panics if the cell lies outside the grid
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[row][col]
    }

    /// Whether the active row has all five letters
    #[must_use]
    pub const fn is_row_full(&self) -> bool {
        self.cursor.col == WORD_LENGTH
    }

    /// Write an uppercase letter at the cursor
    ///
    /// Returns the column written, or `None` if the row was already full.
    pub fn place_letter(&mut self, letter: u8) -> Option<usize> {
        if self.is_row_full() || self.cursor.row >= MAX_GUESSES {
            return None;
        }

        let col = self.cursor.col;
        self.cells[self.cursor.row][col] = Some(letter.to_ascii_uppercase());
        self.cursor.col += 1;
        Some(col)
    }

    /// Clear the letter before the cursor
    ///
    /// Returns the column cleared, or `None` if the row was empty.
    pub fn remove_letter(&mut self) -> Option<usize> {
        if self.cursor.col == 0 || self.cursor.row >= MAX_GUESSES {
            return None;
        }

        self.cursor.col -= 1;
        self.cells[self.cursor.row][self.cursor.col] = None;
        Some(self.cursor.col)
    }

    /// The word spelled by the active row
    ///
    /// # Errors
    /// Returns `BoardError::Incomplete` if fewer than five cells are filled,
    /// and `BoardError::Exhausted` once every row has been used.
    pub fn current_row_text(&self) -> Result<Word, BoardError> {
        let row = self.cells.get(self.cursor.row).ok_or(BoardError::Exhausted)?;

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(row) {
            *slot = cell.ok_or(BoardError::Incomplete {
                filled: self.cursor.col,
            })?;
        }

        Ok(Word::from_letters(letters))
    }

    /// Move the cursor to the start of the next row
    ///
    /// # Errors
    /// Returns `BoardError::Exhausted` if the active row is the last one.
    pub fn advance_row(&mut self) -> Result<(), BoardError> {
        if self.cursor.row + 1 >= MAX_GUESSES {
            return Err(BoardError::Exhausted);
        }

        self.cursor = Cursor {
            row: self.cursor.row + 1,
            col: 0,
        };
        Ok(())
    }

    /// Whether the active row is the final attempt
    #[must_use]
    pub const fn on_last_row(&self) -> bool {
        self.cursor.row + 1 == MAX_GUESSES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(board: &mut Board, word: &str) {
        for letter in word.bytes() {
            board.place_letter(letter);
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cursor(), Cursor { row: 0, col: 0 });
        for row in 0..MAX_GUESSES {
            for col in 0..WORD_LENGTH {
                assert_eq!(board.letter_at(row, col), None);
            }
        }
    }

    #[test]
    fn place_letter_advances_column() {
        let mut board = Board::new();
        assert_eq!(board.place_letter(b'c'), Some(0));
        assert_eq!(board.place_letter(b'R'), Some(1));
        assert_eq!(board.letter_at(0, 0), Some(b'C'));
        assert_eq!(board.cursor(), Cursor { row: 0, col: 2 });
    }

    #[test]
    fn place_letter_on_full_row_is_noop() {
        let mut board = Board::new();
        type_word(&mut board, "CRANE");
        assert!(board.is_row_full());

        assert_eq!(board.place_letter(b'S'), None);
        assert_eq!(board.place_letter(b'T'), None);
        assert_eq!(board.cursor().col, 5);
        assert_eq!(board.current_row_text().unwrap().text(), "CRANE");
    }

    #[test]
    fn remove_letter_clears_previous_cell() {
        let mut board = Board::new();
        type_word(&mut board, "CR");
        assert_eq!(board.remove_letter(), Some(1));
        assert_eq!(board.letter_at(0, 1), None);
        assert_eq!(board.cursor().col, 1);
    }

    #[test]
    fn remove_letter_on_empty_row_is_noop() {
        let mut board = Board::new();
        assert_eq!(board.remove_letter(), None);
        assert_eq!(board.cursor(), Cursor::default());
    }

    #[test]
    fn current_row_text_requires_full_row() {
        let mut board = Board::new();
        type_word(&mut board, "CRA");
        assert_eq!(
            board.current_row_text(),
            Err(BoardError::Incomplete { filled: 3 })
        );
        type_word(&mut board, "NE");
        assert_eq!(board.current_row_text().unwrap().text(), "CRANE");
    }

    #[test]
    fn advance_row_resets_column() {
        let mut board = Board::new();
        type_word(&mut board, "CRANE");
        board.advance_row().unwrap();
        assert_eq!(board.cursor(), Cursor { row: 1, col: 0 });
        // Previous row is kept
        assert_eq!(board.letter_at(0, 4), Some(b'E'));
        // Backspace cannot reach into a submitted row
        assert_eq!(board.remove_letter(), None);
    }

    #[test]
    fn advance_past_last_row_fails() {
        let mut board = Board::new();
        for _ in 0..MAX_GUESSES - 1 {
            board.advance_row().unwrap();
        }
        assert!(board.on_last_row());
        assert_eq!(board.advance_row(), Err(BoardError::Exhausted));
        assert_eq!(board.cursor().row, MAX_GUESSES - 1);
    }
}
