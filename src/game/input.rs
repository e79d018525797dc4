//! Keys accepted by the game

/// A recognized key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(u8),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key name as produced by a keyboard or on-screen button
    ///
    /// Accepts `ENTER`, `BACKSPACE` or `⌫`, and single letters. Matching is
    /// case-insensitive; anything else is not a game key.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::game::Key;
    ///
    /// assert_eq!(Key::parse("a"), Some(Key::Letter(b'A')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "⌫" => return Some(Self::Backspace),
            _ if name.eq_ignore_ascii_case("enter") => return Some(Self::Enter),
            _ if name.eq_ignore_ascii_case("backspace") => return Some(Self::Backspace),
            _ => {}
        }

        match name.as_bytes() {
            [ch] if ch.is_ascii_alphabetic() => Some(Self::Letter(ch.to_ascii_uppercase())),
            _ => None,
        }
    }

    /// Map a typed character to a key
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' | '⌫' => Some(Self::Backspace),
            _ if ch.is_ascii_alphabetic() => Some(Self::Letter(ch.to_ascii_uppercase() as u8)),
            _ => None,
        }
    }

    /// Whether this is the letter that restarts a finished round
    #[must_use]
    pub const fn is_reset(self) -> bool {
        matches!(self, Self::Letter(b'R'))
    }
}
