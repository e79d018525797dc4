//! Word list loading utilities
//!
//! Provides functions to load word lists from JSON or text files, or from
//! embedded constants.

use super::WordListError;
use crate::core::Word;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One entry of a JSON word list
///
/// Either an object exposing a `word` field (other fields are ignored) or a
/// bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordEntry {
    Record { word: String },
    Plain(String),
}

impl WordEntry {
    fn into_text(self) -> String {
        match self {
            Self::Record { word } | Self::Plain(word) => word,
        }
    }
}

/// Load words from a file
///
/// Files ending in `.json` are parsed as an array of entries; anything else
/// is read as one word per line. Invalid entries are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Malformed` if a JSON file does not parse.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        words_from_json(&content)
    } else {
        Ok(words_from_text(&content))
    }
}

/// Parse a JSON array of word entries
///
/// # Errors
///
/// Returns `WordListError::Malformed` if the input is not an array of
/// strings or objects with a `word` field.
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::words_from_json;
///
/// let words = words_from_json(r#"[{"word": "crane"}, {"word": "slate"}]"#).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_json(json: &str) -> Result<Vec<Word>, WordListError> {
    let entries: Vec<WordEntry> = serde_json::from_str(json)?;
    Ok(collect_valid(entries.into_iter().map(WordEntry::into_text)))
}

/// Parse newline-delimited text, ignoring blank lines and `#` comments
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    collect_valid(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::words_from_slice;
/// use wordle_clone::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_valid(slice.iter().copied())
}

fn collect_valid<S: AsRef<str>>(entries: impl Iterator<Item = S>) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = entries
        .filter_map(|entry| match Word::new(entry.as_ref()) {
            Ok(word) => Some(word),
            Err(err) => {
                log::debug!("Skipping word list entry {:?}: {err}", entry.as_ref());
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed word list entries");
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_json_reads_word_field() {
        let json = r#"[
            {"word": "crane", "frequency": 12},
            {"word": "LEMON"},
            "stale",
            {"word": "toolong"}
        ]"#;
        let words = words_from_json(json).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "LEMON", "STALE"]);
    }

    #[test]
    fn words_from_json_rejects_malformed_input() {
        assert!(matches!(
            words_from_json(r#"{"word": "crane"}"#),
            Err(WordListError::Malformed(_))
        ));
        assert!(words_from_json("not json").is_err());
    }

    #[test]
    fn words_from_text_skips_comments_and_blanks() {
        let words = words_from_text("# default list\ncrane\n\n  slate  \nxyz\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn load_from_file_picks_format_by_extension() {
        let dir = std::env::temp_dir();
        let json_path = dir.join("wordle_clone_loader_test.json");
        let text_path = dir.join("wordle_clone_loader_test.txt");

        fs::write(&json_path, r#"[{"word": "apple"}, {"word": "grape"}]"#).unwrap();
        fs::write(&text_path, "apple\ngrape\nlemon\n").unwrap();

        assert_eq!(load_from_file(&json_path).unwrap().len(), 2);
        assert_eq!(load_from_file(&text_path).unwrap().len(), 3);

        fs::remove_file(&json_path).unwrap();
        fs::remove_file(&text_path).unwrap();
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/wordle_clone/words.txt");
        assert!(matches!(result, Err(WordListError::Io(_))));
    }
}
