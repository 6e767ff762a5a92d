//! `dictionary`: load a word list and index it by word shape.
//!
//! The input is one word per line (e.g. `/usr/share/dict/words`). Every word is
//! stored as a [`DictionaryEntry`] (its [`ShapePattern`] and [`LetterBag`]) under
//! the key of its shape, so the solver can fetch all candidates for a target
//! like `2'1` with a single lookup.
//!
//! The parsing logic:
//! - Trailing whitespace (including `\r`) is stripped from each line.
//! - Empty lines are skipped.
//! - Duplicates are kept, and entries keep the order of the word list; when
//!   several words fit, the one earlier in the file is reported first.
//!
//! The public API provides:
//! - `parse_from_str(...)`: build from an in-memory word list.
//! - `from_words(...)`: build from any iterator of words.
//! - `load_from_path(...)`: read a word list file and parse it.

use crate::letter_bag::LetterBag;
use crate::shape::ShapePattern;
use std::collections::HashMap;

/// A dictionary word, with its shape and its letters.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub shape: ShapePattern,
    pub bag: LetterBag,
}

impl DictionaryEntry {
    #[must_use]
    pub fn new(word: &str) -> Self {
        DictionaryEntry { shape: ShapePattern::new(word), bag: LetterBag::new(word) }
    }

    /// The word as it appears in the word list.
    #[must_use]
    pub fn word(&self) -> &str {
        self.bag.underlying()
    }

    /// The lowercase word; this is what fragment concatenations are compared against.
    #[must_use]
    pub fn word_lower(&self) -> &str {
        self.bag.underlying_lower()
    }
}

/// Word list indexed by shape pattern.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Mapping from shape key (e.g. `3'1`) -> entries with that shape, in word-list order
    by_shape: HashMap<String, Vec<DictionaryEntry>>,
    /// Total number of entries across all shapes
    len: usize,
}

impl Dictionary {
    /// Build a dictionary from any sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Parse a raw word list (one word per line) from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Self {
        Self::from_words(contents.lines().map(str::trim_end).filter(|line| !line.is_empty()))
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Example:
    /// `let dictionary = Dictionary::load_from_path("/usr/share/dict/words")?;`
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`. No partial
    /// dictionary is ever returned.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Dictionary> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read dictionary from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    fn insert(&mut self, word: &str) {
        let entry = DictionaryEntry::new(word);
        self.by_shape
            .entry(entry.shape.pattern().to_string())
            .or_default()
            .push(entry);
        self.len += 1;
    }

    /// All entries whose shape is `shape_key`, in word-list order.
    ///
    /// An empty slice means no word has this shape.
    #[must_use]
    pub fn candidates_for(&self, shape_key: &str) -> &[DictionaryEntry] {
        self.by_shape.get(shape_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct shapes.
    #[must_use]
    pub fn num_shapes(&self) -> usize {
        self.by_shape.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(entries: &[DictionaryEntry]) -> Vec<&str> {
        entries.iter().map(DictionaryEntry::word).collect()
    }

    #[test]
    fn test_parse_groups_by_shape() {
        let dictionary = Dictionary::parse_from_str("cat\ndog\nisn't\ncan't\nhorse");

        assert_eq!(vec!["cat", "dog"], words_of(dictionary.candidates_for("3")));
        assert_eq!(vec!["isn't", "can't"], words_of(dictionary.candidates_for("3'1")));
        assert_eq!(vec!["horse"], words_of(dictionary.candidates_for("5")));
        assert_eq!(3, dictionary.num_shapes());
        assert_eq!(5, dictionary.len());
    }

    #[test]
    fn test_missing_shape_is_empty() {
        let dictionary = Dictionary::parse_from_str("cat");
        assert!(dictionary.candidates_for("4").is_empty());
        assert!(dictionary.candidates_for("").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let dictionary = Dictionary::parse_from_str("time\nmite\ntime\nemit");
        assert_eq!(vec!["time", "mite", "time", "emit"], words_of(dictionary.candidates_for("4")));
    }

    #[test]
    fn test_parse_strips_trailing_whitespace() {
        let dictionary = Dictionary::parse_from_str("cat  \r\ndog\t\n");
        assert_eq!(vec!["cat", "dog"], words_of(dictionary.candidates_for("3")));
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let dictionary = Dictionary::parse_from_str("cat\n\n\n   \ndog\n\n");
        assert_eq!(2, dictionary.len());
    }

    #[test]
    fn test_parse_empty_input() {
        let dictionary = Dictionary::parse_from_str("");
        assert!(dictionary.is_empty());
        assert_eq!(0, dictionary.num_shapes());
    }

    #[test]
    fn test_entries_keep_case_and_bag() {
        let dictionary = Dictionary::from_words(["Paris"]);
        let entry = &dictionary.candidates_for("5")[0];
        assert_eq!("Paris", entry.word());
        assert_eq!("paris", entry.word_lower());
        assert_eq!(LetterBag::new("pairs"), entry.bag);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Dictionary::load_from_path("/definitely/not/a/word/list").unwrap_err();
        assert_eq!(std::io::ErrorKind::NotFound, err.kind());
        assert!(err.to_string().contains("/definitely/not/a/word/list"));
    }
}
