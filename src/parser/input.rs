//! Preprocessing of raw user input into solver-ready values.
//!
//! The CLI receives two delimited strings: a letter list (`"it's,clo,bbe"`) and a
//! word-length list (`"2'1,10,____!"`). Fragments are case-folded; length tokens
//! have decorating punctuation stripped from both ends, so `$5` and `4^` become
//! `5` and `4` while inner punctuation such as the apostrophe in `2'1` stays.

use crate::errors::ParseError;
use crate::parser::target::TargetShape;
use crate::trigram_char::TrigramChar;
use log::warn;

/// Split a raw letter list on `delimiter` and lowercase every fragment.
///
/// Empty items (e.g. from a trailing delimiter) are dropped. Duplicates are kept:
/// the pool is a multiset.
///
/// # Errors
///
/// Returns [`ParseError::EmptyDelimiter`] if `delimiter` is empty.
pub fn split_letter_list(raw: &str, delimiter: &str) -> Result<Vec<String>, Box<ParseError>> {
    if delimiter.is_empty() {
        return Err(Box::new(ParseError::EmptyDelimiter));
    }

    Ok(raw
        .split(delimiter)
        .filter_map(|fragment| {
            if fragment.is_empty() {
                warn!("Skipping empty fragment in letter list '{raw}'");
                None
            } else {
                Some(fragment.to_lowercase())
            }
        })
        .collect())
}

/// Split a raw word-length list on `delimiter`, cleaning each token with
/// [`clean_word_length`].
///
/// Empty items are dropped, as in [`split_letter_list`]. A token that only
/// becomes empty once cleaned (e.g. `____!`) is kept, so parsing reports it.
///
/// # Errors
///
/// Returns [`ParseError::EmptyDelimiter`] if `delimiter` is empty.
pub fn split_word_lengths(raw: &str, delimiter: &str) -> Result<Vec<String>, Box<ParseError>> {
    if delimiter.is_empty() {
        return Err(Box::new(ParseError::EmptyDelimiter));
    }

    Ok(raw
        .split(delimiter)
        .filter_map(|token| {
            if token.is_empty() {
                warn!("Skipping empty word length in '{raw}'");
                None
            } else {
                Some(clean_word_length(token).to_string())
            }
        })
        .collect())
}

/// Strip leading and trailing punctuation from a word-length token.
#[must_use]
pub fn clean_word_length(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_punctuation())
}

/// Parse cleaned word-length tokens into target shapes, in order.
///
/// # Errors
///
/// Returns the first token's [`ParseError`] if any token is not a valid shape.
pub fn parse_targets<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<TargetShape>, Box<ParseError>> {
    tokens.iter().map(|token| token.as_ref().parse::<TargetShape>()).collect()
}
