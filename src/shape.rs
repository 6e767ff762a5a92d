//! Word shapes: runs of letters replaced by their length, punctuation kept in place.
//!
//! `cat` has shape `3`, `isn't` has shape `3'1`, and `Cat'Dog:Fish#` has shape `3'3:4#`.
//! Shapes are the dictionary's index key: a target shape selects every word that
//! could fill it, independent of which letters the word uses.

use crate::trigram_char::default_punctuation;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The shape of a word, along with the word it came from.
///
/// Equality and hashing only look at the pattern string, so `"cat"` and `"dog"`
/// are equal shapes.
#[derive(Debug, Clone)]
pub struct ShapePattern {
    underlying: String,
    underlying_lower: String,
    pattern: String,
}

impl ShapePattern {
    /// Build the shape of `underlying` using the default punctuation set.
    #[must_use]
    pub fn new(underlying: &str) -> Self {
        Self::with_punctuation(underlying, default_punctuation())
    }

    /// Build the shape of `underlying`, treating exactly the characters in
    /// `punctuation` as run separators.
    #[must_use]
    pub fn with_punctuation(underlying: &str, punctuation: &HashSet<char>) -> Self {
        let mut pattern = String::with_capacity(underlying.len());
        let mut run = 0usize;

        for c in underlying.chars() {
            if punctuation.contains(&c) {
                if run > 0 {
                    pattern.push_str(&run.to_string());
                    run = 0;
                }
                pattern.push(c);
            } else {
                run += 1;
            }
        }
        if run > 0 {
            pattern.push_str(&run.to_string());
        }

        debug_assert!(
            pattern.len() <= underlying.len(),
            "pattern '{pattern}' must not be longer than '{underlying}'"
        );

        ShapePattern {
            underlying: underlying.to_string(),
            underlying_lower: underlying.to_lowercase(),
            pattern,
        }
    }

    /// The derived pattern string, e.g. `3'1`.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    #[must_use]
    pub fn underlying_lower(&self) -> &str {
        &self.underlying_lower
    }
}

impl PartialEq for ShapePattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for ShapePattern {}

impl Hash for ShapePattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl fmt::Display for ShapePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let cat = ShapePattern::new("Cat");
        assert_eq!("Cat", cat.underlying());
        assert_eq!("cat", cat.underlying_lower());
        assert_eq!("3", cat.pattern());
    }

    #[test]
    fn test_apostrophe() {
        assert_eq!("3'1", ShapePattern::new("isn't").pattern());
        assert_eq!("2'1", ShapePattern::new("it's").pattern());
    }

    #[test]
    fn test_special_characters() {
        let shape = ShapePattern::new("Cat'Dog:Fish#");
        assert_eq!("cat'dog:fish#", shape.underlying_lower());
        assert_eq!("3'3:4#", shape.pattern());
    }

    #[test]
    fn test_multi_digit_run() {
        assert_eq!("10", ShapePattern::new("clobbering").pattern());
    }

    #[test]
    fn test_leading_and_repeated_punctuation() {
        assert_eq!("'3", ShapePattern::new("'tis").pattern());
        assert_eq!("2--3", ShapePattern::new("ab--cde").pattern());
        assert_eq!("3 5", ShapePattern::new("ice cream").pattern());
    }

    #[test]
    fn test_empty() {
        assert_eq!("", ShapePattern::new("").pattern());
    }

    #[test]
    fn test_custom_punctuation() {
        let only_dash: HashSet<char> = ['-'].into_iter().collect();
        assert_eq!("5", ShapePattern::with_punctuation("isn't", &only_dash).pattern());
        assert_eq!("4-5", ShapePattern::with_punctuation("well-being", &only_dash).pattern());
    }

    #[test]
    fn test_equality_is_by_pattern() {
        assert_eq!(ShapePattern::new("cat"), ShapePattern::new("dog"));
        assert_ne!(ShapePattern::new("cat"), ShapePattern::new("dogs"));
    }
}
