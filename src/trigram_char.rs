use std::collections::HashSet;
use std::sync::LazyLock;

/// Characters that separate letter runs in a shape: "isn't" has shape `3'1`.
pub const DEFAULT_PUNCTUATION: &str = " ,;:'!.\"@#$%^&*()_-+=/\\`~[]{}";

static PUNCTUATION_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| DEFAULT_PUNCTUATION.chars().collect());

pub(crate) trait TrigramChar {
    fn is_punctuation(&self) -> bool;
}

impl TrigramChar for char {
    fn is_punctuation(&self) -> bool {
        PUNCTUATION_SET.contains(self)
    }
}

/// The default punctuation set, shared across callers.
pub(crate) fn default_punctuation() -> &'static HashSet<char> {
    &PUNCTUATION_SET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_punctuation() {
        for c in ['\'', ' ', ',', ';', ':', '.', '#', '!', '"', '{', '}', '\\', '`', '~'] {
            assert!(c.is_punctuation(), "'{}' should be punctuation", c);
        }
    }

    #[test]
    fn test_is_not_punctuation() {
        assert!(!'a'.is_punctuation());
        assert!(!'Z'.is_punctuation());
        assert!(!'7'.is_punctuation());
        assert!(!'é'.is_punctuation());
    }

    #[test]
    fn test_digits_are_not_punctuation() {
        for c in '0'..='9' {
            assert!(!c.is_punctuation());
        }
    }

    #[test]
    fn test_default_punctuation_has_no_duplicates() {
        assert_eq!(default_punctuation().len(), DEFAULT_PUNCTUATION.chars().count());
    }
}
