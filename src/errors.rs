//! Error types for input parsing and letter-bag arithmetic, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `EmptyShape` (Empty target shape)
//! - E002: `InvalidShapeChar` (Target shape contains a letter or other non-shape character)
//! - E003: `ZeroLengthRun` (Target shape contains a zero-length run)
//! - E004: `ParseIntError` (Integer parsing error)
//! - E005: `EmptyDelimiter` (Delimiter string is empty)
//! - B001: `NegativeCount` (Subtracting a bag that is not contained)
//! - B002: `EmptySum` (Summing an empty sequence of bags)
//!
//! # Examples
//!
//! ```
//! use trigram::errors::ParseError;
//!
//! fn check_shape(input: &str) -> Result<(), Box<ParseError>> {
//!     if input.is_empty() {
//!         return Err(Box::new(ParseError::EmptyShape));
//!     }
//!     Ok(())
//! }
//!
//! match check_shape("") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::num::ParseIntError;

/// Errors raised while validating caller input (target shapes, delimiters).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty target shape")]
    EmptyShape,

    #[error("Target shape \"{shape}\" contains invalid character '{invalid_char}'")]
    InvalidShapeChar { shape: String, invalid_char: char },

    #[error("Target shape \"{shape}\" contains a run of length zero")]
    ZeroLengthRun { shape: String },

    #[error("int-parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),

    #[error("Empty delimiter")]
    EmptyDelimiter,
}

impl From<ParseIntError> for Box<ParseError> {
    fn from(pie: ParseIntError) -> Self {
        Box::new(ParseError::ParseIntError(pie))
    }
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    /// Nom's low-level failures are reported as the character nom stopped at.
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Box::new(ParseError::InvalidShapeChar {
            shape: input.to_string(),
            invalid_char: input.chars().next().unwrap_or('?'),
        })
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyShape => "E001",
            ParseError::InvalidShapeChar { .. } => "E002",
            ParseError::ZeroLengthRun { .. } => "E003",
            ParseError::ParseIntError(_) => "E004",
            ParseError::EmptyDelimiter => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::EmptyShape => "Empty target shape",
            ParseError::InvalidShapeChar { .. } => "Invalid character in target shape",
            ParseError::ZeroLengthRun { .. } => "Zero-length run in target shape",
            ParseError::ParseIntError(_) => "Integer parsing error",
            ParseError::EmptyDelimiter => "Empty delimiter",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::EmptyShape => "A word-length token was empty after stripping surrounding punctuation. Every target word needs at least one length.",
            ParseError::InvalidShapeChar { .. } => "Target shapes may only contain decimal lengths and punctuation, e.g. `3'1` for a word like \"isn't\".",
            ParseError::ZeroLengthRun { .. } => "Every run of letters in a target shape must have a positive length.",
            ParseError::ParseIntError(_) => "A run length in a target shape could not be parsed as an integer (it may be too large).",
            ParseError::EmptyDelimiter => "The delimiter used to split the letter list and word lengths must be at least one character.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::EmptyShape => Some("Example: use '4' or '2'1' for each word length"),
            ParseError::InvalidShapeChar { .. } => Some("Use digits for letter counts and keep punctuation in place, e.g. '3'1' for \"can't\""),
            ParseError::ZeroLengthRun { .. } => Some("Remove the '0' run or replace it with the real letter count"),
            ParseError::EmptyDelimiter => Some("Pass a delimiter such as ',' or ' '"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Errors from letter-bag arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BagError {
    #[error("cannot subtract \"{subtrahend}\" from \"{minuend}\": letter '{letter}' would have a negative count")]
    NegativeCount {
        minuend: String,
        subtrahend: String,
        letter: char,
    },

    #[error("cannot sum an empty sequence of letter bags")]
    EmptySum,
}

impl BagError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BagError::NegativeCount { .. } => "B001",
            BagError::EmptySum => "B002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BagError::NegativeCount { .. } => "Subtracted bag is not contained",
            BagError::EmptySum => "Sum of no bags",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BagError::NegativeCount { .. } => "A letter bag was asked to remove letters it does not hold. Check `contains()` before calling `subtract()`.",
            BagError::EmptySum => "`LetterBag::sum` has no identity element, so it needs at least one bag.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BagError::NegativeCount { .. } => Some("Guard the subtraction with `contains()`"),
            BagError::EmptySum => Some("Pass at least one bag, or handle the empty case before summing"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::EmptyShape;
        assert_eq!(err.code(), "E001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E001"));
        assert!(detailed.contains("Example"));
    }

    #[test]
    fn test_invalid_shape_char_mentions_char() {
        let err = ParseError::InvalidShapeChar { shape: "4x".to_string(), invalid_char: 'x' };
        assert_eq!(err.code(), "E002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("'x'"));
        assert!(detailed.contains("4x"));
    }

    /// Test that all variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let parse_errors: Vec<ParseError> = vec![
            ParseError::EmptyShape,
            ParseError::InvalidShapeChar { shape: "a".to_string(), invalid_char: 'a' },
            ParseError::ZeroLengthRun { shape: "0".to_string() },
            ParseError::ParseIntError("x".parse::<usize>().unwrap_err()),
            ParseError::EmptyDelimiter,
        ];
        let bag_errors: Vec<BagError> = vec![
            BagError::NegativeCount { minuend: "a".to_string(), subtrahend: "b".to_string(), letter: 'b' },
            BagError::EmptySum,
        ];

        for code in parse_errors.iter().map(ParseError::code).chain(bag_errors.iter().map(BagError::code)) {
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 7);
    }

    /// Test that all error codes follow the format X0NN
    #[test]
    fn test_error_code_format() {
        let codes = [
            ParseError::EmptyShape.code(),
            ParseError::EmptyDelimiter.code(),
            BagError::EmptySum.code(),
        ];

        for code in codes {
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters", code);
            assert!(
                code.starts_with("E0") || code.starts_with("B0"),
                "Error code '{}' should start with 'E0' or 'B0'",
                code
            );
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_negative_count_is_actionable() {
        let err = BagError::NegativeCount {
            minuend: "fun".to_string(),
            subtrahend: "funeral".to_string(),
            letter: 'e',
        };
        let detailed = err.display_detailed();
        assert!(detailed.contains("B001"));
        assert!(detailed.contains("'e'"));
        assert!(detailed.contains("contains()"));
    }

    #[test]
    fn test_help_text_differs_from_message() {
        let errors: Vec<ParseError> = vec![
            ParseError::EmptyShape,
            ParseError::ZeroLengthRun { shape: "0'1".to_string() },
            ParseError::EmptyDelimiter,
        ];

        for err in errors {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
        }
    }

    #[test]
    fn test_nom_failure_names_the_offending_char() {
        let err = <Box<ParseError> as NomParseError<&str>>::from_error_kind("x4", ErrorKind::Digit);
        assert!(matches!(*err, ParseError::InvalidShapeChar { invalid_char: 'x', .. }));
        assert_eq!(err.code(), "E002");
    }
}
