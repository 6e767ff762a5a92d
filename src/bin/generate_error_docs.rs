//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError`, `BagError` and `SolverError` implementations
//! via their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use trigram::errors::{BagError, ParseError};
use trigram::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One example of each `ParseError` variant
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::EmptyShape,
        ParseError::InvalidShapeChar { shape: "4x".to_string(), invalid_char: 'x' },
        ParseError::ZeroLengthRun { shape: "0'1".to_string() },
        // ParseIntError--an overflowing run length
        match "99999999999999999999999".parse::<usize>() {
            Err(e) => ParseError::ParseIntError(e),
            Ok(_) => ParseError::EmptyShape,
        },
        ParseError::EmptyDelimiter,
    ]
}

/// One example of each `BagError` variant
fn all_bag_error_variants() -> Vec<BagError> {
    vec![
        BagError::NegativeCount {
            minuend: "fun".to_string(),
            subtrahend: "funeral".to_string(),
            letter: 'e',
        },
        BagError::EmptySum,
    ]
}

/// One example of each `SolverError` variant
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::ParseFailure(Box::new(ParseError::EmptyShape)),
        SolverError::DictionaryUnavailable {
            path: "/usr/share/dict/words".to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "failed to read dictionary from '/usr/share/dict/words': No such file or directory",
            ),
        },
        SolverError::NoTargets,
        SolverError::Bookkeeping {
            context: "removing 'time' for target '4'".to_string(),
            source: BagError::EmptySum,
        },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S004)](#solver-errors)");
    println!("- [Parse Errors (E001–E005)](#parse-errors)");
    println!("- [Letter Bag Errors (B001–B002)](#letter-bag-errors)\n");

    println!("## Solver Errors\n");
    println!("Top-level errors from the solver. These wrap lower-level errors or indicate solver-specific issues.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Parse Errors\n");
    println!("Errors that occur when splitting the raw input or parsing word-length shapes.\n");
    generate_error_docs!(all_parse_error_variants());

    println!("## Letter Bag Errors\n");
    println!("Errors from letter-bag arithmetic in the library API.\n");
    generate_error_docs!(all_bag_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_documented_code_is_unique() {
        let mut codes = HashSet::new();
        let all = all_solver_error_variants()
            .iter()
            .map(SolverError::code)
            .chain(all_parse_error_variants().iter().map(ParseError::code))
            .chain(all_bag_error_variants().iter().map(BagError::code))
            .collect::<Vec<_>>();
        for code in &all {
            assert!(codes.insert(*code), "Duplicate error code documented: {code}");
        }
        assert_eq!(11, codes.len());
    }

    #[test]
    fn test_parse_int_example_is_real() {
        assert!(all_parse_error_variants()
            .iter()
            .any(|e| matches!(e, ParseError::ParseIntError(_))));
    }
}
