use crate::errors::ParseError;
use crate::trigram_char::DEFAULT_PUNCTUATION;
use nom::{
    branch::alt,
    character::complete::{digit1, one_of},
    combinator::map,
    IResult,
    Parser,
};
use std::fmt;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `ParseError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

/// A single token of a target shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePart {
    Run(usize),   // '10': ten letters in a row
    Punct(char),  // '\'': literal punctuation that must appear in the word
}

/// A validated target word shape such as `2'1` or `10`.
///
/// The `key` is the canonical rendering of the parts, which is exactly the
/// pattern a matching dictionary word produces (see [`crate::shape::ShapePattern`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetShape {
    raw: String,
    parts: Vec<ShapePart>,
    key: String,
}

impl TargetShape {
    /// Dictionary key for this shape.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The string this shape was parsed from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn parts(&self) -> &[ShapePart] {
        &self.parts
    }

    /// Number of characters a word of this shape has: every letter run plus
    /// every punctuation character. `2'1` needs 4 characters ("it's").
    #[must_use]
    pub fn required_length(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                ShapePart::Run(n) => *n,
                ShapePart::Punct(_) => 1,
            })
            .sum()
    }

    fn of(raw: &str, parts: Vec<ShapePart>) -> Self {
        let key = parts
            .iter()
            .map(|part| match part {
                ShapePart::Run(n) => n.to_string(),
                ShapePart::Punct(c) => c.to_string(),
            })
            .collect();
        TargetShape { raw: raw.to_string(), parts, key }
    }
}

impl FromStr for TargetShape {
    type Err = Box<ParseError>;

    /// Parse a shape string into a `TargetShape`.
    ///
    /// Walks the input, consuming tokens one at a time with `shape_part`.
    fn from_str(raw_shape: &str) -> Result<Self, Self::Err> {
        let mut rest = raw_shape;
        let mut parts = Vec::new();

        while !rest.is_empty() {
            match shape_part(rest) {
                Ok((next, part)) => {
                    if part == ShapePart::Run(0) {
                        return Err(Box::new(ParseError::ZeroLengthRun { shape: raw_shape.to_string() }));
                    }
                    parts.push(part);
                    rest = next;
                }
                Err(nom::Err::Failure(e)) => {
                    // bubble up the specific ParseError
                    return Err(e);
                }
                Err(_) => {
                    return Err(Box::new(ParseError::InvalidShapeChar {
                        shape: raw_shape.to_string(),
                        invalid_char: rest.chars().next().unwrap_or('?'),
                    }));
                }
            }
        }

        if parts.is_empty() {
            return Err(Box::new(ParseError::EmptyShape));
        }

        Ok(TargetShape::of(raw_shape, parts))
    }
}

impl fmt::Display for TargetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

// === Token parsers ===

fn run_length(input: &'_ str) -> PResult<'_, ShapePart> {
    let (rest, digits) = digit1::<_, Box<ParseError>>(input)?;
    let n = digits
        .parse::<usize>()
        .map_err(|e| nom::Err::Failure(Box::<ParseError>::from(e)))?;
    Ok((rest, ShapePart::Run(n)))
}

fn punctuation(input: &'_ str) -> PResult<'_, ShapePart> {
    map(one_of(DEFAULT_PUNCTUATION), ShapePart::Punct).parse(input)
}

fn shape_part(input: &'_ str) -> PResult<'_, ShapePart> {
    alt((run_length, punctuation)).parse(input)
}
