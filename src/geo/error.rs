//! Error types for coordinate parsing
//!
//! Two kinds of failure exist, and both are fatal to the parse call:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Syntax`](ParseError::Syntax) | The tokens do not fit the grammar (including premature end of input and unrecognized characters) |
//! | [`Range`](ParseError::Range) | A well-formed value is physically implausible (degrees beyond the axis bound, minutes or seconds above 60) |
//!
//! The rendered messages are a compatibility contract and must stay byte-for-byte stable:
//!
//! ```text
//! [Syntax Error] line 0, col 6: Error: Expected T_CARDINAL_LON, got "°" in value "40N 45°W"
//! [Range Error] Error: Degrees out of range -90 to 90 in value "200N"
//! ```

use super::token::TokenKind;
use std::fmt;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error(
        "[Syntax Error] line 0, col {}: Error: Expected {expected}, got {found} in value \"{input}\"",
        .found.column()
    )]
    Syntax {
        expected: Expected,
        found: Found,
        input: String,
    },

    #[error("[Range Error] Error: {field} {bound} in value \"{input}\"")]
    Range {
        field: RangeField,
        bound: Bound,
        input: String,
    },
}

impl ParseError {
    pub fn input(&self) -> &str {
        match self {
            ParseError::Syntax { input, .. } | ParseError::Range { input, .. } => input,
        }
    }

    /// Byte offset of the offending token, if the error points at one
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Syntax {
                found: Found::Token { position, .. },
                ..
            } => Some(*position),
            _ => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ParseError::Range { .. })
    }
}

/// What the grammar wanted at the failure point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Token(TokenKind),
    Either(TokenKind, TokenKind),
    EndOfString,
}

/// An expectation rendered with the configured token-name prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    pub expectation: Expectation,
    pub prefix: String,
}

impl Expected {
    pub fn new(expectation: Expectation, prefix: impl Into<String>) -> Self {
        Self {
            expectation,
            prefix: prefix.into(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expectation {
            Expectation::Token(kind) => write!(f, "{}{}", self.prefix, kind),
            Expectation::Either(a, b) => {
                write!(f, "{}{} or {}{}", self.prefix, a, self.prefix, b)
            }
            Expectation::EndOfString => f.write_str("end of string"),
        }
    }
}

/// What was actually next in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token { text: String, position: usize },
    EndOfString,
}

impl Found {
    /// Column reported in the message; `-1` once the input is exhausted
    pub fn column(&self) -> i64 {
        match self {
            Found::Token { position, .. } => *position as i64,
            Found::EndOfString => -1,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { text, .. } => write!(f, "\"{}\"", text),
            Found::EndOfString => f.write_str("end of string."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Degrees,
    Minutes,
    Seconds,
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeField::Degrees => "Degrees",
            RangeField::Minutes => "Minutes",
            RangeField::Seconds => "Seconds",
        };
        f.write_str(name)
    }
}

/// The violated bound. Degrees carry both ends, minutes and seconds only the upper one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub low: Option<i64>,
    pub high: i64,
}

impl Bound {
    pub fn between(low: i64, high: i64) -> Self {
        Self {
            low: Some(low),
            high,
        }
    }

    pub fn above(high: i64) -> Self {
        Self { low: None, high }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.low {
            Some(low) => write!(f, "out of range {} to {}", low, self.high),
            None => write!(f, "greater than {}", self.high),
        }
    }
}
