//! Token definitions for coordinate strings
//!
//! This module defines all the tokens that can be produced by the coordinate tokenizer.
//! Token kinds are recognized by the logos derive macro; the numeric value and the source
//! slice are attached afterwards by [tokenize](crate::geo::lexing::tokenize).
//!
//! Kinds
//!
//!     Numbers:     Integer (`40`), Float (`40.5`, `1e5`, `1.5E-3`)
//!     Cardinals:   CardinalLat (`N`, `S`), CardinalLon (`E`, `W`), case-insensitive
//!     Separators:  Degree (`°`), Apostrophe (`'`, `′`), Quote (`"`, `″`), Colon, Comma
//!     Signs:       Plus, Minus
//!     Other:       Period, and Unknown for anything unrecognized (reported as `T_NONE`)
//!
//! Whitespace is skipped but still advances offsets, so every token position is the byte
//! offset of its first character in the original input.

use super::value::Value;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible token kinds in a coordinate string
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    // A float needs a fraction or an exponent; plain digit runs are integers
    #[regex(r"[0-9]+\.[0-9]+")]
    #[regex(r"[0-9]+(\.[0-9]+)?[eE][+-]?[0-9]+")]
    Float,

    #[regex("[nNsS]")]
    CardinalLat,
    #[regex("[eEwW]")]
    CardinalLon,

    #[token(",")]
    Comma,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token(".")]
    Period,
    #[token(":")]
    Colon,
    #[token("'")]
    #[token("′")]
    Apostrophe,
    #[token("\"")]
    #[token("″")]
    Quote,
    #[token("°")]
    Degree,

    // Catch-all for runs of unrecognized characters
    #[regex(r#"[^\s0-9nNeEsSwW,+\-.:'"′″°]+"#)]
    Unknown,
}

impl TokenKind {
    /// The name used for this kind in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "T_INTEGER",
            TokenKind::Float => "T_FLOAT",
            TokenKind::CardinalLat => "T_CARDINAL_LAT",
            TokenKind::CardinalLon => "T_CARDINAL_LON",
            TokenKind::Comma => "T_COMMA",
            TokenKind::Plus => "T_PLUS",
            TokenKind::Minus => "T_MINUS",
            TokenKind::Period => "T_PERIOD",
            TokenKind::Colon => "T_COLON",
            TokenKind::Apostrophe => "T_APOSTROPHE",
            TokenKind::Quote => "T_QUOTE",
            TokenKind::Degree => "T_DEGREE",
            TokenKind::Unknown => "T_NONE",
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }

    pub fn is_cardinal(self) -> bool {
        matches!(self, TokenKind::CardinalLat | TokenKind::CardinalLon)
    }

    pub fn is_sign(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of a token: a number for numeric kinds, the source text otherwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue<'src> {
    Number(Value),
    Text(&'src str),
}

/// A positioned token
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: TokenValue<'src>,
    /// Exact source slice
    pub lexeme: &'src str,
    /// Byte offset of the first character in the original input
    pub position: usize,
}

impl<'src> Token<'src> {
    /// Build a token from a recognized kind and its source slice.
    ///
    /// Integer literals too large for `i64` are demoted to floats.
    pub fn new(kind: TokenKind, lexeme: &'src str, position: usize) -> Self {
        let (kind, value) = match kind {
            TokenKind::Integer => match lexeme.parse::<i64>() {
                Ok(value) => (kind, TokenValue::Number(Value::Integer(value))),
                Err(_) => float_token(lexeme),
            },
            TokenKind::Float => float_token(lexeme),
            _ => (kind, TokenValue::Text(lexeme)),
        };

        Self {
            kind,
            value,
            lexeme,
            position,
        }
    }

    pub fn number(&self) -> Option<Value> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            TokenValue::Text(_) => None,
        }
    }

    /// The compass direction of a cardinal token
    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            TokenKind::CardinalLat | TokenKind::CardinalLon => Direction::from_letter(self.lexeme),
            _ => None,
        }
    }
}

fn float_token(lexeme: &str) -> (TokenKind, TokenValue<'_>) {
    match lexeme.parse::<f64>() {
        Ok(value) => (TokenKind::Float, TokenValue::Number(Value::Float(value))),
        Err(_) => (TokenKind::Unknown, TokenValue::Text(lexeme)),
    }
}

/// Latitude or longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest valid magnitude in degrees
    pub fn bound(self) -> i64 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// The token kind carrying this axis' cardinal letters
    pub fn cardinal_kind(self) -> TokenKind {
        match self {
            Axis::Latitude => TokenKind::CardinalLat,
            Axis::Longitude => TokenKind::CardinalLon,
        }
    }

    pub fn other(self) -> Axis {
        match self {
            Axis::Latitude => Axis::Longitude,
            Axis::Longitude => Axis::Latitude,
        }
    }
}

/// A compass direction given by a cardinal letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "n" | "N" => Some(Direction::North),
            "s" | "S" => Some(Direction::South),
            "e" | "E" => Some(Direction::East),
            "w" | "W" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Latitude,
            Direction::East | Direction::West => Axis::Longitude,
        }
    }

    /// Southern latitudes and western longitudes are negative
    pub fn sign(self) -> i8 {
        match self {
            Direction::North | Direction::East => 1,
            Direction::South | Direction::West => -1,
        }
    }
}
