//! Numeric results produced by the parser
//!
//! A coordinate value is either an exact integer or a float. Whole-degree inputs such as
//! `40` or `-40` stay integers; as soon as minutes, seconds or a fractional literal are
//! involved the value is a float.
//!
//! Values compare numerically, so `Value::Integer(40) == Value::Float(40.0)`. Integer and
//! float results for the same coordinate are interchangeable for consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed decimal-degree value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(value) => value as f64,
            Value::Float(value) => value,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Apply a sign coefficient (+1 or -1), keeping integers exact.
    pub(crate) fn signed(self, sign: i8) -> Value {
        match self {
            Value::Integer(value) => Value::Integer(value * i64::from(sign)),
            Value::Float(value) => Value::Float(value * f64::from(sign)),
        }
    }

    /// Add a fractional degree amount (minutes and seconds). The result is always a float.
    pub(crate) fn plus_fraction(self, fraction: f64) -> Value {
        Value::Float(self.as_f64() + fraction)
    }

    pub(crate) fn exceeds(self, limit: i64) -> bool {
        match self {
            Value::Integer(value) => value > limit,
            Value::Float(value) => value > limit as f64,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Value> for f64 {
    fn from(value: Value) -> Self {
        value.as_f64()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
        }
    }
}

/// The result of parsing one input: a single coordinate or an ordered pair
///
/// Pairs keep input order; they are never reordered by axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Point {
    Single(Value),
    Pair(Value, Value),
}

impl Point {
    pub fn first(&self) -> Value {
        match self {
            Point::Single(value) | Point::Pair(value, _) => *value,
        }
    }

    pub fn second(&self) -> Option<Value> {
        match self {
            Point::Single(_) => None,
            Point::Pair(_, value) => Some(*value),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Point::Pair(_, _))
    }

    pub fn values(&self) -> Vec<Value> {
        match self {
            Point::Single(value) => vec![*value],
            Point::Pair(first, second) => vec![*first, *second],
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Single(value) => write!(f, "{}", value),
            Point::Pair(first, second) => write!(f, "[{}, {}]", first, second),
        }
    }
}
