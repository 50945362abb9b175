//! Parser
//!
//!     The parser turns a coordinate string into a [Point]. All mutable state (token stream
//!     and pair state) lives in a grammar context built for each call, so a [Parser] only
//!     holds its options: it can be reused for any number of inputs, and shared between
//!     threads, without one parse affecting the next.
//!
//!     Accepted notations, alone or as a pair (optionally comma separated):
//!
//!         40            -40           45.24         1e5
//!         40°           45.24° S      40° 26' 46" N 40°26.222'N
//!         40:26:46      79:56:55 W    79°56′55″W
//!
//!     Pairs must use the same convention for both coordinates: if the first has a cardinal
//!     letter the second needs one from the other axis; if the first uses `°` or `:` so must
//!     the second.

mod grammar;
pub mod state;

use super::error::ParseResult;
use super::options::ParserOptions;
use super::value::Point;
use grammar::Grammar;
use std::borrow::Cow;
use std::str::FromStr;
use tracing::debug;

/// Parser input: text, or a bare number standing for its own textual form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input<'a>(Cow<'a, str>);

impl Input<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Input<'_> {
    fn from(value: String) -> Self {
        Input(Cow::Owned(value))
    }
}

macro_rules! numeric_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(value: $ty) -> Self {
                    Input(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

numeric_input!(i32, i64, u32, f64);

/// Coordinate string parser
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse one coordinate or a coordinate pair.
    pub fn parse<'a>(&self, input: impl Into<Input<'a>>) -> ParseResult<Point> {
        let input = input.into();
        debug!(target: "geostr::parser", input = input.as_str(), "Parsing");

        let point = Grammar::new(input.as_str(), &self.options).run()?;

        debug!(target: "geostr::parser", %point, "Parsed");
        Ok(point)
    }
}

/// Parse with default options.
pub fn parse<'a>(input: impl Into<Input<'a>>) -> ParseResult<Point> {
    Parser::new().parse(input)
}

/// Parse strings as geographic coordinates.
///
/// ```text
/// "40° 26' 46\" N".to_point()       // Single(40.446...)
/// "40° N 79° W".to_point()          // Pair(40, -79)
/// ```
pub trait ParseCoordinates {
    fn to_point(&self) -> ParseResult<Point>;
}

impl ParseCoordinates for str {
    fn to_point(&self) -> ParseResult<Point> {
        parse(self)
    }
}

impl FromStr for Point {
    type Err = super::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
