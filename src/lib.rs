//! # geostr
//!
//! A parser for textual geographic coordinates.
//!
//! Turns strings such as `40° 26' 46" N`, `79:56:55W` or `40.4738° N, 79.553° W` into
//! signed decimal degrees. A single coordinate yields one value, a pair yields two values
//! in input order.
//!
//! Layout
//!
//!     src/geo
//!       ├── token      Token kinds (logos), token values, cardinal directions
//!       ├── lexing     Tokenizer and the token stream cursor used by the grammar
//!       ├── parsing    Parser entry point and the recursive-descent grammar
//!       ├── value      Numeric results (Value, Point)
//!       ├── error      Syntax and range errors with their exact message format
//!       ├── options    Parser configuration
//!       └── testing    Assertion helpers for tests
//!
//! Usage
//!
//!     let point = geostr::parse("40° 26' 46\" N 79° 58' 56\" W")?;
//!     assert!(point.is_pair());
//!
//! For comprehensive testing helpers, see the [testing module](geo::testing).

pub mod geo;

pub use geo::error::{ParseError, ParseResult};
pub use geo::options::ParserOptions;
pub use geo::parsing::{parse, Input, ParseCoordinates, Parser};
pub use geo::value::{Point, Value};
