//! Testing utilities for parse results
//!
//! Parsed values are floating point, so comparing them with `assert_eq!` against decimal
//! literals is brittle (`40° 26' 46"` is `40.446111...`). The fluent assertions here compare
//! with a tolerance and print the whole point on failure.
//!
//! ```rust-example
//! use geostr::geo::testing::assert_point;
//!
//! let point = geostr::parse("40° 26' 46\" N 79° 58' 56\" W")?;
//! assert_point(&point)
//!     .is_pair()
//!     .first_near(40.446111111)
//!     .second_near(-79.982222222);
//! ```
//!
//! Errors get the same treatment through [assert_error].

use super::error::ParseError;
use super::value::{Point, Value};

/// Default comparison tolerance, in degrees
pub const TOLERANCE: f64 = 1e-9;

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a parsed point
pub fn assert_point(point: &Point) -> PointAssertion<'_> {
    PointAssertion {
        point,
        tolerance: TOLERANCE,
    }
}

/// Create an assertion builder for a parse error
pub fn assert_error(error: &ParseError) -> ErrorAssertion<'_> {
    ErrorAssertion { error }
}

/// Whether two degree values agree within `tolerance`
pub fn near(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}

// ============================================================================
// Point Assertions
// ============================================================================

pub struct PointAssertion<'a> {
    point: &'a Point,
    tolerance: f64,
}

impl<'a> PointAssertion<'a> {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn is_single(self) -> Self {
        assert!(
            !self.point.is_pair(),
            "Expected a single coordinate, found pair {}",
            self.point
        );
        self
    }

    pub fn is_pair(self) -> Self {
        assert!(
            self.point.is_pair(),
            "Expected a coordinate pair, found single {}",
            self.point
        );
        self
    }

    /// Assert the first (or only) value
    pub fn first_near(self, expected: f64) -> Self {
        let actual = self.point.first().as_f64();
        assert!(
            near(actual, expected, self.tolerance),
            "Expected first value {}, found {} (in {})",
            expected,
            actual,
            self.point
        );
        self
    }

    pub fn second_near(self, expected: f64) -> Self {
        let actual = self
            .point
            .second()
            .unwrap_or_else(|| panic!("Expected a second value, found single {}", self.point));
        assert!(
            near(actual.as_f64(), expected, self.tolerance),
            "Expected second value {}, found {} (in {})",
            expected,
            actual,
            self.point
        );
        self
    }

    /// Shorthand for `is_single().first_near(expected)`
    pub fn single_near(self, expected: f64) -> Self {
        self.is_single().first_near(expected)
    }

    /// Shorthand for `is_pair().first_near(first).second_near(second)`
    pub fn pair_near(self, first: f64, second: f64) -> Self {
        self.is_pair().first_near(first).second_near(second)
    }

    /// Assert the first value kept integer representation
    pub fn first_is_integer(self) -> Self {
        assert!(
            self.point.first().is_integer(),
            "Expected an integer first value, found {:?}",
            self.point.first()
        );
        self
    }

    /// Assert every value is `expected`, compared numerically
    pub fn values(self, expected: &[Value]) -> Self {
        assert_eq!(
            self.point.values(),
            expected,
            "Values differ for {}",
            self.point
        );
        self
    }
}

// ============================================================================
// Error Assertions
// ============================================================================

pub struct ErrorAssertion<'a> {
    error: &'a ParseError,
}

impl<'a> ErrorAssertion<'a> {
    pub fn is_syntax(self) -> Self {
        assert!(
            self.error.is_syntax(),
            "Expected a syntax error, found: {}",
            self.error
        );
        self
    }

    pub fn is_range(self) -> Self {
        assert!(
            self.error.is_range(),
            "Expected a range error, found: {}",
            self.error
        );
        self
    }

    /// Assert the offending token's byte offset; `None` means end of input
    pub fn at(self, expected: Option<usize>) -> Self {
        assert_eq!(
            self.error.position(),
            expected,
            "Wrong error position in: {}",
            self.error
        );
        self
    }

    pub fn message_contains(self, fragment: &str) -> Self {
        let message = self.error.to_string();
        assert!(
            message.contains(fragment),
            "Expected message to contain {:?}, found: {}",
            fragment,
            message
        );
        self
    }

    pub fn message(self, expected: &str) -> Self {
        assert_eq!(self.error.to_string(), expected);
        self
    }
}
