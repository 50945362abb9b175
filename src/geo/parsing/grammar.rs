//! Coordinate grammar
//!
//!     point       := coordinate [","] [coordinate]
//!     coordinate  := [sign] degrees [cardinal]
//!     degrees     := FLOAT ["°"]
//!                  | INTEGER [symbol minutes]
//!     minutes     := INTEGER [symbol seconds]
//!                  | FLOAT [symbol]
//!     seconds     := (INTEGER | FLOAT) [symbol]
//!     symbol      := ":" | "°" | "'" | "\""
//!     cardinal    := N | S | E | W
//!
//! Which symbol is acceptable, and whether a cardinal letter is required, depends on what
//! the first coordinate of a pair committed to (see [PairState]). Degree style progresses
//! strictly `°` → `'` → `"`; colon style repeats `:`.
//!
//! Every rule is built on [Grammar::expect] plus lookahead tests. There is no backtracking.
//! The one place needing the token after the lookahead is in [Grammar::degrees]: after
//! `40°`, a number followed by `°` starts the second coordinate (`40° 79°`) rather than
//! minutes (`40° 26' ...`).

use super::state::{CardinalRule, PairState, SymbolRule};
use crate::geo::error::{
    Bound, Expectation, Expected, Found, ParseError, ParseResult, RangeField,
};
use crate::geo::lexing::TokenStream;
use crate::geo::options::ParserOptions;
use crate::geo::token::{Axis, Token, TokenKind};
use crate::geo::value::{Point, Value};
use tracing::{debug, trace};

/// Minutes and seconds above this are rejected; exactly 60 is accepted
const SEXAGESIMAL_LIMIT: i64 = 60;

/// Call-local parse context: one input, its tokens, and the pair state
pub(crate) struct Grammar<'src, 'opt> {
    input: &'src str,
    stream: TokenStream<'src>,
    state: PairState,
    options: &'opt ParserOptions,
}

impl<'src, 'opt> Grammar<'src, 'opt> {
    pub(crate) fn new(input: &'src str, options: &'opt ParserOptions) -> Self {
        Self {
            input,
            stream: TokenStream::new(input),
            state: PairState::default(),
            options,
        }
    }

    pub(crate) fn run(mut self) -> ParseResult<Point> {
        self.stream.advance();
        self.point()
    }

    fn point(&mut self) -> ParseResult<Point> {
        let first = self.coordinate()?;

        if self.stream.is_exhausted() {
            return Ok(Point::Single(first));
        }

        if self.stream.is_next(TokenKind::Comma) {
            self.expect(TokenKind::Comma)?;
        }

        let second = self.coordinate()?;

        if !self.stream.is_exhausted() {
            return Err(self.syntax_error(Expectation::EndOfString));
        }

        Ok(Point::Pair(first, second))
    }

    fn coordinate(&mut self) -> ParseResult<Value> {
        trace!(target: "geostr::parser", state = ?self.state, "coordinate");

        // Once a cardinal letter is required the sign comes from it
        let mut sign = None;
        if !self.state.cardinal.is_required() && self.stream.is_next_matching(TokenKind::is_sign) {
            sign = Some(self.sign()?);
        }

        let magnitude = self.degrees()?;

        if sign.is_none() {
            let letter_follows = self.stream.is_next_matching(TokenKind::is_cardinal);
            match self.state.cardinal {
                CardinalRule::Required(_) => return self.cardinal(magnitude),
                CardinalRule::Open if letter_follows => return self.cardinal(magnitude),
                _ => {}
            }
        }

        self.state.cardinal = CardinalRule::Forbidden;
        Ok(magnitude.signed(sign.unwrap_or(1)))
    }

    fn degrees(&mut self) -> ParseResult<Value> {
        if matches!(self.state.symbol, SymbolRule::Apostrophe | SymbolRule::Quote) {
            self.state.symbol = SymbolRule::Degree;
        }

        // A float degree value never carries minutes or seconds
        if self.stream.is_next(TokenKind::Float) {
            let degrees = self.expect_number(TokenKind::Float)?;

            if self.stream.is_next(TokenKind::Degree) {
                self.expect(TokenKind::Degree)?;
                self.state.symbol = SymbolRule::Degree;
            }

            return Ok(degrees);
        }

        let degrees = self.number()?;

        if !self.symbol()? {
            return Ok(degrees);
        }

        // `40° 79°`: the number and degree sign belong to the second coordinate
        let degree_follows_number = self.stream.is_next_matching(TokenKind::is_number)
            && self
                .stream
                .glimpse()
                .is_some_and(|token| token.kind == TokenKind::Degree);
        if self.state.symbol != SymbolRule::Colon && degree_follows_number {
            return Ok(degrees);
        }

        let minutes = self.minutes()?;
        Ok(degrees.plus_fraction(minutes))
    }

    /// Minutes as a fraction of a degree, seconds included
    fn minutes(&mut self) -> ParseResult<f64> {
        if self.state.symbol == SymbolRule::Colon || self.stream.is_next(TokenKind::Integer) {
            let read = self.expect_number(TokenKind::Integer)?;
            if read.exceeds(SEXAGESIMAL_LIMIT) {
                return Err(
                    self.range_error(RangeField::Minutes, Bound::above(SEXAGESIMAL_LIMIT))
                );
            }

            let minutes = read.as_f64() / 60.0;

            if self.state.symbol == SymbolRule::Colon && !self.stream.is_next(TokenKind::Colon) {
                return Ok(minutes);
            }

            self.symbol()?;

            return Ok(minutes + self.seconds()?);
        }

        // Float minutes never have seconds
        if self.stream.is_next(TokenKind::Float) {
            let read = self.expect_number(TokenKind::Float)?;
            if read.exceeds(SEXAGESIMAL_LIMIT) {
                return Err(
                    self.range_error(RangeField::Minutes, Bound::above(SEXAGESIMAL_LIMIT))
                );
            }

            let minutes = read.as_f64() / 60.0;
            self.symbol()?;

            return Ok(minutes);
        }

        Ok(0.0)
    }

    /// Seconds as a fraction of a degree
    fn seconds(&mut self) -> ParseResult<f64> {
        if !self.stream.is_next_matching(TokenKind::is_number) {
            return Ok(0.0);
        }

        let read = self.number()?;
        if read.exceeds(SEXAGESIMAL_LIMIT) {
            return Err(self.range_error(
                RangeField::Seconds,
                Bound::above(SEXAGESIMAL_LIMIT),
            ));
        }

        let seconds = read.as_f64() / 3600.0;

        if self.state.symbol != SymbolRule::Colon {
            self.symbol()?;
        }

        Ok(seconds)
    }

    /// Match the separator the current style asks for. Returns whether a separator was
    /// committed; `false` means this value carries no symbols.
    fn symbol(&mut self) -> ParseResult<bool> {
        match self.state.symbol {
            SymbolRule::Open if self.stream.is_next(TokenKind::Colon) => {
                self.expect(TokenKind::Colon)?;
                self.state.symbol = SymbolRule::Colon;
            }
            SymbolRule::Open if self.stream.is_next(TokenKind::Degree) => {
                self.expect(TokenKind::Degree)?;
                self.state.symbol = SymbolRule::Apostrophe;
            }
            SymbolRule::Colon => {
                self.expect(TokenKind::Colon)?;
            }
            SymbolRule::Degree => {
                self.expect(TokenKind::Degree)?;
                self.state.symbol = SymbolRule::Apostrophe;
            }
            SymbolRule::Apostrophe => {
                self.expect(TokenKind::Apostrophe)?;
                self.state.symbol = SymbolRule::Quote;
            }
            SymbolRule::Quote => {
                self.expect(TokenKind::Quote)?;
            }
            SymbolRule::Open | SymbolRule::Bare => {
                self.state.symbol = SymbolRule::Bare;
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Resolve a trailing cardinal letter into a sign, checking the axis bound.
    fn cardinal(&mut self, magnitude: Value) -> ParseResult<Value> {
        let axis = match self.state.cardinal {
            CardinalRule::Required(axis) => axis,
            _ if self.stream.is_next(TokenKind::CardinalLon) => Axis::Longitude,
            _ => Axis::Latitude,
        };

        let kind = axis.cardinal_kind();
        let direction = self
            .stream
            .lookahead()
            .filter(|token| token.kind == kind)
            .and_then(Token::direction);
        let Some(direction) = direction else {
            return Err(self.syntax_error(Expectation::Token(kind)));
        };
        self.expect(kind)?;

        self.state.cardinal = CardinalRule::Required(direction.axis().other());

        let bound = direction.axis().bound();
        if magnitude.exceeds(bound) {
            return Err(self.range_error(RangeField::Degrees, Bound::between(-bound, bound)));
        }

        Ok(magnitude.signed(direction.sign()))
    }

    fn sign(&mut self) -> ParseResult<i8> {
        if self.stream.is_next(TokenKind::Plus) {
            self.expect(TokenKind::Plus)?;
            return Ok(1);
        }

        self.expect(TokenKind::Minus)?;
        Ok(-1)
    }

    fn number(&mut self) -> ParseResult<Value> {
        if self.stream.is_next(TokenKind::Float) {
            return self.expect_number(TokenKind::Float);
        }

        if self.stream.is_next(TokenKind::Integer) {
            return self.expect_number(TokenKind::Integer);
        }

        Err(self.syntax_error(Expectation::Either(TokenKind::Integer, TokenKind::Float)))
    }

    /// Consume the lookahead if it is of `kind`, otherwise fail with a syntax error.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        match self.stream.lookahead() {
            Some(token) if token.kind == kind => {
                let token = *token;
                trace!(
                    target: "geostr::parser",
                    kind = ?token.kind,
                    lexeme = token.lexeme,
                    position = token.position,
                    "Matched token"
                );
                self.stream.advance();
                Ok(token)
            }
            _ => Err(self.syntax_error(Expectation::Token(kind))),
        }
    }

    /// Like [Grammar::expect], but the token must also carry a numeric value.
    fn expect_number(&mut self, kind: TokenKind) -> ParseResult<Value> {
        let value = self
            .stream
            .lookahead()
            .filter(|token| token.kind == kind)
            .and_then(Token::number);
        let Some(value) = value else {
            return Err(self.syntax_error(Expectation::Token(kind)));
        };
        self.expect(kind)?;
        Ok(value)
    }

    fn syntax_error(&self, expectation: Expectation) -> ParseError {
        let found = match self.stream.lookahead() {
            Some(token) => Found::Token {
                text: token.lexeme.to_string(),
                position: token.position,
            },
            None => Found::EndOfString,
        };

        let error = ParseError::Syntax {
            expected: Expected::new(expectation, self.options.token_prefix.as_str()),
            found,
            input: self.input.to_string(),
        };
        debug!(target: "geostr::parser", %error, "Syntax error");
        error
    }

    fn range_error(&self, field: RangeField, bound: Bound) -> ParseError {
        let error = ParseError::Range {
            field,
            bound,
            input: self.input.to_string(),
        };
        debug!(target: "geostr::parser", %error, "Range error");
        error
    }
}
