//! Lexer
//!
//!     Tokenization is handled entirely by logos (see [token](crate::geo::token)); this
//!     module walks the logos lexer, attaches values and byte offsets, and wraps the result
//!     in a [TokenStream] for the grammar.
//!
//!     The tokenizer never fails. Characters logos does not recognize come out as
//!     `Unknown` tokens and are rejected later by the grammar, so lexical and grammatical
//!     problems are reported the same way.
//!
//! Lookahead
//!
//!     The grammar is LL(1) with a single exception: telling a trailing degree-only second
//!     coordinate (`40° 79°`) apart from continued minutes (`40° 26' ...`) needs the token
//!     after the lookahead. [TokenStream::peek] takes the distance from the lookahead, and
//!     the grammar never asks for more than 2.

use super::token::{Token, TokenKind};
use logos::Logos;
use tracing::trace;

/// Tokenize a coordinate string, keeping every token with its byte offset.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Unknown);
        let token = Token::new(kind, lexer.slice(), lexer.span().start);
        trace!(
            target: "geostr::lexer",
            kind = ?token.kind,
            lexeme = token.lexeme,
            position = token.position,
            "Produced token"
        );
        tokens.push(token);
    }

    tokens
}

/// Cursor over the tokens of one input
///
/// Mirrors the usual current/lookahead pair: nothing is current until the first
/// [advance](TokenStream::advance), after which the lookahead is the next unconsumed token.
#[derive(Debug, Clone)]
pub struct TokenStream<'src> {
    tokens: Vec<Token<'src>>,
    // Index of the lookahead token; `None` before the first advance
    lookahead: Option<usize>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::from_tokens(tokenize(source))
    }

    pub(crate) fn from_tokens(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens,
            lookahead: None,
        }
    }

    /// Move the lookahead into the current slot. Returns whether a new lookahead exists.
    pub fn advance(&mut self) -> bool {
        let next = self.lookahead.map_or(0, |index| index + 1);
        self.lookahead = Some(next.min(self.tokens.len()));
        next < self.tokens.len()
    }

    /// Rewind to the state before the first advance.
    pub fn reset(&mut self) {
        self.lookahead = None;
    }

    /// The most recently consumed token
    pub fn current(&self) -> Option<&Token<'src>> {
        let index = self.lookahead?.checked_sub(1)?;
        self.tokens.get(index)
    }

    pub fn lookahead(&self) -> Option<&Token<'src>> {
        self.peek(1)
    }

    /// The token after the lookahead
    pub fn glimpse(&self) -> Option<&Token<'src>> {
        self.peek(2)
    }

    /// Look `distance` tokens ahead without consuming; `peek(1)` is the lookahead.
    pub fn peek(&self, distance: usize) -> Option<&Token<'src>> {
        let index = (self.lookahead? + distance).checked_sub(1)?;
        self.tokens.get(index)
    }

    pub fn is_next(&self, kind: TokenKind) -> bool {
        self.lookahead().is_some_and(|token| token.kind == kind)
    }

    /// Whether the lookahead's kind satisfies `predicate` (e.g. [TokenKind::is_number])
    pub fn is_next_matching(&self, predicate: impl Fn(TokenKind) -> bool) -> bool {
        self.lookahead().is_some_and(|token| predicate(token.kind))
    }

    pub fn is_exhausted(&self) -> bool {
        self.lookahead().is_none()
    }
}
