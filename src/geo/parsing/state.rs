//! Pair-level parser state
//!
//! The two coordinates of a pair must agree on separator convention and on whether a
//! cardinal letter is used. Whatever the first coordinate commits to is recorded here and
//! constrains the second one. A fresh state is created for every parse call.

use crate::geo::token::Axis;

/// Cardinal-letter requirement for the next coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardinalRule {
    /// Nothing seen yet; a letter may appear and will fix the axis
    #[default]
    Open,
    /// The previous coordinate's letter fixed this axis for the next one
    Required(Axis),
    /// The first coordinate carried no letter, so the second may not infer its sign from one
    Forbidden,
}

impl CardinalRule {
    pub fn is_required(self) -> bool {
        matches!(self, CardinalRule::Required(_))
    }
}

/// Separator requirement for the next degree/minute/second boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolRule {
    /// Unconstrained
    #[default]
    Open,
    /// The pair uses no symbols at all (space or comma separated decimals)
    Bare,
    /// Colon sexagesimal (`40:26:46`)
    Colon,
    /// Degree style, expecting `°`
    Degree,
    /// Degree style, expecting the minutes mark
    Apostrophe,
    /// Degree style, expecting the seconds mark
    Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairState {
    pub cardinal: CardinalRule,
    pub symbol: SymbolRule,
}
