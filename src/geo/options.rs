//! Parser configuration
//!
//! Options are plain serde data so applications can embed them in their own config
//! files. Every field has a default; an empty document deserializes to
//! [ParserOptions::default].

use serde::{Deserialize, Serialize};

/// Knobs exposed by the coordinate parser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Prepended to every token-kind name in syntax-error messages.
    ///
    /// With an empty prefix errors read `Expected T_DEGREE`; consumers matching fully
    /// qualified kind names (`Vendor\Lexer::T_DEGREE`) set the qualifier here.
    pub token_prefix: String,
}

impl ParserOptions {
    pub fn with_token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.token_prefix = prefix.into();
        self
    }
}
