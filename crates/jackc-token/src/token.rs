use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownTokenKind;

/// Token classification for Jack source.
///
/// The five categories the grammar distinguishes. The textual tags
/// (`keyword`, `integerConstant`, ...) are the interchange names used in
/// serialized token streams and in rendered parse trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    IntegerConstant,
    StringConstant,
}

impl TokenKind {
    /// The textual tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(TokenKind::Keyword),
            "symbol" => Ok(TokenKind::Symbol),
            "identifier" => Ok(TokenKind::Identifier),
            "integerConstant" => Ok(TokenKind::IntegerConstant),
            "stringConstant" => Ok(TokenKind::StringConstant),
            other => Err(UnknownTokenKind(other.to_string())),
        }
    }
}

/// A token produced by the Jack tokenizer.
///
/// Immutable once built; the parser inspects tokens and copies their
/// values into the tree, never mutating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
