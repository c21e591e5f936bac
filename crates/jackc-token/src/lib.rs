//! Jack Token Model
//!
//! The data carriers exchanged between the tokenizer and the syntax
//! analyzer. The tokenizer itself lives upstream; this crate only defines
//! the shape of its output: a kind tag plus the literal token text.
//!
//! # Example
//!
//! ```
//! use jackc_token::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Keyword, "class");
//! assert_eq!(token.kind.to_string(), "keyword");
//! ```

pub mod token;

pub use token::{Token, TokenKind};

/// Error for a kind tag that is not one of the five known tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind: {0}")]
pub struct UnknownTokenKind(pub String);
