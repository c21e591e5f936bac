//! Jack Syntax Analyzer
//!
//! Builds a concrete parse tree from the token stream of one compilation
//! unit. The parser exposes one public method per grammar rule, fails fast
//! on the first mismatch, and preserves every consumed terminal in the
//! tree in grammar order.
//!
//! ```text
//! Source → Tokenizer → Vec<Token> → Parser → ParseTree
//! ```

pub mod parser;
pub mod tree;

pub use parser::Parser;
pub use tree::{ParseTree, Rule};

/// Raised on any grammar mismatch: wrong token kind, wrong token value,
/// or premature end of input. Carries no position data; tokens have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("An Exception occurred while parsing!")]
pub struct ParseError;
