//! This module provides the token types produced by the literal lexer and
//! consumed by the literal parser.

mod literal_token;
mod literal_token_kind;

pub use literal_token::LiteralToken;
pub use literal_token_kind::LiteralTokenKind;
