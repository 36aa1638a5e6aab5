//! Token source trait and the `&str` lexer implementation.

mod lex_rules;
mod literal_token_source;
mod str_literal_token_source;

pub use literal_token_source::LiteralTokenSource;
pub use str_literal_token_source::StrLiteralTokenSource;

#[cfg(test)]
mod tests;
