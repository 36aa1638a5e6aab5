//! Various test utils.

use crate::LiteralLexError;
use crate::LiteralParseError;
use crate::LiteralValue;
use crate::parse_default_value;
use crate::token::LiteralToken;
use crate::token::LiteralTokenKind;

/// Parses `source` and panics with the error if it fails.
pub fn parse_ok(source: &str) -> LiteralValue {
    match parse_default_value(source) {
        Ok(value) => value,
        Err(err) => panic!("Expected `{source}` to parse, got: {err:?}"),
    }
}

/// Parses `source` and panics if it succeeds.
pub fn parse_err(source: &str) -> LiteralParseError {
    match parse_default_value(source) {
        Ok(value) => panic!("Expected `{source}` to fail, got: {value:?}"),
        Err(err) => err,
    }
}

pub fn int(raw: &str) -> LiteralValue {
    LiteralValue::Int(raw.to_string())
}

pub fn float(raw: &str) -> LiteralValue {
    LiteralValue::Float(raw.to_string())
}

pub fn string(content: &str) -> LiteralValue {
    LiteralValue::String(content.to_string())
}

pub fn enum_value(name: &str) -> LiteralValue {
    LiteralValue::Enum(name.to_string())
}

/// Creates a token with the given kind, lexeme and offset.
pub fn mock_token(
    kind: LiteralTokenKind,
    lexeme: &'static str,
    offset: usize,
) -> Result<LiteralToken<'static>, LiteralLexError> {
    Ok(LiteralToken::new(kind, lexeme, offset))
}

/// A mock token source that produces pre-built items from a Vec.
pub struct MockTokenSource {
    items: std::vec::IntoIter<Result<LiteralToken<'static>, LiteralLexError>>,
}

impl MockTokenSource {
    pub fn new(
        items: Vec<Result<LiteralToken<'static>, LiteralLexError>>,
    ) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Result<LiteralToken<'static>, LiteralLexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}
