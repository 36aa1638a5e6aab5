//! A strict lexer and recursive descent parser for single GraphQL literal
//! values, such as the `defaultValue` strings carried by introspection
//! results (`{name: "Hello", score: 1.0}`, `[RED, GREEN]`, `42`, ...).
//!
//! The parser returns a raw [`LiteralValue`] tree. It does not validate the
//! tree against any schema type and it does not unescape string content.

mod literal_lex_error;
mod literal_parse_error;
mod literal_parser;
mod literal_token_stream;
mod literal_value;
pub mod token;
pub mod token_source;

pub use literal_lex_error::LiteralLexError;
pub use literal_parse_error::ExpectedTokenKinds;
pub use literal_parse_error::LiteralParseError;
pub use literal_parser::LiteralParser;
pub use literal_token_stream::LiteralTokenStream;
pub use literal_value::LiteralValue;

/// Parses `raw` as exactly one GraphQL literal value.
///
/// Leading and trailing whitespace is ignored; any other trailing input is an
/// error.
///
/// ```
/// use graphql_literal_parser::LiteralValue;
/// use graphql_literal_parser::parse_default_value;
///
/// let value = parse_default_value("{name: \"Hello\", score: 1.0}").unwrap();
/// let fields = value.as_object().unwrap();
///
/// assert_eq!(fields["name"], LiteralValue::String("Hello".to_string()));
/// assert_eq!(fields["score"], LiteralValue::Float("1.0".to_string()));
/// assert!(parse_default_value("123 456").is_err());
/// ```
pub fn parse_default_value(raw: &str) -> Result<LiteralValue, LiteralParseError> {
    LiteralParser::new(raw).parse_value_document()
}

#[cfg(test)]
mod tests;
