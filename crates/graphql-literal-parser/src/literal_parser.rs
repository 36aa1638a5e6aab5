//! Recursive descent parser for GraphQL literal values.
//!
//! The grammar, one method per production:
//!
//! ```text
//! Document     ::= Value Eof
//! Value        ::= IntValue | FloatValue | StringValue | BooleanValue
//!                | NullValue | EnumValue | ListValue | ObjectValue
//! IntValue     ::= INT
//! FloatValue   ::= FLOAT | FLOAT_EXP
//! StringValue  ::= STRING | BLOCK_STRING
//! BooleanValue ::= TRUE | FALSE
//! NullValue    ::= NULL
//! EnumValue    ::= NAME
//! ListValue    ::= "[" ( Value | "," )* "]"
//! ObjectValue  ::= "{" ( ObjectField ","? )* "}"
//! ObjectField  ::= NAME ":" Value
//! ```
//!
//! There is no error recovery. The first error aborts the parse.

use crate::ExpectedTokenKinds;
use crate::LiteralParseError;
use crate::LiteralTokenStream;
use crate::LiteralValue;
use crate::token::LiteralToken;
use crate::token::LiteralTokenKind;
use crate::token_source::LiteralTokenSource;
use crate::token_source::StrLiteralTokenSource;
use indexmap::IndexMap;
use smallvec::smallvec;

/// A recursive descent parser for a single GraphQL literal value.
///
/// Generic over the token source so tests (and other front-ends) can feed
/// pre-built tokens; [`LiteralParser::new`] lexes from a string.
///
/// # Usage
///
/// ```
/// use graphql_literal_parser::LiteralParser;
/// use graphql_literal_parser::LiteralValue;
///
/// let value = LiteralParser::new("[1, 2.5, RED]")
///     .parse_value_document()
///     .unwrap();
///
/// assert_eq!(value, LiteralValue::List(vec![
///     LiteralValue::Int("1".to_string()),
///     LiteralValue::Float("2.5".to_string()),
///     LiteralValue::Enum("RED".to_string()),
/// ]));
/// ```
pub struct LiteralParser<'src, TTokenSource: LiteralTokenSource<'src>> {
    token_stream: LiteralTokenStream<'src, TTokenSource>,

    /// Current list/object nesting depth, bounded by `MAX_RECURSION_DEPTH`.
    recursion_depth: usize,
}

impl<'src> LiteralParser<'src, StrLiteralTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrLiteralTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: LiteralTokenSource<'src>>
    LiteralParser<'src, TTokenSource>
{
    /// Maximum nesting depth of lists and objects.
    ///
    /// Prevents stack overflow on adversarial inputs like `[[[[[...`.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: LiteralTokenStream::new(token_source),
            recursion_depth: 0,
        }
    }

    /// Parses exactly one value and requires that nothing but whitespace
    /// follows it.
    pub fn parse_value_document(
        mut self,
    ) -> Result<LiteralValue, LiteralParseError> {
        let value = self.parse_value()?;
        self.expect(LiteralTokenKind::Eof)?;
        Ok(value)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Kind and offset of the next token.
    fn peek_kind(&mut self) -> Result<(LiteralTokenKind, usize), LiteralParseError> {
        let token = self.token_stream.peek()?;
        Ok((token.kind, token.offset))
    }

    /// Consumes the next token if it is of `expected_kind`.
    fn expect(
        &mut self,
        expected_kind: LiteralTokenKind,
    ) -> Result<LiteralToken<'src>, LiteralParseError> {
        let (kind, offset) = self.peek_kind()?;
        if kind != expected_kind {
            return Err(LiteralParseError::UnexpectedToken {
                offset,
                expected: smallvec![expected_kind],
                found: kind,
            });
        }
        Ok(self.token_stream.consume()?)
    }

    /// Consumes the next token if it is a comma.
    fn skip_optional_comma(&mut self) -> Result<(), LiteralParseError> {
        if self.peek_kind()?.0 == LiteralTokenKind::Comma {
            self.token_stream.consume()?;
        }
        Ok(())
    }

    fn enter_recursion(&mut self) -> Result<(), LiteralParseError> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let (_, offset) = self.peek_kind()?;
            return Err(LiteralParseError::NestingTooDeep {
                offset,
                max_depth: Self::MAX_RECURSION_DEPTH,
            });
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Runs a list or object production one nesting level deeper. Scalars
    /// never count toward the limit.
    fn parse_nested(
        &mut self,
        production: fn(&mut Self) -> Result<LiteralValue, LiteralParseError>,
    ) -> Result<LiteralValue, LiteralParseError> {
        self.enter_recursion()?;
        let result = production(self);
        self.exit_recursion();
        result
    }

    // =========================================================================
    // Productions
    // =========================================================================

    /// Dispatches on the lookahead token to the matching production.
    fn parse_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        let (kind, offset) = self.peek_kind()?;
        match kind {
            LiteralTokenKind::Int => self.parse_int_value(),
            LiteralTokenKind::Float => self.parse_float_value(),
            LiteralTokenKind::String
            | LiteralTokenKind::BlockString => self.parse_string_value(),
            LiteralTokenKind::True
            | LiteralTokenKind::False => self.parse_boolean_value(),
            LiteralTokenKind::Null => self.parse_null_value(),
            LiteralTokenKind::Name => self.parse_enum_value(),
            LiteralTokenKind::SquareBracketOpen => {
                self.parse_nested(Self::parse_list_value)
            },
            LiteralTokenKind::CurlyBraceOpen => {
                self.parse_nested(Self::parse_object_value)
            },

            LiteralTokenKind::SquareBracketClose
            | LiteralTokenKind::CurlyBraceClose
            | LiteralTokenKind::Colon
            | LiteralTokenKind::Comma
            | LiteralTokenKind::Eof => Err(LiteralParseError::UnexpectedToken {
                offset,
                expected: ExpectedTokenKinds::from_slice(
                    &LiteralTokenKind::value_starts(),
                ),
                found: kind,
            }),
        }
    }

    fn parse_int_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        let token = self.expect(LiteralTokenKind::Int)?;
        Ok(LiteralValue::Int(token.lexeme.to_string()))
    }

    fn parse_float_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        let token = self.expect(LiteralTokenKind::Float)?;
        Ok(LiteralValue::Float(token.lexeme.to_string()))
    }

    /// Strips exactly one quote from each end of a `STRING` and exactly three
    /// from each end of a `BLOCK_STRING`. Escape sequences are kept verbatim.
    fn parse_string_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        let token = self.token_stream.consume()?;
        let quote_len = match token.kind {
            LiteralTokenKind::String => 1,
            LiteralTokenKind::BlockString => 3,
            found => return Err(LiteralParseError::UnexpectedToken {
                offset: token.offset,
                expected: smallvec![
                    LiteralTokenKind::BlockString,
                    LiteralTokenKind::String,
                ],
                found,
            }),
        };
        Ok(LiteralValue::String(
            strip_quotes(token.lexeme, quote_len).to_string(),
        ))
    }

    fn parse_boolean_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        let token = self.token_stream.consume()?;
        match token.kind {
            LiteralTokenKind::True => Ok(LiteralValue::Boolean(true)),
            LiteralTokenKind::False => Ok(LiteralValue::Boolean(false)),
            found => Err(LiteralParseError::UnexpectedToken {
                offset: token.offset,
                expected: smallvec![
                    LiteralTokenKind::True,
                    LiteralTokenKind::False,
                ],
                found,
            }),
        }
    }

    fn parse_null_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        self.expect(LiteralTokenKind::Null)?;
        Ok(LiteralValue::Null)
    }

    /// `true`, `false` and `null` never reach here: they are lexed as
    /// keywords, not names.
    fn parse_enum_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        let token = self.expect(LiteralTokenKind::Name)?;
        Ok(LiteralValue::Enum(token.lexeme.to_string()))
    }

    /// Parses a list value: `[value, value, ...]`
    ///
    /// Commas are pure separators here: any number of them may appear before,
    /// between, or after the items.
    fn parse_list_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        self.expect(LiteralTokenKind::SquareBracketOpen)?;

        let mut items = Vec::new();
        loop {
            let (kind, offset) = self.peek_kind()?;
            match kind {
                LiteralTokenKind::SquareBracketClose => break,
                LiteralTokenKind::Comma => {
                    self.token_stream.consume()?;
                },
                kind if kind.starts_value() => items.push(self.parse_value()?),
                found => {
                    let mut expected: ExpectedTokenKinds =
                        smallvec![LiteralTokenKind::SquareBracketClose];
                    expected.extend(LiteralTokenKind::value_starts());
                    return Err(LiteralParseError::UnexpectedToken {
                        offset,
                        expected,
                        found,
                    });
                },
            }
        }

        self.expect(LiteralTokenKind::SquareBracketClose)?;
        Ok(LiteralValue::List(items))
    }

    /// Parses an object value: `{ field: value, ... }`
    ///
    /// A repeated field name overwrites the earlier value.
    fn parse_object_value(&mut self) -> Result<LiteralValue, LiteralParseError> {
        self.expect(LiteralTokenKind::CurlyBraceOpen)?;

        let mut fields = IndexMap::new();
        while self.peek_kind()?.0 != LiteralTokenKind::CurlyBraceClose {
            let (name, value) = self.parse_object_field()?;
            fields.insert(name, value);
            self.skip_optional_comma()?;
        }

        self.expect(LiteralTokenKind::CurlyBraceClose)?;
        Ok(LiteralValue::Object(fields))
    }

    /// Parses `name: value`.
    fn parse_object_field(
        &mut self,
    ) -> Result<(String, LiteralValue), LiteralParseError> {
        let (kind, offset) = self.peek_kind()?;
        if kind != LiteralTokenKind::Name {
            return Err(LiteralParseError::UnexpectedToken {
                offset,
                expected: smallvec![
                    LiteralTokenKind::Name,
                    LiteralTokenKind::CurlyBraceClose,
                ],
                found: kind,
            });
        }
        let name = self.token_stream.consume()?.lexeme.to_string();
        self.expect(LiteralTokenKind::Colon)?;
        let value = self.parse_value()?;
        Ok((name, value))
    }
}

fn strip_quotes(lexeme: &str, quote_len: usize) -> &str {
    lexeme
        .get(quote_len..lexeme.len().saturating_sub(quote_len))
        .unwrap_or("")
}
