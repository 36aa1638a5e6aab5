//! A [`LiteralTokenSource`] that lexes from a `&str` input.
//!
//! Tokens borrow their lexemes directly from the source string, so lexing
//! never allocates.
//!
//! # Usage
//!
//! ```rust
//! use graphql_literal_parser::token::LiteralTokenKind;
//! use graphql_literal_parser::token_source::StrLiteralTokenSource;
//!
//! let kinds = StrLiteralTokenSource::new("[1, true]")
//!     .map(|token| token.map(|token| token.kind))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(kinds, vec![
//!     LiteralTokenKind::SquareBracketOpen,
//!     LiteralTokenKind::Int,
//!     LiteralTokenKind::Comma,
//!     LiteralTokenKind::True,
//!     LiteralTokenKind::SquareBracketClose,
//!     LiteralTokenKind::Eof,
//! ]);
//! ```
//!
//! [`LiteralTokenSource`]: crate::token_source::LiteralTokenSource

use crate::LiteralLexError;
use crate::token::LiteralToken;
use crate::token::LiteralTokenKind;
use crate::token_source::lex_rules::LEX_RULES;
use crate::token_source::lex_rules::LexRuleAction;

/// A lexer over a `&str` that yields `Result<LiteralToken, LiteralLexError>`.
///
/// The final item is always either an [`Eof`](LiteralTokenKind::Eof) token or
/// a [`LiteralLexError`]; the iterator is fused after either one.
pub struct StrLiteralTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Byte offset of the next unlexed character.
    curr_offset: usize,

    /// Whether the final item (Eof or a lex error) has been emitted.
    finished: bool,
}

impl<'src> StrLiteralTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_offset: 0,
            finished: false,
        }
    }

    /// Lexes the whole source eagerly, stopping at the first lex error.
    ///
    /// The returned tokens always end with an `Eof` token.
    pub fn tokenize(
        source: &'src str,
    ) -> Result<Vec<LiteralToken<'src>>, LiteralLexError> {
        Self::new(source).collect()
    }

    /// Skips whitespace and lexes the next token.
    fn next_token(&mut self) -> Result<LiteralToken<'src>, LiteralLexError> {
        'scan: loop {
            let rest = &self.source[self.curr_offset..];
            let Some(first_char) = rest.chars().next() else {
                return Ok(LiteralToken::new(
                    LiteralTokenKind::Eof,
                    "",
                    self.curr_offset,
                ));
            };

            for rule in LEX_RULES {
                let Some(len) = (rule.matcher)(rest) else {
                    continue;
                };
                let start = self.curr_offset;
                self.curr_offset += len;
                match rule.action {
                    LexRuleAction::Skip => continue 'scan,
                    LexRuleAction::Emit(kind) => {
                        return Ok(LiteralToken::new(
                            kind,
                            &self.source[start..self.curr_offset],
                            start,
                        ));
                    },
                }
            }

            return Err(LiteralLexError::new(self.curr_offset, first_char));
        }
    }
}

impl<'src> Iterator for StrLiteralTokenSource<'src> {
    type Item = Result<LiteralToken<'src>, LiteralLexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.kind == LiteralTokenKind::Eof,
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for StrLiteralTokenSource<'_> {}
