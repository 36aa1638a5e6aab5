//! Lookahead buffer over a [`LiteralTokenSource`].

use std::collections::VecDeque;

use crate::LiteralLexError;
use crate::token::LiteralToken;
use crate::token::LiteralTokenKind;
use crate::token_source::LiteralTokenSource;

/// Streaming view over a [`LiteralTokenSource`] with bounded lookahead.
///
/// Tokens are pulled from the source lazily, so a lex error deep in the input
/// only surfaces once the parser actually looks at that position.
///
/// Once the source is exhausted the stream keeps answering with its final
/// [`Eof`](LiteralTokenKind::Eof) token: `consume()` never removes it and
/// `peek_nth()` past the end returns it. A source that ends without an `Eof`
/// token gets one synthesized at the end offset of its last token. A lex
/// error is sticky in the same way.
pub struct LiteralTokenStream<
    'src,
    TTokenSource: LiteralTokenSource<'src>,
> {
    token_source: TTokenSource,
    /// Unconsumed tokens. The back is `Eof` once the source is exhausted.
    buffer: VecDeque<LiteralToken<'src>>,
    /// The error that stopped the token source, if any.
    lex_error: Option<LiteralLexError>,
    /// End offset of the most recently buffered token.
    last_end_offset: usize,
}

impl<'src, TTokenSource: LiteralTokenSource<'src>>
    LiteralTokenStream<'src, TTokenSource>
{
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            lex_error: None,
            last_end_offset: 0,
        }
    }

    /// Advance past the next token and return it.
    ///
    /// At end of input this returns the `Eof` token without removing it.
    pub fn consume(&mut self) -> Result<LiteralToken<'src>, LiteralLexError> {
        let token = self.peek()?.clone();
        if token.kind != LiteralTokenKind::Eof {
            self.buffer.pop_front();
        }
        Ok(token)
    }

    /// Returns the number of tokens currently buffered (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the next token is `Eof`.
    ///
    /// A pending lex error is not the end: it still has to be reported.
    pub fn is_at_end(&mut self) -> bool {
        matches!(
            self.peek(),
            Ok(LiteralToken { kind: LiteralTokenKind::Eof, .. }),
        )
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Result<&LiteralToken<'src>, LiteralLexError> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed token).
    pub fn peek_nth(
        &mut self,
        n: usize,
    ) -> Result<&LiteralToken<'src>, LiteralLexError> {
        self.fill_buffer(n + 1);
        if n < self.buffer.len() {
            return Ok(&self.buffer[n]);
        }
        match (&self.lex_error, self.buffer.back()) {
            (Some(err), _) => Err(err.clone()),
            (None, Some(eof)) => Ok(eof),
            (None, None) => unreachable!(
                "fill_buffer() always leaves either an Eof token or a lex \
                error behind",
            ),
        }
    }

    /// Pull from the token source until at least `count` tokens are buffered,
    /// the `Eof` token is buffered, or the source fails.
    fn fill_buffer(&mut self, count: usize) {
        while self.buffer.len() < count && self.lex_error.is_none() {
            if self.buffer.back().is_some_and(|t| t.kind == LiteralTokenKind::Eof) {
                break;
            }
            match self.token_source.next() {
                Some(Ok(token)) => {
                    self.last_end_offset = token.end_offset();
                    self.buffer.push_back(token);
                },
                Some(Err(err)) => self.lex_error = Some(err),
                None => self.buffer.push_back(LiteralToken::new(
                    LiteralTokenKind::Eof,
                    "",
                    self.last_end_offset,
                )),
            }
        }
    }
}
