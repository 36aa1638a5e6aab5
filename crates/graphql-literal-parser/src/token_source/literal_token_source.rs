use crate::LiteralLexError;
use crate::token::LiteralToken;

/// Marker trait for literal lexers: iterators that produce
/// [`LiteralToken`]s or stop with a [`LiteralLexError`].
///
/// [`StrLiteralTokenSource`](crate::token_source::StrLiteralTokenSource) is
/// the lexer over `&str` input. Any other iterator with the right item type
/// (for example a `Vec` of pre-built tokens in tests) can drive a
/// [`LiteralParser`](crate::LiteralParser) too.
///
/// Lexers are responsible for:
/// - Skipping whitespace
/// - Yielding an `Err` (and then nothing) when no token matches
/// - Yielding a final [`Eof`](crate::token::LiteralTokenKind::Eof) token
///
/// All lookahead and buffering is handled by
/// [`LiteralTokenStream`](crate::LiteralTokenStream).
pub trait LiteralTokenSource<'src>:
    Iterator<Item = Result<LiteralToken<'src>, LiteralLexError>> {}

impl<'src, T> LiteralTokenSource<'src> for T
where T: Iterator<Item = Result<LiteralToken<'src>, LiteralLexError>> {}
