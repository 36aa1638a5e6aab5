//! Tests for LiteralTokenStream.

use crate::LiteralLexError;
use crate::LiteralTokenStream;
use crate::tests::utils::MockTokenSource;
use crate::tests::utils::mock_token;
use crate::token::LiteralTokenKind;

fn stream(
    items: Vec<Result<crate::token::LiteralToken<'static>, LiteralLexError>>,
) -> LiteralTokenStream<'static, MockTokenSource> {
    LiteralTokenStream::new(MockTokenSource::new(items))
}

// =============================================================================
// Basic functionality tests
// =============================================================================

/// Verifies that peek() returns the next token without consuming it.
#[test]
fn peek_without_consuming() {
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::Name, "RED", 0),
        mock_token(LiteralTokenKind::Eof, "", 3),
    ]);

    let first_peek = stream.peek().map(|t| t.kind);
    let second_peek = stream.peek().map(|t| t.kind);
    assert_eq!(first_peek, Ok(LiteralTokenKind::Name));
    assert_eq!(first_peek, second_peek);

    let consumed = stream.consume().expect("token");
    assert_eq!(consumed.lexeme, "RED");
}

#[test]
fn consume_advances() {
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::SquareBracketOpen, "[", 0),
        mock_token(LiteralTokenKind::SquareBracketClose, "]", 1),
        mock_token(LiteralTokenKind::Eof, "", 2),
    ]);

    assert_eq!(
        stream.consume().map(|t| t.kind),
        Ok(LiteralTokenKind::SquareBracketOpen),
    );
    assert_eq!(
        stream.peek().map(|t| t.kind),
        Ok(LiteralTokenKind::SquareBracketClose),
    );
}

#[test]
fn peek_nth_looks_ahead_without_consuming() {
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::Name, "a", 0),
        mock_token(LiteralTokenKind::Colon, ":", 1),
        mock_token(LiteralTokenKind::Int, "1", 3),
        mock_token(LiteralTokenKind::Eof, "", 4),
    ]);

    assert_eq!(stream.peek_nth(2).map(|t| t.lexeme), Ok("1"));
    assert_eq!(stream.current_buffer_len(), 3);
    assert_eq!(stream.peek().map(|t| t.lexeme), Ok("a"));
}

/// Tokens are pulled from the source lazily.
#[test]
fn buffer_fills_lazily() {
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::Int, "1", 0),
        mock_token(LiteralTokenKind::Int, "2", 2),
        mock_token(LiteralTokenKind::Eof, "", 3),
    ]);

    assert_eq!(stream.current_buffer_len(), 0);
    let _ = stream.peek();
    assert_eq!(stream.current_buffer_len(), 1);
    let _ = stream.consume();
    assert_eq!(stream.current_buffer_len(), 0);
}

// =============================================================================
// End of input
// =============================================================================

/// Consuming at Eof keeps returning the Eof token.
#[test]
fn eof_is_sticky() {
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::Null, "null", 0),
        mock_token(LiteralTokenKind::Eof, "", 4),
    ]);

    assert!(!stream.is_at_end());
    let _ = stream.consume();
    assert!(stream.is_at_end());
    for _ in 0..3 {
        let token = stream.consume().expect("eof");
        assert_eq!(token.kind, LiteralTokenKind::Eof);
        assert_eq!(token.offset, 4);
    }
    assert_eq!(
        stream.peek_nth(10).map(|t| t.kind),
        Ok(LiteralTokenKind::Eof),
    );
}

/// A source that ends without Eof gets one at the end of its last token.
#[test]
fn missing_eof_is_synthesized() {
    let mut stream = stream(vec![mock_token(LiteralTokenKind::Int, "12", 3)]);

    let _ = stream.consume();
    let eof = stream.peek().expect("synthesized eof");
    assert_eq!(eof.kind, LiteralTokenKind::Eof);
    assert_eq!(eof.offset, 5);
}

#[test]
fn empty_source_is_at_end() {
    let mut stream = stream(vec![]);

    assert!(stream.is_at_end());
    assert_eq!(stream.peek().map(|t| t.offset), Ok(0));
}

// =============================================================================
// Lex errors
// =============================================================================

/// A lex error is reported once the stream reaches it, and again on every
/// later peek.
#[test]
fn lex_error_is_sticky() {
    let err = LiteralLexError::new(2, '@');
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::Int, "1", 0),
        Err(err.clone()),
    ]);

    assert_eq!(stream.consume().map(|t| t.lexeme), Ok("1"));
    assert_eq!(stream.peek(), Err(err.clone()));
    assert_eq!(stream.consume(), Err(err.clone()));
    assert!(!stream.is_at_end());
}

/// Looking ahead into a lex error fails even while earlier tokens are still
/// readable.
#[test]
fn peek_nth_into_lex_error() {
    let err = LiteralLexError::new(1, '#');
    let mut stream = stream(vec![
        mock_token(LiteralTokenKind::CurlyBraceOpen, "{", 0),
        Err(err.clone()),
    ]);

    assert_eq!(stream.peek_nth(1), Err(err));
    assert_eq!(
        stream.peek().map(|t| t.kind),
        Ok(LiteralTokenKind::CurlyBraceOpen),
    );
}
