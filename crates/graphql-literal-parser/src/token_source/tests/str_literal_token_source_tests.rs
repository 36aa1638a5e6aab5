//! Tests for StrLiteralTokenSource and the lexer rule table.

use crate::LiteralLexError;
use crate::token::LiteralToken;
use crate::token::LiteralTokenKind;
use crate::token_source::StrLiteralTokenSource;

/// Lexes `source` and returns `(kind, lexeme)` pairs, excluding the Eof.
fn lex(source: &str) -> Vec<(LiteralTokenKind, &str)> {
    let tokens = match StrLiteralTokenSource::tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("Expected `{source}` to lex, got: {err:?}"),
    };
    assert_eq!(tokens.last().map(|t| t.kind), Some(LiteralTokenKind::Eof));
    tokens[..tokens.len() - 1]
        .iter()
        .map(|token| (token.kind, token.lexeme))
        .collect()
}

fn lex_single(source: &str) -> (LiteralTokenKind, &str) {
    let tokens = lex(source);
    assert_eq!(tokens.len(), 1, "expected one token for `{source}`: {tokens:?}");
    tokens[0]
}

// =============================================================================
// Punctuators
// =============================================================================

#[test]
fn punctuators() {
    assert_eq!(lex("[]{}:,"), vec![
        (LiteralTokenKind::SquareBracketOpen, "["),
        (LiteralTokenKind::SquareBracketClose, "]"),
        (LiteralTokenKind::CurlyBraceOpen, "{"),
        (LiteralTokenKind::CurlyBraceClose, "}"),
        (LiteralTokenKind::Colon, ":"),
        (LiteralTokenKind::Comma, ","),
    ]);
}

// =============================================================================
// Numbers and rule priority
// =============================================================================

/// FLOAT_EXP is tried before INT, so an exponent is never split off as a
/// name.
#[test]
fn exponent_float_is_one_token() {
    assert_eq!(lex_single("1e10"), (LiteralTokenKind::Float, "1e10"));
    assert_eq!(lex_single("-2E+3"), (LiteralTokenKind::Float, "-2E+3"));
    assert_eq!(lex_single("0e-0"), (LiteralTokenKind::Float, "0e-0"));
}

#[test]
fn fractional_float_is_one_token() {
    assert_eq!(lex_single("1.5"), (LiteralTokenKind::Float, "1.5"));
    assert_eq!(
        lex_single("6.0221413e23"),
        (LiteralTokenKind::Float, "6.0221413e23"),
    );
    assert_eq!(lex_single("-0.0"), (LiteralTokenKind::Float, "-0.0"));
}

#[test]
fn ints() {
    assert_eq!(lex_single("0"), (LiteralTokenKind::Int, "0"));
    assert_eq!(lex_single("-42"), (LiteralTokenKind::Int, "-42"));
}

/// A leading zero ends the INT match.
#[test]
fn leading_zero_splits_tokens() {
    assert_eq!(lex("012"), vec![
        (LiteralTokenKind::Int, "0"),
        (LiteralTokenKind::Int, "12"),
    ]);
}

/// An exponent marker without digits is not part of the number.
#[test]
fn dangling_exponent_becomes_name() {
    assert_eq!(lex("1e"), vec![
        (LiteralTokenKind::Int, "1"),
        (LiteralTokenKind::Name, "e"),
    ]);
    assert_eq!(lex("1.5e"), vec![
        (LiteralTokenKind::Float, "1.5"),
        (LiteralTokenKind::Name, "e"),
    ]);
}

// =============================================================================
// Keywords and names
// =============================================================================

#[test]
fn keywords() {
    assert_eq!(lex_single("true"), (LiteralTokenKind::True, "true"));
    assert_eq!(lex_single("false"), (LiteralTokenKind::False, "false"));
    assert_eq!(lex_single("null"), (LiteralTokenKind::Null, "null"));
}

/// Keywords only match at a word boundary and are case-sensitive.
#[test]
fn keyword_prefixes_are_names() {
    assert_eq!(lex_single("trueish"), (LiteralTokenKind::Name, "trueish"));
    assert_eq!(lex_single("null_"), (LiteralTokenKind::Name, "null_"));
    assert_eq!(lex_single("false1"), (LiteralTokenKind::Name, "false1"));
    assert_eq!(lex_single("True"), (LiteralTokenKind::Name, "True"));
    assert_eq!(lex("true,false"), vec![
        (LiteralTokenKind::True, "true"),
        (LiteralTokenKind::Comma, ","),
        (LiteralTokenKind::False, "false"),
    ]);
}

#[test]
fn names() {
    assert_eq!(lex_single("_a1"), (LiteralTokenKind::Name, "_a1"));
    assert_eq!(lex_single("ÄÖÜ"), (LiteralTokenKind::Name, "ÄÖÜ"));
    assert_eq!(lex("a b"), vec![
        (LiteralTokenKind::Name, "a"),
        (LiteralTokenKind::Name, "b"),
    ]);
}

/// A name cannot start with a digit: `1a` is an INT followed by a NAME.
#[test]
fn digit_prefixed_name_splits() {
    assert_eq!(lex("1a"), vec![
        (LiteralTokenKind::Int, "1"),
        (LiteralTokenKind::Name, "a"),
    ]);
}

/// Non-ASCII whitespace separates names rather than joining them.
#[test]
fn non_ascii_whitespace_is_not_part_of_name() {
    assert_eq!(lex("a\u{00A0}b"), vec![
        (LiteralTokenKind::Name, "a"),
        (LiteralTokenKind::Name, "b"),
    ]);
}

// =============================================================================
// Strings
// =============================================================================

/// BLOCK_STRING is tried before STRING.
#[test]
fn block_string_is_one_token() {
    assert_eq!(
        lex_single("\"\"\"a\"\"\""),
        (LiteralTokenKind::BlockString, "\"\"\"a\"\"\""),
    );
    assert_eq!(
        lex_single("\"\"\"line 1\n\"quoted\"\nline 3\"\"\""),
        (
            LiteralTokenKind::BlockString,
            "\"\"\"line 1\n\"quoted\"\nline 3\"\"\"",
        ),
    );
}

#[test]
fn string_with_escapes() {
    assert_eq!(
        lex_single(r#""a\"b\\""#),
        (LiteralTokenKind::String, r#""a\"b\\""#),
    );
    assert_eq!(
        lex_single(r#""é""#),
        (LiteralTokenKind::String, r#""é""#),
    );
}

#[test]
fn empty_string_then_string() {
    assert_eq!(lex("\"\" \"x\""), vec![
        (LiteralTokenKind::String, "\"\""),
        (LiteralTokenKind::String, "\"x\""),
    ]);
}

// =============================================================================
// Whitespace and offsets
// =============================================================================

#[test]
fn offsets_skip_whitespace() {
    let tokens = StrLiteralTokenSource::tokenize("{a: 1}").expect("lexes");
    let offsets: Vec<(LiteralTokenKind, usize)> =
        tokens.iter().map(|t| (t.kind, t.offset)).collect();

    assert_eq!(offsets, vec![
        (LiteralTokenKind::CurlyBraceOpen, 0),
        (LiteralTokenKind::Name, 1),
        (LiteralTokenKind::Colon, 2),
        (LiteralTokenKind::Int, 4),
        (LiteralTokenKind::CurlyBraceClose, 5),
        (LiteralTokenKind::Eof, 6),
    ]);
}

/// Offsets are byte offsets, not char offsets.
#[test]
fn offsets_are_bytes() {
    let tokens = StrLiteralTokenSource::tokenize("é 1").expect("lexes");
    assert_eq!(tokens[1], LiteralToken::new(LiteralTokenKind::Int, "1", 3));
}

#[test]
fn whitespace_only_is_just_eof() {
    let tokens = StrLiteralTokenSource::tokenize(" \t\r\n").expect("lexes");
    assert_eq!(tokens, vec![LiteralToken::new(LiteralTokenKind::Eof, "", 4)]);
}

// =============================================================================
// Errors and iteration
// =============================================================================

#[test]
fn unmatched_character() {
    assert_eq!(
        StrLiteralTokenSource::tokenize("[1, @]"),
        Err(LiteralLexError::new(4, '@')),
    );
    assert_eq!(
        StrLiteralTokenSource::tokenize("-"),
        Err(LiteralLexError::new(0, '-')),
    );
}

#[test]
fn unterminated_string_fails_at_quote() {
    assert_eq!(
        StrLiteralTokenSource::tokenize("  \"abc"),
        Err(LiteralLexError::new(2, '"')),
    );
}

/// Eof is yielded exactly once and then the iterator is exhausted.
#[test]
fn iterator_stops_after_eof() {
    let mut source = StrLiteralTokenSource::new("x");

    assert!(matches!(source.next(), Some(Ok(t)) if t.kind == LiteralTokenKind::Name));
    assert!(matches!(source.next(), Some(Ok(t)) if t.kind == LiteralTokenKind::Eof));
    assert!(source.next().is_none());
    assert!(source.next().is_none());
}

/// No items follow a lex error.
#[test]
fn iterator_stops_after_error() {
    let mut source = StrLiteralTokenSource::new("1 ? 2");

    assert!(matches!(source.next(), Some(Ok(_))));
    assert_eq!(source.next(), Some(Err(LiteralLexError::new(2, '?'))));
    assert!(source.next().is_none());
}
