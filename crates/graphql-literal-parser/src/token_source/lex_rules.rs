//! The ordered rule table driving [`StrLiteralTokenSource`].
//!
//! Rules are tried in declaration order at the current offset and the first
//! rule that matches wins. The order is load-bearing:
//!
//! - `FLOAT_EXP` and `FLOAT` come before `INT`, otherwise `1e10` would lex as
//!   `INT(1)` followed by `NAME(e10)`.
//! - `BLOCK_STRING` comes before `STRING`, otherwise `"""a"""` would lex as an
//!   empty `STRING` followed by garbage.
//! - The keywords come before `NAME` and only match at a word boundary, so
//!   `true` is a keyword while `trueish` is a name.
//!
//! [`StrLiteralTokenSource`]: crate::token_source::StrLiteralTokenSource

use crate::token::LiteralTokenKind;

/// What the lexer does with the text matched by a [`LexRule`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LexRuleAction {
    /// Emit a token of the given kind.
    Emit(LiteralTokenKind),
    /// Drop the matched text (whitespace).
    Skip,
}

/// A single lexer rule: a matcher that reports how many bytes at the start of
/// the remaining input it accepts.
pub(crate) struct LexRule {
    pub(crate) name: &'static str,
    pub(crate) action: LexRuleAction,
    /// Returns the byte length of the match at the start of `rest`, or `None`.
    /// A returned length is always non-zero and lands on a char boundary.
    pub(crate) matcher: fn(rest: &str) -> Option<usize>,
}

impl std::fmt::Debug for LexRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexRule")
            .field("name", &self.name)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

pub(crate) const LEX_RULES: &[LexRule] = &[
    LexRule {
        name: "BRACKET_OPEN",
        action: LexRuleAction::Emit(LiteralTokenKind::SquareBracketOpen),
        matcher: match_byte::<b'['>,
    },
    LexRule {
        name: "BRACKET_CLOSE",
        action: LexRuleAction::Emit(LiteralTokenKind::SquareBracketClose),
        matcher: match_byte::<b']'>,
    },
    LexRule {
        name: "BRACE_OPEN",
        action: LexRuleAction::Emit(LiteralTokenKind::CurlyBraceOpen),
        matcher: match_byte::<b'{'>,
    },
    LexRule {
        name: "BRACE_CLOSE",
        action: LexRuleAction::Emit(LiteralTokenKind::CurlyBraceClose),
        matcher: match_byte::<b'}'>,
    },
    LexRule {
        name: "COLON",
        action: LexRuleAction::Emit(LiteralTokenKind::Colon),
        matcher: match_byte::<b':'>,
    },
    LexRule {
        name: "COMMA",
        action: LexRuleAction::Emit(LiteralTokenKind::Comma),
        matcher: match_byte::<b','>,
    },
    LexRule {
        name: "FLOAT_EXP",
        action: LexRuleAction::Emit(LiteralTokenKind::Float),
        matcher: match_float_exp,
    },
    LexRule {
        name: "FLOAT",
        action: LexRuleAction::Emit(LiteralTokenKind::Float),
        matcher: match_float,
    },
    LexRule {
        name: "INT",
        action: LexRuleAction::Emit(LiteralTokenKind::Int),
        matcher: match_int,
    },
    LexRule {
        name: "TRUE",
        action: LexRuleAction::Emit(LiteralTokenKind::True),
        matcher: match_true,
    },
    LexRule {
        name: "FALSE",
        action: LexRuleAction::Emit(LiteralTokenKind::False),
        matcher: match_false,
    },
    LexRule {
        name: "NULL",
        action: LexRuleAction::Emit(LiteralTokenKind::Null),
        matcher: match_null,
    },
    LexRule {
        name: "BLOCK_STRING",
        action: LexRuleAction::Emit(LiteralTokenKind::BlockString),
        matcher: match_block_string,
    },
    LexRule {
        name: "STRING",
        action: LexRuleAction::Emit(LiteralTokenKind::String),
        matcher: match_string,
    },
    LexRule {
        name: "NAME",
        action: LexRuleAction::Emit(LiteralTokenKind::Name),
        matcher: match_name,
    },
    LexRule {
        name: "WHITESPACE",
        action: LexRuleAction::Skip,
        matcher: match_whitespace,
    },
];

// =============================================================================
// Matchers
// =============================================================================

fn match_byte<const BYTE: u8>(rest: &str) -> Option<usize> {
    (rest.as_bytes().first() == Some(&BYTE)).then_some(1)
}

/// `-?(0|[1-9][0-9]*)[eE][+-]?[0-9]+`
fn match_float_exp(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mantissa_len = scan_int_part(bytes)?;
    let exponent_len = scan_exponent(&bytes[mantissa_len..])?;
    Some(mantissa_len + exponent_len)
}

/// `-?(0|[1-9][0-9]*)\.[0-9]+([eE][+-]?[0-9]+)?`
fn match_float(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let int_len = scan_int_part(bytes)?;
    if bytes.get(int_len) != Some(&b'.') {
        return None;
    }
    let fraction_len = count_digits(&bytes[int_len + 1..]);
    if fraction_len == 0 {
        return None;
    }
    let len = int_len + 1 + fraction_len;
    Some(len + scan_exponent(&bytes[len..]).unwrap_or(0))
}

/// `-?(0|[1-9][0-9]*)`
fn match_int(rest: &str) -> Option<usize> {
    scan_int_part(rest.as_bytes())
}

fn match_true(rest: &str) -> Option<usize> {
    match_keyword(rest, "true")
}

fn match_false(rest: &str) -> Option<usize> {
    match_keyword(rest, "false")
}

fn match_null(rest: &str) -> Option<usize> {
    match_keyword(rest, "null")
}

/// `"""` ... `"""` where `\"` is an escaped quote and the literal ends at the
/// first unescaped `"""`.
fn match_block_string(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !bytes.starts_with(b"\"\"\"") {
        return None;
    }

    let mut pos = 3;
    loop {
        pos += memchr::memchr2(b'"', b'\\', &bytes[pos..])?;
        if bytes[pos] == b'\\' {
            pos += if bytes.get(pos + 1) == Some(&b'"') { 2 } else { 1 };
        } else if bytes[pos..].starts_with(b"\"\"\"") {
            return Some(pos + 3);
        } else {
            pos += 1;
        }
    }
}

/// `"` ... `"` where a backslash escapes whichever character follows it.
fn match_string(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }

    let mut pos = 1;
    loop {
        pos += memchr::memchr2(b'"', b'\\', &bytes[pos..])?;
        if bytes[pos] == b'"' {
            return Some(pos + 1);
        }
        let escaped = rest[pos + 1..].chars().next()?;
        pos += 1 + escaped.len_utf8();
    }
}

fn match_name(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if !is_name_start(first) {
        return None;
    }
    Some(
        chars
            .find(|(_, ch)| !is_name_continue(*ch))
            .map_or(rest.len(), |(idx, _)| idx),
    )
}

fn match_whitespace(rest: &str) -> Option<usize> {
    let len = rest
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map_or(rest.len(), |(idx, _)| idx);
    (len > 0).then_some(len)
}

// =============================================================================
// Helpers
// =============================================================================

fn match_keyword(rest: &str, keyword: &str) -> Option<usize> {
    let after = rest.strip_prefix(keyword)?;
    match after.chars().next() {
        Some(ch) if is_name_continue(ch) => None,
        _ => Some(keyword.len()),
    }
}

/// Scans `-?(0|[1-9][0-9]*)`. A leading `0` is never followed by more digits
/// in the match; `01` scans as just `0`.
fn scan_int_part(bytes: &[u8]) -> Option<usize> {
    let sign_len = usize::from(bytes.first() == Some(&b'-'));
    match bytes.get(sign_len) {
        Some(b'0') => Some(sign_len + 1),
        Some(b'1'..=b'9') => {
            Some(sign_len + 1 + count_digits(&bytes[sign_len + 1..]))
        },
        _ => None,
    }
}

/// Scans `[eE][+-]?[0-9]+`.
fn scan_exponent(bytes: &[u8]) -> Option<usize> {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }
    let sign_len = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[1 + sign_len..]);
    (digits > 0).then_some(1 + sign_len + digits)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Names start with `_`, an ASCII letter, or any non-ASCII character that is
/// not whitespace.
pub(crate) fn is_name_start(ch: char) -> bool {
    ch == '_'
        || ch.is_ascii_alphabetic()
        || (!ch.is_ascii() && !ch.is_whitespace())
}

pub(crate) fn is_name_continue(ch: char) -> bool {
    is_name_start(ch) || ch.is_ascii_digit()
}
