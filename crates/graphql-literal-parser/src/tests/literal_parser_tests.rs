//! Tests for successful literal value parsing.
//!
//! Each test parses a complete literal and compares the resulting
//! [`LiteralValue`] tree against the expected one.

use crate::LiteralParser;
use crate::LiteralValue;
use crate::tests::utils::MockTokenSource;
use crate::tests::utils::enum_value;
use crate::tests::utils::float;
use crate::tests::utils::int;
use crate::tests::utils::mock_token;
use crate::tests::utils::parse_ok;
use crate::tests::utils::string;
use crate::token::LiteralTokenKind;
use indexmap::IndexMap;

// =============================================================================
// Scalar Values
// =============================================================================

/// Verifies that integers keep their exact source text, including values far
/// outside any fixed-width integer range.
#[test]
fn int_values_keep_raw_text() {
    assert_eq!(parse_ok("0"), int("0"));
    assert_eq!(parse_ok("42"), int("42"));
    assert_eq!(parse_ok("-7"), int("-7"));
    assert_eq!(parse_ok("-0"), int("-0"));
    assert_eq!(
        parse_ok("123456789012345678901234567890"),
        int("123456789012345678901234567890"),
    );
}

/// Verifies the float forms: fractional part, exponent only, and both.
#[test]
fn float_values_keep_raw_text() {
    assert_eq!(parse_ok("1.0"), float("1.0"));
    assert_eq!(parse_ok("1e50"), float("1e50"));
    assert_eq!(parse_ok("6.0221413e23"), float("6.0221413e23"));
    assert_eq!(parse_ok("-1.5E-3"), float("-1.5E-3"));
    assert_eq!(parse_ok("0e+1"), float("0e+1"));
}

#[test]
fn boolean_values() {
    assert_eq!(parse_ok("true"), LiteralValue::Boolean(true));
    assert_eq!(parse_ok("false"), LiteralValue::Boolean(false));
}

#[test]
fn null_value() {
    assert_eq!(parse_ok("null"), LiteralValue::Null);
}

/// Keywords are case-sensitive: anything that is not exactly `true`, `false`
/// or `null` is an enum value.
#[test]
fn keyword_lookalikes_are_enum_values() {
    assert_eq!(parse_ok("True"), enum_value("True"));
    assert_eq!(parse_ok("FALSE"), enum_value("FALSE"));
    assert_eq!(parse_ok("Null"), enum_value("Null"));
    assert_eq!(parse_ok("NULL"), enum_value("NULL"));
    assert_eq!(parse_ok("trueish"), enum_value("trueish"));
    assert_eq!(parse_ok("null_value"), enum_value("null_value"));
}

#[test]
fn enum_values() {
    assert_eq!(parse_ok("RED"), enum_value("RED"));
    assert_eq!(parse_ok("_internal2"), enum_value("_internal2"));
    assert_eq!(parse_ok("café"), enum_value("café"));
}

// =============================================================================
// String Values
// =============================================================================

#[test]
fn string_value_strips_one_quote_each_side() {
    assert_eq!(parse_ok("\"Hello world\""), string("Hello world"));
    assert_eq!(parse_ok("\"\""), string(""));
}

/// Escape sequences are kept exactly as written in the source.
#[test]
fn string_value_keeps_escapes_verbatim() {
    assert_eq!(parse_ok(r#""a\"b""#), string(r#"a\"b"#));
    assert_eq!(parse_ok(r#""line\nbreak""#), string(r"line\nbreak"));
}

#[test]
fn block_string_strips_three_quotes_each_side() {
    assert_eq!(
        parse_ok("\"\"\"multi\nline\"\"\""),
        string("multi\nline"),
    );
    assert_eq!(parse_ok("\"\"\"\"\"\""), string(""));
}

/// An escaped triple quote does not close a block string.
#[test]
fn block_string_with_escaped_triple_quote() {
    assert_eq!(
        parse_ok(r#""""a\"""b""""#),
        string(r#"a\"""b"#),
    );
}

// =============================================================================
// List Values
// =============================================================================

/// Commas in lists are optional and may repeat or trail.
#[test]
fn list_comma_variants_are_equivalent() {
    let expected = LiteralValue::List(vec![int("1"), int("2"), int("3")]);
    assert_eq!(parse_ok("[1, 2, 3]"), expected);
    assert_eq!(parse_ok("[1 2 3]"), expected);
    assert_eq!(parse_ok("[1,,2,,,3,]"), expected);
    assert_eq!(parse_ok("[,1,2,3]"), expected);
}

#[test]
fn empty_list() {
    assert_eq!(parse_ok("[]"), LiteralValue::List(vec![]));
    assert_eq!(parse_ok("[ , ]"), LiteralValue::List(vec![]));
}

#[test]
fn nested_mixed_list() {
    assert_eq!(
        parse_ok("[[1], [\"a\", [RED]], null]"),
        LiteralValue::List(vec![
            LiteralValue::List(vec![int("1")]),
            LiteralValue::List(vec![
                string("a"),
                LiteralValue::List(vec![enum_value("RED")]),
            ]),
            LiteralValue::Null,
        ]),
    );
}

// =============================================================================
// Object Values
// =============================================================================

#[test]
fn empty_object() {
    assert_eq!(parse_ok("{}"), LiteralValue::Object(IndexMap::new()));
}

/// Field order in the result follows the source order.
#[test]
fn object_keeps_insertion_order() {
    let value = parse_ok("{name: \"Hello world\", score: 1.0}");
    let fields = value.as_object().expect("object value");

    let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "score"]);
    assert_eq!(fields["name"], string("Hello world"));
    assert_eq!(fields["score"], float("1.0"));
}

/// A repeated key overwrites the earlier value.
#[test]
fn object_duplicate_key_last_write_wins() {
    let value = parse_ok("{a: 1, a: 2}");
    let fields = value.as_object().expect("object value");

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["a"], int("2"));
}

/// The overwritten key stays at the position of its first occurrence.
#[test]
fn object_duplicate_key_keeps_first_position() {
    let value = parse_ok("{a: 1, b: 2, a: 3}");
    let fields = value.as_object().expect("object value");

    let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(fields["a"], int("3"));
}

#[test]
fn object_commas_are_optional() {
    let expected = parse_ok("{a: 1, b: 2}");
    assert_eq!(parse_ok("{a: 1 b: 2}"), expected);
    assert_eq!(parse_ok("{a: 1, b: 2,}"), expected);
    assert_eq!(parse_ok("{a:1,b:2}"), expected);
}

#[test]
fn nested_object_and_list() {
    let value = parse_ok("{filter: {tags: [A, B], limit: 10}, order: DESC}");
    let fields = value.as_object().expect("object value");

    let filter = fields["filter"].as_object().expect("nested object");
    assert_eq!(
        filter["tags"],
        LiteralValue::List(vec![enum_value("A"), enum_value("B")]),
    );
    assert_eq!(filter["limit"], int("10"));
    assert_eq!(fields["order"], enum_value("DESC"));
}

// =============================================================================
// Whitespace, Nesting, and Determinism
// =============================================================================

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_ok("\t\n  42 \r\n"), int("42"));
    assert_eq!(parse_ok("\u{00A0}[ 1 ]\u{2003}"), LiteralValue::List(vec![
        int("1"),
    ]));
}

/// Exactly `MAX_RECURSION_DEPTH` nested lists are accepted.
#[test]
fn nesting_up_to_max_depth() {
    let depth = LiteralParser::<'static, MockTokenSource>::MAX_RECURSION_DEPTH;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let mut value = &parse_ok(&source);
    for _ in 1..depth {
        let items = value.as_list().expect("list value");
        assert_eq!(items.len(), 1);
        value = &items[0];
    }
    assert_eq!(value, &LiteralValue::List(vec![]));
}

/// A scalar inside the innermost container does not add a nesting level.
#[test]
fn scalar_leaf_at_max_depth() {
    let depth = LiteralParser::<'static, MockTokenSource>::MAX_RECURSION_DEPTH;

    let lists = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = &parse_ok(&lists);
    for _ in 0..depth {
        let items = value.as_list().expect("list value");
        assert_eq!(items.len(), 1);
        value = &items[0];
    }
    assert_eq!(value, &int("1"));

    let objects = format!("{}1{}", "{a: ".repeat(depth), "}".repeat(depth));
    let mut value = &parse_ok(&objects);
    for _ in 0..depth {
        value = &value.as_object().expect("object value")["a"];
    }
    assert_eq!(value, &int("1"));
}

/// Parsing the same input twice yields equal trees.
#[test]
fn parsing_is_deterministic() {
    let source = "{a: [1, 2.5, \"x\", \"\"\"y\"\"\"], b: {c: null, d: E}}";
    assert_eq!(parse_ok(source), parse_ok(source));
}

// =============================================================================
// Custom Token Sources
// =============================================================================

/// The parser accepts any token source, not just the `&str` lexer.
#[test]
fn parses_from_mock_token_source() {
    let tokens = vec![
        mock_token(LiteralTokenKind::CurlyBraceOpen, "{", 0),
        mock_token(LiteralTokenKind::Name, "ids", 1),
        mock_token(LiteralTokenKind::Colon, ":", 4),
        mock_token(LiteralTokenKind::SquareBracketOpen, "[", 6),
        mock_token(LiteralTokenKind::Int, "7", 7),
        mock_token(LiteralTokenKind::SquareBracketClose, "]", 8),
        mock_token(LiteralTokenKind::CurlyBraceClose, "}", 9),
        mock_token(LiteralTokenKind::Eof, "", 10),
    ];
    let value = LiteralParser::from_token_source(MockTokenSource::new(tokens))
        .parse_value_document()
        .expect("mock tokens parse");

    let fields = value.as_object().expect("object value");
    assert_eq!(fields["ids"], LiteralValue::List(vec![int("7")]));
}

/// A token source that ends without an Eof token still parses.
#[test]
fn mock_token_source_without_eof() {
    let tokens = vec![mock_token(LiteralTokenKind::True, "true", 0)];
    let value = LiteralParser::from_token_source(MockTokenSource::new(tokens))
        .parse_value_document()
        .expect("mock tokens parse");

    assert_eq!(value, LiteralValue::Boolean(true));
}
