use crate::Value;
use graphql_literal_parser::LiteralValue;
use graphql_literal_parser::parse_default_value;
use indexmap::IndexMap;
use num_bigint::BigInt;

#[test]
fn display_as_graphql_literal() {
    let value = Value::Object(IndexMap::from([
        ("name".to_string(), Value::String("Hello".to_string())),
        ("score".to_string(), Value::Float(1.0)),
        ("tags".to_string(), Value::List(vec![
            Value::Enum("A".to_string()),
            Value::Null,
            Value::Boolean(true),
        ])),
    ]));

    assert_eq!(
        value.to_string(),
        "{name: \"Hello\", score: 1.0, tags: [A, null, true]}",
    );
}

#[test]
fn display_string_with_quotes_as_block_string() {
    assert_eq!(
        Value::String("say \"hi\" now".to_string()).to_string(),
        "\"\"\"say \"hi\" now\"\"\"",
    );
}

/// String content is raw source, so rendered strings must lex back to the
/// same content even when an escaped backslash ends them.
#[test]
fn display_string_reparses_to_same_content() {
    let contents = [r#"a\"b\\"#, r#"\\"#, r#"say \"hi\""#, "line 1\nline 2"];
    for content in contents {
        let rendered = Value::String(content.to_string()).to_string();
        assert_eq!(
            parse_default_value(&rendered),
            Ok(LiteralValue::String(content.to_string())),
            "rendered as `{rendered}`",
        );
    }

    assert_eq!(
        Value::String(r#"a\"b\\"#.to_string()).to_string(),
        r#""a\"b\\""#,
    );
}

#[test]
fn accessors() {
    let int = Value::Int(BigInt::from(42));
    assert_eq!(int.as_i64(), Some(42));
    assert_eq!(int.as_f64(), Some(42.0));
    assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    assert_eq!(Value::Float(2.5).as_i64(), None);
    assert_eq!(Value::Boolean(false).as_bool(), Some(false));
    assert_eq!(Value::String("x".to_string()).as_str(), Some("x"));
    assert_eq!(Value::Enum("X".to_string()).as_str(), None);
    assert!(Value::Null.is_null());

    let huge: BigInt = "123456789012345678901234567890".parse().expect("valid int");
    assert_eq!(Value::Int(huge).as_i64(), None);
}

/// Ints past the finite `f64` range have no float form.
#[test]
fn as_f64_rejects_ints_beyond_float_range() {
    let beyond: BigInt = format!("1{}", "0".repeat(400)).parse().expect("valid int");
    assert_eq!(Value::Int(beyond).as_f64(), None);

    let large: BigInt = format!("1{}", "0".repeat(300)).parse().expect("valid int");
    assert_eq!(Value::Int(large).as_f64(), Some(1e300));
}

#[test]
fn serializes_to_json() {
    let value = Value::Object(IndexMap::from([
        ("id".to_string(), Value::Int(BigInt::from(7))),
        ("role".to_string(), Value::Enum("ADMIN".to_string())),
        ("ratio".to_string(), Value::Float(0.5)),
        ("nothing".to_string(), Value::Null),
    ]));

    assert_eq!(
        serde_json::to_string(&value).expect("serializes"),
        r#"{"id":7,"role":"ADMIN","ratio":0.5,"nothing":null}"#,
    );
}

#[test]
fn big_int_serializes_as_string() {
    let huge: BigInt = "123456789012345678901234567890".parse().expect("valid int");
    assert_eq!(
        serde_json::to_string(&Value::Int(huge)).expect("serializes"),
        r#""123456789012345678901234567890""#,
    );
}
