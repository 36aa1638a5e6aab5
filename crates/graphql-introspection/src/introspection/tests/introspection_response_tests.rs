use crate::introspection::IntrospectionResponse;
use crate::introspection::IntrospectionTypeKind;
use crate::types::DirectiveLocation;

const BARE_SCHEMA_JSON: &str = r#"{
    "__schema": {
        "queryType": { "name": "Query" },
        "mutationType": null,
        "types": [
            {
                "kind": "OBJECT",
                "name": "Query",
                "fields": [{
                    "name": "tags",
                    "args": [{
                        "name": "first",
                        "type": { "kind": "SCALAR", "name": "Int", "ofType": null },
                        "defaultValue": "10"
                    }],
                    "type": {
                        "kind": "NON_NULL",
                        "name": null,
                        "ofType": {
                            "kind": "LIST",
                            "name": null,
                            "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
                        }
                    }
                }],
                "inputFields": null,
                "interfaces": [],
                "enumValues": null,
                "possibleTypes": null
            },
            {
                "kind": "SCALAR",
                "name": "Url",
                "specifiedByUrl": "https://url.spec.whatwg.org/"
            }
        ],
        "directives": [{
            "name": "skip",
            "locations": ["FIELD", "INLINE_FRAGMENT"],
            "args": []
        }]
    }
}"#;

#[test]
fn bare_schema_object() {
    let response = IntrospectionResponse::from_json(BARE_SCHEMA_JSON)
        .expect("bare schema parses");
    assert!(matches!(response, IntrospectionResponse::Bare(_)));

    let schema = response.schema();
    assert_eq!(schema.query_type.as_ref().map(|t| t.name.as_str()), Some("Query"));
    assert!(schema.mutation_type.is_none());
    assert!(schema.subscription_type.is_none());
    assert_eq!(schema.types.len(), 2);
}

#[test]
fn full_response_object() {
    let json = format!("{{\"data\": {BARE_SCHEMA_JSON}}}");
    let response = IntrospectionResponse::from_json(&json)
        .expect("full response parses");

    assert!(matches!(response, IntrospectionResponse::Response { .. }));
    assert_eq!(
        response.into_schema(),
        IntrospectionResponse::from_json(BARE_SCHEMA_JSON)
            .expect("bare schema parses")
            .into_schema(),
    );
}

/// `null` and missing lists both read as empty.
#[test]
fn null_and_missing_lists_are_empty() {
    let schema = IntrospectionResponse::from_json(BARE_SCHEMA_JSON)
        .expect("bare schema parses")
        .into_schema();

    let query = &schema.types[0];
    assert!(query.input_fields.is_empty());
    assert!(query.enum_values.is_empty());
    assert!(query.possible_types.is_empty());

    let url = &schema.types[1];
    assert_eq!(url.kind, IntrospectionTypeKind::Scalar);
    assert!(url.fields.is_empty());
    assert!(url.interfaces.is_empty());
}

#[test]
fn nested_type_refs_and_default_values() {
    let schema = IntrospectionResponse::from_json(BARE_SCHEMA_JSON)
        .expect("bare schema parses")
        .into_schema();
    let field = &schema.types[0].fields[0];

    assert_eq!(field.type_ref.kind, IntrospectionTypeKind::NonNull);
    let list = field.type_ref.of_type.as_deref().expect("NON_NULL wraps a type");
    assert_eq!(list.kind, IntrospectionTypeKind::List);
    assert!(list.kind.is_wrapping());
    let named = list.of_type.as_deref().expect("LIST wraps a type");
    assert_eq!(named.name.as_deref(), Some("String"));
    assert!(!named.kind.is_wrapping());

    assert_eq!(field.args[0].default_value.as_deref(), Some("10"));
    assert!(!field.args[0].is_deprecated);
}

/// Both spellings of `specifiedByURL` are accepted.
#[test]
fn specified_by_url_alias() {
    let schema = IntrospectionResponse::from_json(BARE_SCHEMA_JSON)
        .expect("bare schema parses")
        .into_schema();
    assert_eq!(
        schema.types[1].specified_by_url.as_deref(),
        Some("https://url.spec.whatwg.org/"),
    );
}

#[test]
fn directive_locations() {
    let schema = IntrospectionResponse::from_json(BARE_SCHEMA_JSON)
        .expect("bare schema parses")
        .into_schema();
    let skip = &schema.directives[0];

    assert_eq!(skip.locations, vec![
        DirectiveLocation::Field,
        DirectiveLocation::InlineFragment,
    ]);
    assert!(!skip.is_repeatable);
    assert_eq!(DirectiveLocation::InlineFragment.to_string(), "INLINE_FRAGMENT");
}

#[test]
fn type_kind_display_matches_json() {
    assert_eq!(IntrospectionTypeKind::InputObject.to_string(), "INPUT_OBJECT");
    assert_eq!(IntrospectionTypeKind::NonNull.to_string(), "NON_NULL");
}
