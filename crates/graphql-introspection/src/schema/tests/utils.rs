use crate::schema::TypeRegistry;
use crate::schema::TypeRegistryBuildError;
use crate::schema::TypeRegistryBuilder;

pub(super) const SOCIAL_NETWORK_SCHEMA_JSON: &str =
    include_str!("fixtures/social_network_schema.json");

pub(super) fn social_network_registry() -> TypeRegistry {
    TypeRegistryBuilder::from_introspection_json(SOCIAL_NETWORK_SCHEMA_JSON)
        .expect("fixture is valid JSON")
        .build()
        .expect("fixture builds")
}

/// Wraps `types` (and `directives`) in a bare `__schema` object whose query
/// type is `Query`.
pub(super) fn schema_json(
    types: serde_json::Value,
    directives: serde_json::Value,
) -> String {
    serde_json::json!({
        "__schema": {
            "queryType": { "name": "Query" },
            "types": types,
            "directives": directives,
        }
    }).to_string()
}

pub(super) fn build(json: &str) -> Result<TypeRegistry, TypeRegistryBuildError> {
    TypeRegistryBuilder::from_introspection_json(json)?.build()
}

pub(super) fn build_err(json: &str) -> TypeRegistryBuildError {
    match build(json) {
        Ok(registry) => panic!("Expected build to fail, got: {registry:#?}"),
        Err(err) => err,
    }
}

/// `type Query { <field_name>(<arg_name>: <arg_type> = <default>): String }`
pub(super) fn query_with_arg(
    arg_type: serde_json::Value,
    default_value: &str,
) -> serde_json::Value {
    serde_json::json!({
        "kind": "OBJECT",
        "name": "Query",
        "fields": [{
            "name": "field",
            "args": [{
                "name": "arg",
                "type": arg_type,
                "defaultValue": default_value,
            }],
            "type": { "kind": "SCALAR", "name": "String" },
        }],
    })
}

pub(super) fn scalar_ref(name: &str) -> serde_json::Value {
    serde_json::json!({ "kind": "SCALAR", "name": name, "ofType": null })
}
