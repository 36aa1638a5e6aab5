use crate::introspection::IntrospectionDirective;
use crate::introspection::IntrospectionType;

/// The `__schema` object of an introspection result.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub query_type: Option<IntrospectionNamedTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<IntrospectionNamedTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<IntrospectionNamedTypeRef>,
    #[serde(default)]
    pub types: Vec<IntrospectionType>,
    #[serde(default)]
    pub directives: Vec<IntrospectionDirective>,
}

/// A root operation type reference: `{ "name": "Query" }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntrospectionNamedTypeRef {
    pub name: String,
}
