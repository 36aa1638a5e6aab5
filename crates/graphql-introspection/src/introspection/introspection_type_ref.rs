use crate::introspection::IntrospectionTypeKind;

/// A (possibly wrapped) type reference such as the `type` of a field.
///
/// `LIST` and `NON_NULL` refs carry the wrapped type in `of_type`; named refs
/// carry `name`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: IntrospectionTypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
