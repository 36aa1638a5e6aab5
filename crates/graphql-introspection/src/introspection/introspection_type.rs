use crate::introspection::IntrospectionEnumValue;
use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionTypeKind;
use crate::introspection::IntrospectionTypeRef;

/// A named type definition (`__Type`) from the schema's `types` list.
///
/// Which of the list fields are meaningful depends on `kind`: `fields` and
/// `interfaces` for objects and interfaces, `possible_types` for interfaces
/// and unions, `enum_values` for enums, `input_fields` for input objects.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: IntrospectionTypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<IntrospectionField>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input_fields: Vec<IntrospectionInputValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interfaces: Vec<IntrospectionTypeRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub possible_types: Vec<IntrospectionTypeRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enum_values: Vec<IntrospectionEnumValue>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
    #[serde(default, rename = "specifiedByURL", alias = "specifiedByUrl")]
    pub specified_by_url: Option<String>,
}

/// Servers send `null` (not `[]`) for lists that don't apply to a kind.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let list: Option<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}
