use crate::introspection::IntrospectionSchema;

/// A complete introspection result.
///
/// Accepts both the full GraphQL response shape (`{"data": {"__schema": ...}}`)
/// and the bare `{"__schema": ...}` object that many tools write to disk.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum IntrospectionResponse {
    Response { data: IntrospectionData },
    Bare(IntrospectionData),
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

impl IntrospectionResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn schema(&self) -> &IntrospectionSchema {
        match self {
            Self::Response { data } | Self::Bare(data) => &data.schema,
        }
    }

    pub fn into_schema(self) -> IntrospectionSchema {
        match self {
            Self::Response { data } | Self::Bare(data) => data.schema,
        }
    }
}
