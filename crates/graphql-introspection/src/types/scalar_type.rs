/// A custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
///
/// The five built-in scalars are not `ScalarType`s; they are represented by
/// their own [`GraphQLType`](crate::types::GraphQLType) variants.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) specified_by_url: Option<String>,
}

impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The URL given by the scalar's `@specifiedBy` directive, if any.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}
