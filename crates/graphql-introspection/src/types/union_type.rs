use crate::schema::TypeRegistry;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}

impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The names of this union's member types, in the order the server listed
    /// them in `possibleTypes`.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|type_ref| type_ref.name()).collect()
    }

    /// This union's member types. Members that don't resolve in `registry`
    /// are skipped.
    pub fn member_types<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry GraphQLType> {
        self.members
            .iter()
            .filter_map(|type_ref| type_ref.deref(registry).ok())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
