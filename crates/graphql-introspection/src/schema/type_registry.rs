use crate::schema::TypeRegistryBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// An immutable registry of every named type and directive reported by an
/// introspection result.
///
/// Built by [`TypeRegistryBuilder`]. Every type reference inside the registry
/// (field types, interfaces, union members, root operation types) resolves to
/// a type in the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRegistry {
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}

impl TypeRegistry {
    /// Helper function that just delegates to
    /// [`TypeRegistryBuilder::from_introspection_json()`].
    pub fn from_introspection_json(
        json: &str,
    ) -> Result<Self, crate::schema::TypeRegistryBuildError> {
        TypeRegistryBuilder::from_introspection_json(json)?.build()
    }

    /// All directives, in the order the server listed them.
    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directives
    }

    pub fn lookup_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    /// Look up a named type. Built-in scalars (`Boolean`, `Float`, `ID`,
    /// `Int`, `String`) are always present.
    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The mutation root type, if the schema has one.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref().and_then(|type_ref| self.root_type(type_ref))
    }

    /// The query root type.
    ///
    /// The builder rejects schemas whose query type is missing or is not an
    /// object type.
    pub fn query_type(&self) -> &ObjectType {
        self.root_type(&self.query_type)
            .expect("query type is validated when the registry is built")
    }

    /// The subscription root type, if the schema has one.
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type
            .as_ref()
            .and_then(|type_ref| self.root_type(type_ref))
    }

    /// All types: the built-in scalars first, then every type from the
    /// introspection result in the order the server listed them.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    fn root_type(&self, type_ref: &NamedGraphQLTypeRef) -> Option<&ObjectType> {
        type_ref.deref(self).ok().and_then(GraphQLType::as_object)
    }
}
