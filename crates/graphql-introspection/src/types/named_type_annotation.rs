use crate::named_ref::DerefByNameError;
use crate::schema::TypeRegistry;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl NamedTypeAnnotation {
    /// Resolves the annotated type in `registry`.
    ///
    /// Annotations produced by a [`TypeRegistry`] always resolve against that
    /// registry.
    pub fn graphql_type<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Result<&'registry GraphQLType, DerefByNameError> {
        self.type_ref.deref(registry)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
