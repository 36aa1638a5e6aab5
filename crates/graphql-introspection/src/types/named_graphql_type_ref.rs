use crate::named_ref::NamedRef;
use crate::schema::TypeRegistry;
use crate::types::GraphQLType;

pub type NamedGraphQLTypeRef = NamedRef<TypeRegistry, GraphQLType>;
