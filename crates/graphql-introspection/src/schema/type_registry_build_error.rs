use crate::introspection::IntrospectionTypeKind;
use crate::schema::GraphQLOperationType;

/// Errors that can occur while building a
/// [`TypeRegistry`](crate::schema::TypeRegistry) from introspection data.
///
/// `referenced_by` fields name the place the problem was found, written the
/// way it would appear in SDL: `Query.user(id:)` for an argument,
/// `UserFilter.limit` for an input field, `@cached(ttl:)` for a directive
/// argument.
#[derive(Debug, thiserror::Error)]
pub enum TypeRegistryBuildError {
    #[error("invalid introspection JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("a {kind} type in the introspection result has no name")]
    MissingTypeName {
        kind: IntrospectionTypeKind,
    },

    #[error("multiple types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("multiple directives named `@{directive_name}` were defined")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    /// A `LIST` or `NON_NULL` type reference without `ofType`.
    #[error("{kind} type reference on `{referenced_by}` has no `ofType`")]
    MissingWrappedType {
        kind: IntrospectionTypeKind,
        referenced_by: String,
    },

    /// A named (non-wrapping) type reference without `name`.
    #[error("{kind} type reference on `{referenced_by}` has no name")]
    UnnamedTypeReference {
        kind: IntrospectionTypeKind,
        referenced_by: String,
    },

    /// `NON_NULL` directly wrapping another `NON_NULL`.
    #[error("`{referenced_by}` has a non-null type wrapped in another non-null")]
    NestedNonNull {
        referenced_by: String,
    },

    #[error("`{referenced_by}` references undefined type `{type_name}`")]
    UnknownTypeReference {
        type_name: String,
        referenced_by: String,
    },

    #[error(
        "cannot parse default value `{default_value}` of `{referenced_by}`: \
        {reason}"
    )]
    InvalidDefaultValue {
        default_value: String,
        referenced_by: String,
        reason: String,
    },

    #[error("the schema does not define a query operation type")]
    NoQueryOperationTypeDefined,

    #[error("the {operation} operation type `{type_name}` is not an object type")]
    InvalidOperationType {
        operation: GraphQLOperationType,
        type_name: String,
    },
}
