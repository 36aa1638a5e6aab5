mod graphql_operation_type;
mod schema_coordinate;
mod type_registry;
mod type_registry_build_error;
mod type_registry_builder;

pub use graphql_operation_type::GraphQLOperationType;
pub(crate) use schema_coordinate::SchemaCoordinate;
pub use type_registry::TypeRegistry;
pub use type_registry_build_error::TypeRegistryBuildError;
pub use type_registry_builder::TypeRegistryBuilder;

#[cfg(test)]
mod tests;
