//! Serde model of a GraphQL introspection result.
//!
//! These types mirror the JSON produced by the standard `__schema`
//! introspection query. Optional arrays that a server omits deserialize as
//! empty.

mod introspection_directive;
mod introspection_enum_value;
mod introspection_field;
mod introspection_input_value;
mod introspection_response;
mod introspection_schema;
mod introspection_type;
mod introspection_type_kind;
mod introspection_type_ref;

pub use introspection_directive::IntrospectionDirective;
pub use introspection_enum_value::IntrospectionEnumValue;
pub use introspection_field::IntrospectionField;
pub use introspection_input_value::IntrospectionInputValue;
pub use introspection_response::IntrospectionData;
pub use introspection_response::IntrospectionResponse;
pub use introspection_schema::IntrospectionNamedTypeRef;
pub use introspection_schema::IntrospectionSchema;
pub use introspection_type::IntrospectionType;
pub use introspection_type_kind::IntrospectionTypeKind;
pub use introspection_type_ref::IntrospectionTypeRef;

#[cfg(test)]
mod tests;
