//! An in-memory GraphQL type registry built from the JSON result of a
//! `__schema` introspection query.
//!
//! ```
//! use graphql_introspection::schema::TypeRegistryBuilder;
//!
//! let registry = TypeRegistryBuilder::from_introspection_json(r#"{
//!     "__schema": {
//!         "queryType": { "name": "Query" },
//!         "types": [{
//!             "kind": "OBJECT",
//!             "name": "Query",
//!             "fields": [{
//!                 "name": "greeting",
//!                 "args": [],
//!                 "type": { "kind": "SCALAR", "name": "String" }
//!             }]
//!         }]
//!     }
//! }"#).unwrap().build().unwrap();
//!
//! assert_eq!(registry.query_type().name(), "Query");
//! ```

pub mod introspection;
mod named_ref;
pub mod schema;
pub mod types;
pub mod value;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;
