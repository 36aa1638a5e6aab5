//! Native default values and the coercion of parsed literals into them.

mod default_value_coercer;
mod value;
mod value_coercion_error;

pub use default_value_coercer::DefaultValueCoercer;
pub use value::Value;
pub use value_coercion_error::ValueCoercionError;

#[cfg(test)]
mod tests;
