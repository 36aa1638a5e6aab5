/// A literal scalar whose text cannot be converted to its native form.
///
/// The literal parser only produces lexically valid numbers, so these surface
/// for floats outside the finite `f64` range or when a caller coerces
/// hand-built [`LiteralValue`](graphql_literal_parser::LiteralValue)s.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValueCoercionError {
    #[error("`{0}` is not a valid integer")]
    InvalidInt(String),

    #[error("`{0}` is not a valid float")]
    InvalidFloat(String),
}
