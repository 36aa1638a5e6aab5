use crate::Value;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::value::ValueCoercionError;
use graphql_literal_parser::LiteralValue;
use indexmap::IndexMap;
use num_bigint::BigInt;

/// Converts parsed [`LiteralValue`]s into native [`Value`]s, guided by the
/// declared [`TypeAnnotation`] of the field or argument they default.
///
/// The conversion follows GraphQL input coercion where it changes the shape
/// of a value:
///
/// - `null` stays `null` whatever the declared type.
/// - A list type accepts a single item and wraps it: `1` for `[Int]` becomes
///   `[1]`.
/// - An `Int` literal for a `Float` becomes a float; for an `ID` it becomes a
///   string.
/// - Object literals for an input object coerce each declared field against
///   that field's own type.
///
/// Everything else converts structurally. A literal that doesn't fit its
/// declared type (a string for an `Int`, an undeclared input field) is kept
/// as-is rather than rejected.
pub struct DefaultValueCoercer<'a> {
    types: &'a IndexMap<String, GraphQLType>,
}

impl<'a> DefaultValueCoercer<'a> {
    pub fn new(types: &'a IndexMap<String, GraphQLType>) -> Self {
        Self { types }
    }

    pub fn coerce(
        &self,
        literal: &LiteralValue,
        annotation: &TypeAnnotation,
    ) -> Result<Value, ValueCoercionError> {
        match (annotation, literal) {
            (_, LiteralValue::Null) => Ok(Value::Null),

            (TypeAnnotation::List(list_annot), LiteralValue::List(items)) => {
                let inner = list_annot.inner_type_annotation();
                Ok(Value::List(
                    items.iter()
                        .map(|item| self.coerce(item, inner))
                        .collect::<Result<_, _>>()?,
                ))
            },

            (TypeAnnotation::List(list_annot), item) => Ok(Value::List(vec![
                self.coerce(item, list_annot.inner_type_annotation())?,
            ])),

            (TypeAnnotation::Named(named_annot), literal) =>
                self.coerce_named(literal, named_annot.graphql_type_name()),
        }
    }

    fn coerce_named(
        &self,
        literal: &LiteralValue,
        type_name: &str,
    ) -> Result<Value, ValueCoercionError> {
        match (self.types.get(type_name), literal) {
            (Some(GraphQLType::Float), LiteralValue::Int(raw)) =>
                parse_float(raw).map(Value::Float),

            (Some(GraphQLType::ID), LiteralValue::Int(raw)) =>
                Ok(Value::String(raw.clone())),

            (Some(GraphQLType::InputObject(input_type)), LiteralValue::Object(fields)) => {
                let mut coerced = IndexMap::with_capacity(fields.len());
                for (name, field_literal) in fields {
                    let value = match input_type.fields().get(name) {
                        Some(input_field) => self.coerce(
                            field_literal,
                            input_field.type_annotation(),
                        )?,
                        None => Self::convert(field_literal)?,
                    };
                    coerced.insert(name.clone(), value);
                }
                Ok(Value::Object(coerced))
            },

            (_, literal) => Self::convert(literal),
        }
    }

    /// Converts a literal without reference to any declared type.
    pub fn convert(literal: &LiteralValue) -> Result<Value, ValueCoercionError> {
        Ok(match literal {
            LiteralValue::Null => Value::Null,
            LiteralValue::Boolean(value) => Value::Boolean(*value),
            LiteralValue::Int(raw) => Value::Int(
                raw.parse::<BigInt>()
                    .map_err(|_| ValueCoercionError::InvalidInt(raw.clone()))?,
            ),
            LiteralValue::Float(raw) => Value::Float(parse_float(raw)?),
            LiteralValue::String(content) => Value::String(content.clone()),
            LiteralValue::Enum(name) => Value::Enum(name.clone()),
            LiteralValue::List(items) => Value::List(
                items.iter().map(Self::convert).collect::<Result<_, _>>()?,
            ),
            LiteralValue::Object(fields) => Value::Object(
                fields.iter()
                    .map(|(name, value)| Ok((name.clone(), Self::convert(value)?)))
                    .collect::<Result<_, ValueCoercionError>>()?,
            ),
        })
    }
}

/// Rejects literals like `1e400` that only fit an `f64` as infinity.
fn parse_float(raw: &str) -> Result<f64, ValueCoercionError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValueCoercionError::InvalidFloat(raw.to_string()))
}
