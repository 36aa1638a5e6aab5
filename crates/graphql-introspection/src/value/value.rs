use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;

/// A default value in native form, after coercion to its declared type.
///
/// `Int` is arbitrary-precision: GraphQL servers may report defaults for
/// custom scalars that overflow any fixed-width integer.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(BigInt),
    Float(f64),
    String(String),
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// The value as an `f64` if it is a `Float`, or an `Int` that `f64` can
    /// represent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => value
                .to_string()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            _ => None,
        }
    }

    /// The value as an `i64` if it is an `Int` within range.
    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            i64::try_from(value).ok()
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    /// The string content if this is a `String`. Enum values are not strings.
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(value) = self {
            Some(value.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Renders the value as a GraphQL literal.
///
/// Floats always carry a fractional part or exponent so they never read back
/// as an `Int`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(content) => write_string_literal(f, content),
            Self::Enum(name) => f.write_str(name),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(fields) => {
                f.write_str("{")?;
                for (idx, (name, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            },
        }
    }
}

/// Serializes to the natural JSON shape. Ints outside the `i64` range are
/// written as strings; enum values are written as their names.
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Int(value) => match i64::try_from(value) {
                Ok(value) => serializer.serialize_i64(value),
                Err(_) => serializer.serialize_str(&value.to_string()),
            },
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) | Self::Enum(value) => {
                serializer.serialize_str(value)
            },
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            },
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            },
        }
    }
}

/// Block strings carry quotes and line breaks verbatim, but a trailing
/// backslash would escape their closing delimiter. Such content never holds
/// a bare quote or line break, so the plain form reads back unchanged.
fn write_string_literal(
    f: &mut std::fmt::Formatter<'_>,
    content: &str,
) -> std::fmt::Result {
    if content.contains(['"', '\n', '\r']) && !content.ends_with('\\') {
        write!(f, "\"\"\"{content}\"\"\"")
    } else {
        write!(f, "\"{content}\"")
    }
}
