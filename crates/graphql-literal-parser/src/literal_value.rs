use indexmap::IndexMap;

/// A parsed GraphQL literal value.
///
/// Scalars keep their raw source text: `Int` is never narrowed to a
/// fixed-width integer (callers may need big-integer handling) and `Float` is
/// never rounded through `f64`. `String` holds the content between the quote
/// delimiters with escape sequences left exactly as written.
///
/// `Object` keeps keys in insertion order. When a key repeats, the later value
/// replaces the earlier one in place.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum LiteralValue {
    Int(String),
    Float(String),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<LiteralValue>),
    Object(IndexMap<String, LiteralValue>),
}

impl LiteralValue {
    pub fn as_list(&self) -> Option<&[LiteralValue]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, LiteralValue>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    /// The string content if this is a `String` literal.
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

    /// Name of the literal kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Boolean(_) => "Boolean",
            Self::Null => "Null",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
        }
    }
}

/// Renders the value back as GraphQL literal syntax.
///
/// Strings whose content holds a quote or a line break are rendered as block
/// strings unless the content ends in a backslash. Either way the output lexes
/// back to the same content.
impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(raw) | Self::Float(raw) => f.write_str(raw),
            Self::String(content) => write_string_literal(f, content),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
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
