/// Points at one element of the schema being built, for error messages.
///
/// Renders the way the element would be written in SDL-style tooling:
///
/// | variant             | rendered          |
/// |---------------------|-------------------|
/// | `Type`              | `User`            |
/// | `Field`             | `Query.user`      |
/// | `FieldArgument`     | `Query.user(id:)` |
/// | `InputField`        | `UserFilter.limit`|
/// | `DirectiveArgument` | `@cached(ttl:)`   |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SchemaCoordinate<'schema> {
    Type {
        type_name: &'schema str,
    },
    Field {
        type_name: &'schema str,
        field_name: &'schema str,
    },
    FieldArgument {
        type_name: &'schema str,
        field_name: &'schema str,
        argument_name: &'schema str,
    },
    InputField {
        type_name: &'schema str,
        field_name: &'schema str,
    },
    DirectiveArgument {
        directive_name: &'schema str,
        argument_name: &'schema str,
    },
}

impl std::fmt::Display for SchemaCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type { type_name } => write!(f, "{type_name}"),
            Self::Field { type_name, field_name }
            | Self::InputField { type_name, field_name } =>
                write!(f, "{type_name}.{field_name}"),
            Self::FieldArgument { type_name, field_name, argument_name } =>
                write!(f, "{type_name}.{field_name}({argument_name}:)"),
            Self::DirectiveArgument { directive_name, argument_name } =>
                write!(f, "@{directive_name}({argument_name}:)"),
        }
    }
}
