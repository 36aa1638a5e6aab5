use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_introspection::Value;
use graphql_introspection::schema::TypeRegistry;
use graphql_introspection::types::DeprecationState;
use graphql_introspection::types::Directive;
use graphql_introspection::types::Field;
use graphql_introspection::types::GraphQLType;
use graphql_introspection::types::InputField;
use graphql_introspection::types::Parameter;
use graphql_introspection::types::TypeAnnotation;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Path to an introspection JSON file.",
        name="FILE",
    )]
    file: PathBuf,

    #[arg(
        help="Only print the type with this name.",
        name="TYPE_NAME",
    )]
    type_name: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let json = match tokio::fs::read_to_string(&self.file).await {
            Ok(json) => json,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {:#?}: {e}",
                output_utils::RED_X,
                self.file,
            )),
        };
        let registry = match TypeRegistry::from_introspection_json(&json) {
            Ok(registry) => registry,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to build a type registry from {:#?}: {e}",
                output_utils::RED_X,
                self.file,
            )),
        };

        match &self.type_name {
            Some(type_name) => match registry.lookup_type(type_name) {
                Some(type_) => CommandResult::stdout(format_args!("{}", render_type(type_))),
                None => CommandResult::stderr(format_args!(
                    "{} No type named `{type_name}` in {:#?}.",
                    output_utils::RED_X,
                    self.file,
                )),
            },
            None => CommandResult::stdout(format_args!("{}", render_registry(&registry))),
        }
    }
}

/// Renders everything but the built-in scalars, SDL-style.
fn render_registry(registry: &TypeRegistry) -> String {
    let mut root_types = vec![format!("  query: {}", registry.query_type().name())];
    if let Some(mutation_type) = registry.mutation_type() {
        root_types.push(format!("  mutation: {}", mutation_type.name()));
    }
    if let Some(subscription_type) = registry.subscription_type() {
        root_types.push(format!("  subscription: {}", subscription_type.name()));
    }

    let mut blocks = vec![format!("schema {{\n{}\n}}", root_types.join("\n"))];
    blocks.extend(
        registry.types()
            .values()
            .filter(|type_| !type_.kind().is_builtin())
            .map(render_type),
    );
    blocks.extend(registry.directives().values().map(render_directive));
    blocks.join("\n\n")
}

fn render_type(type_: &GraphQLType) -> String {
    let body = match type_ {
        GraphQLType::Bool
        | GraphQLType::Float
        | GraphQLType::ID
        | GraphQLType::Int
        | GraphQLType::String => format!("scalar {}", type_.name()),

        GraphQLType::Scalar(scalar_type) => match scalar_type.specified_by_url() {
            Some(url) => format!(
                "scalar {} @specifiedBy(url: {})",
                scalar_type.name(),
                quoted(url),
            ),
            None => format!("scalar {}", scalar_type.name()),
        },

        GraphQLType::Object(object_type) => format!(
            "type {}{} {}",
            object_type.name(),
            render_implements(object_type.interface_names()),
            render_fields(object_type.fields().values()),
        ),

        GraphQLType::Interface(iface_type) => format!(
            "interface {}{} {}",
            iface_type.name(),
            render_implements(iface_type.interface_names()),
            render_fields(iface_type.fields().values()),
        ),

        GraphQLType::Union(union_type) => format!(
            "union {} = {}",
            union_type.name(),
            union_type.member_type_names().join(" | "),
        ),

        GraphQLType::Enum(enum_type) => format!(
            "enum {} {}",
            enum_type.name(),
            render_block(enum_type.values().values().map(|value| format!(
                "{}{}",
                value.name(),
                render_deprecation(value.deprecation_state()),
            ))),
        ),

        GraphQLType::InputObject(input_type) => format!(
            "input {} {}",
            input_type.name(),
            render_block(input_type.fields().values().map(render_input_field)),
        ),
    };

    match type_.description() {
        Some(description) => format!("{}\n{body}", quoted(description)),
        None => body,
    }
}

fn render_directive(directive: &Directive) -> String {
    format!(
        "directive @{}{}{} on {}",
        directive.name(),
        render_parameters(directive.parameters().values()),
        if directive.is_repeatable() { " repeatable" } else { "" },
        directive.locations()
            .iter()
            .map(|location| location.as_str())
            .collect::<Vec<_>>()
            .join(" | "),
    )
}

fn render_implements(interface_names: Vec<&str>) -> String {
    if interface_names.is_empty() {
        String::new()
    } else {
        format!(" implements {}", interface_names.join(" & "))
    }
}

fn render_fields<'a>(fields: impl Iterator<Item = &'a Field>) -> String {
    render_block(fields.map(|field| format!(
        "{}{}: {}{}",
        field.name(),
        render_parameters(field.parameters().values()),
        field.type_annotation(),
        render_deprecation(field.deprecation_state()),
    )))
}

fn render_parameters<'a>(params: impl ExactSizeIterator<Item = &'a Parameter>) -> String {
    if params.len() == 0 {
        return String::new();
    }
    let params: Vec<String> = params
        .map(|param| render_input_value(
            param.name(),
            param.type_annotation(),
            param.default_value(),
            param.deprecation_state(),
        ))
        .collect();
    format!("({})", params.join(", "))
}

fn render_input_field(field: &InputField) -> String {
    render_input_value(
        field.name(),
        field.type_annotation(),
        field.default_value(),
        field.deprecation_state(),
    )
}

fn render_input_value(
    name: &str,
    type_annotation: &TypeAnnotation,
    default_value: Option<&Value>,
    deprecation: &DeprecationState,
) -> String {
    let default_value = default_value
        .map(|value| format!(" = {value}"))
        .unwrap_or_default();
    format!(
        "{name}: {type_annotation}{default_value}{}",
        render_deprecation(deprecation),
    )
}

fn render_deprecation(deprecation: &DeprecationState) -> String {
    match deprecation {
        DeprecationState::NotDeprecated => String::new(),
        DeprecationState::Deprecated(None) => " @deprecated".to_string(),
        DeprecationState::Deprecated(Some(reason)) =>
            format!(" @deprecated(reason: {})", quoted(reason)),
    }
}

fn render_block(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines.map(|line| format!("  {line}")).collect();
    if lines.is_empty() {
        "{}".to_string()
    } else {
        format!("{{\n{}\n}}", lines.join("\n"))
    }
}

fn quoted(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}
