use crate::Value;
use crate::introspection::IntrospectionDirective;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionNamedTypeRef;
use crate::introspection::IntrospectionResponse;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;
use crate::introspection::IntrospectionTypeKind;
use crate::introspection::IntrospectionTypeRef;
use crate::named_ref::DerefByName;
use crate::schema::GraphQLOperationType;
use crate::schema::SchemaCoordinate;
use crate::schema::TypeRegistry;
use crate::schema::TypeRegistryBuildError;
use crate::types::DeprecationState;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::value::DefaultValueCoercer;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, TypeRegistryBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Builds a [`TypeRegistry`] from the result of a GraphQL introspection
/// query.
///
/// # Example
///
/// ```
/// use graphql_introspection::schema::TypeRegistryBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = TypeRegistryBuilder::from_introspection_json(r#"{
///     "__schema": {
///         "queryType": { "name": "Query" },
///         "types": [{
///             "kind": "OBJECT",
///             "name": "Query",
///             "fields": [{
///                 "name": "hello",
///                 "args": [],
///                 "type": { "kind": "SCALAR", "name": "String" }
///             }]
///         }]
///     }
/// }"#)?
/// .build()?;
///
/// assert!(registry.query_type().fields().contains_key("hello"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct TypeRegistryBuilder {
    schema: IntrospectionSchema,
}

impl TypeRegistryBuilder {
    /// Accepts both the full `{"data": {"__schema": ...}}` response and a
    /// bare `{"__schema": ...}` object.
    pub fn from_introspection_json(json: &str) -> Result<Self> {
        Ok(Self::from_introspection(IntrospectionResponse::from_json(json)?))
    }

    pub fn from_introspection(response: IntrospectionResponse) -> Self {
        Self {
            schema: response.into_schema(),
        }
    }

    /// Converts every type and directive, resolves every type reference and
    /// parses every `defaultValue`.
    ///
    /// Types whose names start with `__` describe the introspection system
    /// itself and are skipped. Built-in scalars are always registered, whether
    /// or not the introspection result lists them.
    pub fn build(self) -> Result<TypeRegistry> {
        let schema = &self.schema;
        log::debug!(
            "building type registry from {} introspection types and {} directives",
            schema.types.len(),
            schema.directives.len(),
        );

        let known_type_names = index_type_names(schema)?;
        let mut converter = TypeConverter {
            known_type_names,
            pending_default_values: vec![],
        };

        let mut types = builtin_types();
        for introspection_type in &schema.types {
            let Some(type_) = converter.convert_type(introspection_type)? else {
                continue;
            };
            log::trace!("registered type `{}` ({:?})", type_.name(), type_.kind());
            types.insert(type_.name().to_string(), type_);
        }

        let mut directives = IndexMap::with_capacity(schema.directives.len());
        for introspection_directive in &schema.directives {
            let directive = converter.convert_directive(introspection_directive)?;
            if directives.contains_key(&directive.name) {
                return Err(TypeRegistryBuildError::DuplicateDirectiveDefinition {
                    directive_name: directive.name,
                });
            }
            directives.insert(directive.name.clone(), directive);
        }

        // Default values are coerced against the complete type map, so they
        // can only be resolved once every type has been converted.
        let coercer = DefaultValueCoercer::new(&types);
        let mut resolved_default_values =
            Vec::with_capacity(converter.pending_default_values.len());
        for pending in &converter.pending_default_values {
            resolved_default_values.push((pending.site, pending.resolve(&coercer)?));
        }
        for (site, value) in resolved_default_values {
            if let Some(slot) = default_value_slot(&mut types, &mut directives, site) {
                *slot = Some(value);
            }
        }

        let query_type = match &schema.query_type {
            Some(type_ref) => Some(root_operation_type(
                &types,
                GraphQLOperationType::Query,
                type_ref,
            )?),
            None => None,
        }.ok_or(TypeRegistryBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = schema.mutation_type
            .as_ref()
            .map(|type_ref| root_operation_type(
                &types,
                GraphQLOperationType::Mutation,
                type_ref,
            ))
            .transpose()?;
        let subscription_type = schema.subscription_type
            .as_ref()
            .map(|type_ref| root_operation_type(
                &types,
                GraphQLOperationType::Subscription,
                type_ref,
            ))
            .transpose()?;

        log::debug!(
            "built type registry with {} types and {} directives",
            types.len(),
            directives.len(),
        );

        Ok(TypeRegistry {
            directives,
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }
}

fn builtin_types() -> IndexMap<String, GraphQLType> {
    IndexMap::from([
        ("Boolean".to_string(), GraphQLType::Bool),
        ("Float".to_string(), GraphQLType::Float),
        ("ID".to_string(), GraphQLType::ID),
        ("Int".to_string(), GraphQLType::Int),
        ("String".to_string(), GraphQLType::String),
    ])
}

fn is_builtin_scalar(introspection_type: &IntrospectionType, name: &str) -> bool {
    introspection_type.kind == IntrospectionTypeKind::Scalar
        && BUILTIN_SCALAR_NAMES.contains(&name)
}

/// Collects the name of every type the registry will contain so references
/// can be checked while converting, before the referenced type is converted.
fn index_type_names(schema: &IntrospectionSchema) -> Result<HashSet<&str>> {
    let mut names: HashSet<&str> = BUILTIN_SCALAR_NAMES.into_iter().collect();
    for introspection_type in &schema.types {
        let name = introspection_type.name.as_deref().ok_or(
            TypeRegistryBuildError::MissingTypeName {
                kind: introspection_type.kind,
            },
        )?;
        if name.starts_with("__") || is_builtin_scalar(introspection_type, name) {
            continue;
        }
        if !names.insert(name) {
            return Err(TypeRegistryBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
            });
        }
    }
    Ok(names)
}

fn root_operation_type(
    types: &IndexMap<String, GraphQLType>,
    operation: GraphQLOperationType,
    type_ref: &IntrospectionNamedTypeRef,
) -> Result<NamedGraphQLTypeRef> {
    match types.get(&type_ref.name) {
        Some(GraphQLType::Object(_)) =>
            Ok(GraphQLType::named_ref(type_ref.name.as_str())),
        _ => Err(TypeRegistryBuildError::InvalidOperationType {
            operation,
            type_name: type_ref.name.clone(),
        }),
    }
}

/// Finds the `default_value` of the parameter or input field at `site`.
fn default_value_slot<'a>(
    types: &'a mut IndexMap<String, GraphQLType>,
    directives: &'a mut IndexMap<String, Directive>,
    site: SchemaCoordinate<'_>,
) -> Option<&'a mut Option<Value>> {
    match site {
        SchemaCoordinate::FieldArgument { type_name, field_name, argument_name } => {
            let data = match types.get_mut(type_name)? {
                GraphQLType::Object(object_type) => &mut object_type.0,
                GraphQLType::Interface(iface_type) => &mut iface_type.data,
                _ => return None,
            };
            let param = data.fields
                .get_mut(field_name)?
                .parameters
                .get_mut(argument_name)?;
            Some(&mut param.default_value)
        },

        SchemaCoordinate::InputField { type_name, field_name } => {
            let GraphQLType::InputObject(input_type) = types.get_mut(type_name)? else {
                return None;
            };
            Some(&mut input_type.fields.get_mut(field_name)?.default_value)
        },

        SchemaCoordinate::DirectiveArgument { directive_name, argument_name } => {
            let param = directives
                .get_mut(directive_name)?
                .parameters
                .get_mut(argument_name)?;
            Some(&mut param.default_value)
        },

        SchemaCoordinate::Type { .. }
        | SchemaCoordinate::Field { .. } => None,
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// A `defaultValue` waiting for the full type map before it can be coerced.
struct PendingDefaultValue<'schema> {
    raw: &'schema str,
    site: SchemaCoordinate<'schema>,
    type_annotation: TypeAnnotation,
}

impl<'schema> PendingDefaultValue<'schema> {
    fn resolve(&self, coercer: &DefaultValueCoercer<'_>) -> Result<Value> {
        let invalid = |reason: String| TypeRegistryBuildError::InvalidDefaultValue {
            default_value: self.raw.to_string(),
            referenced_by: self.site.to_string(),
            reason,
        };
        let literal = graphql_literal_parser::parse_default_value(self.raw)
            .map_err(|err| invalid(err.to_string()))?;
        coercer
            .coerce(&literal, &self.type_annotation)
            .map_err(|err| invalid(err.to_string()))
    }
}

struct TypeConverter<'schema> {
    known_type_names: HashSet<&'schema str>,
    pending_default_values: Vec<PendingDefaultValue<'schema>>,
}

impl<'schema> TypeConverter<'schema> {
    /// Returns `None` for types the registry doesn't hold: introspection
    /// meta-types and the built-in scalars.
    fn convert_type(
        &mut self,
        introspection_type: &'schema IntrospectionType,
    ) -> Result<Option<GraphQLType>> {
        let name = introspection_type.name.as_deref().ok_or(
            TypeRegistryBuildError::MissingTypeName {
                kind: introspection_type.kind,
            },
        )?;
        if name.starts_with("__") || is_builtin_scalar(introspection_type, name) {
            return Ok(None);
        }

        let description = introspection_type.description.clone();
        let site = SchemaCoordinate::Type { type_name: name };
        Ok(Some(match introspection_type.kind {
            IntrospectionTypeKind::Scalar => GraphQLType::Scalar(ScalarType {
                description,
                name: name.to_string(),
                specified_by_url: introspection_type.specified_by_url.clone(),
            }),

            IntrospectionTypeKind::Object => GraphQLType::Object(ObjectType(
                self.convert_object_or_interface(introspection_type, name)?,
            )),

            IntrospectionTypeKind::Interface => GraphQLType::Interface(InterfaceType {
                data: self.convert_object_or_interface(introspection_type, name)?,
                possible_types: self.convert_named_refs(
                    &introspection_type.possible_types,
                    site,
                )?,
            }),

            IntrospectionTypeKind::Union => GraphQLType::Union(UnionType {
                description,
                members: self.convert_named_refs(
                    &introspection_type.possible_types,
                    site,
                )?,
                name: name.to_string(),
            }),

            IntrospectionTypeKind::Enum => GraphQLType::Enum(EnumType {
                description,
                name: name.to_string(),
                values: introspection_type.enum_values
                    .iter()
                    .map(|value| (value.name.clone(), EnumValue {
                        deprecation: DeprecationState::from_introspection(
                            value.is_deprecated,
                            value.deprecation_reason.as_deref(),
                        ),
                        description: value.description.clone(),
                        name: value.name.clone(),
                    }))
                    .collect(),
            }),

            IntrospectionTypeKind::InputObject => {
                let mut fields = IndexMap::with_capacity(
                    introspection_type.input_fields.len(),
                );
                for input_value in &introspection_type.input_fields {
                    let site = SchemaCoordinate::InputField {
                        type_name: name,
                        field_name: input_value.name.as_str(),
                    };
                    let (type_annotation, deprecation) =
                        self.convert_input_value(input_value, site)?;
                    fields.insert(input_value.name.clone(), InputField {
                        default_value: None,
                        deprecation,
                        description: input_value.description.clone(),
                        name: input_value.name.clone(),
                        type_annotation,
                    });
                }
                GraphQLType::InputObject(InputObjectType {
                    description,
                    fields,
                    name: name.to_string(),
                })
            },

            // Wrapping kinds never name a type of their own.
            IntrospectionTypeKind::List
            | IntrospectionTypeKind::NonNull =>
                return Err(TypeRegistryBuildError::UnnamedTypeReference {
                    kind: introspection_type.kind,
                    referenced_by: name.to_string(),
                }),
        }))
    }

    fn convert_object_or_interface(
        &mut self,
        introspection_type: &'schema IntrospectionType,
        type_name: &'schema str,
    ) -> Result<ObjectOrInterfaceTypeData> {
        let mut fields = IndexMap::with_capacity(introspection_type.fields.len());
        for introspection_field in &introspection_type.fields {
            let field_name = introspection_field.name.as_str();

            let mut parameters =
                IndexMap::with_capacity(introspection_field.args.len());
            for arg in &introspection_field.args {
                let site = SchemaCoordinate::FieldArgument {
                    type_name,
                    field_name,
                    argument_name: arg.name.as_str(),
                };
                parameters.insert(arg.name.clone(), self.convert_parameter(arg, site)?);
            }

            let type_annotation = self.convert_type_ref(
                &introspection_field.type_ref,
                SchemaCoordinate::Field { type_name, field_name },
            )?;
            fields.insert(introspection_field.name.clone(), Field {
                deprecation: DeprecationState::from_introspection(
                    introspection_field.is_deprecated,
                    introspection_field.deprecation_reason.as_deref(),
                ),
                description: introspection_field.description.clone(),
                name: introspection_field.name.clone(),
                parameters,
                type_annotation,
            });
        }

        Ok(ObjectOrInterfaceTypeData {
            description: introspection_type.description.clone(),
            fields,
            interfaces: self.convert_named_refs(
                &introspection_type.interfaces,
                SchemaCoordinate::Type { type_name },
            )?,
            name: type_name.to_string(),
        })
    }

    fn convert_directive(
        &mut self,
        introspection_directive: &'schema IntrospectionDirective,
    ) -> Result<Directive> {
        let directive_name = introspection_directive.name.as_str();
        let mut parameters =
            IndexMap::with_capacity(introspection_directive.args.len());
        for arg in &introspection_directive.args {
            let site = SchemaCoordinate::DirectiveArgument {
                directive_name,
                argument_name: arg.name.as_str(),
            };
            parameters.insert(arg.name.clone(), self.convert_parameter(arg, site)?);
        }

        Ok(Directive {
            description: introspection_directive.description.clone(),
            is_repeatable: introspection_directive.is_repeatable,
            locations: introspection_directive.locations.clone(),
            name: directive_name.to_string(),
            parameters,
        })
    }

    fn convert_parameter(
        &mut self,
        input_value: &'schema IntrospectionInputValue,
        site: SchemaCoordinate<'schema>,
    ) -> Result<Parameter> {
        let (type_annotation, deprecation) =
            self.convert_input_value(input_value, site)?;
        Ok(Parameter {
            default_value: None,
            deprecation,
            description: input_value.description.clone(),
            name: input_value.name.clone(),
            type_annotation,
        })
    }

    /// Converts the parts shared by arguments and input fields, and queues the
    /// `defaultValue` (if any) for resolution once all types are known.
    fn convert_input_value(
        &mut self,
        input_value: &'schema IntrospectionInputValue,
        site: SchemaCoordinate<'schema>,
    ) -> Result<(TypeAnnotation, DeprecationState)> {
        let type_annotation = self.convert_type_ref(&input_value.type_ref, site)?;
        if let Some(raw) = input_value.default_value.as_deref() {
            self.pending_default_values.push(PendingDefaultValue {
                raw,
                site,
                type_annotation: type_annotation.clone(),
            });
        }
        let deprecation = DeprecationState::from_introspection(
            input_value.is_deprecated,
            input_value.deprecation_reason.as_deref(),
        );
        Ok((type_annotation, deprecation))
    }

    fn convert_type_ref(
        &self,
        type_ref: &IntrospectionTypeRef,
        site: SchemaCoordinate<'_>,
    ) -> Result<TypeAnnotation> {
        self.convert_type_ref_impl(type_ref, /* nullable = */ true, site)
    }

    /// `NON_NULL` doesn't produce an annotation of its own: it marks the type
    /// it wraps as non-nullable.
    fn convert_type_ref_impl(
        &self,
        type_ref: &IntrospectionTypeRef,
        nullable: bool,
        site: SchemaCoordinate<'_>,
    ) -> Result<TypeAnnotation> {
        match type_ref.kind {
            IntrospectionTypeKind::NonNull => {
                let inner = wrapped_type_ref(type_ref, site)?;
                if inner.kind == IntrospectionTypeKind::NonNull {
                    return Err(TypeRegistryBuildError::NestedNonNull {
                        referenced_by: site.to_string(),
                    });
                }
                self.convert_type_ref_impl(inner, false, site)
            },

            IntrospectionTypeKind::List => {
                let inner = wrapped_type_ref(type_ref, site)?;
                Ok(TypeAnnotation::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(
                        self.convert_type_ref_impl(inner, true, site)?,
                    ),
                    nullable,
                }))
            },

            IntrospectionTypeKind::Enum
            | IntrospectionTypeKind::InputObject
            | IntrospectionTypeKind::Interface
            | IntrospectionTypeKind::Object
            | IntrospectionTypeKind::Scalar
            | IntrospectionTypeKind::Union =>
                Ok(TypeAnnotation::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: self.convert_named_ref(type_ref, site)?,
                })),
        }
    }

    fn convert_named_refs(
        &self,
        type_refs: &[IntrospectionTypeRef],
        site: SchemaCoordinate<'_>,
    ) -> Result<Vec<NamedGraphQLTypeRef>> {
        type_refs
            .iter()
            .map(|type_ref| self.convert_named_ref(type_ref, site))
            .collect()
    }

    fn convert_named_ref(
        &self,
        type_ref: &IntrospectionTypeRef,
        site: SchemaCoordinate<'_>,
    ) -> Result<NamedGraphQLTypeRef> {
        let type_name = type_ref.name.as_deref().ok_or_else(
            || TypeRegistryBuildError::UnnamedTypeReference {
                kind: type_ref.kind,
                referenced_by: site.to_string(),
            },
        )?;
        if !self.known_type_names.contains(type_name) {
            return Err(TypeRegistryBuildError::UnknownTypeReference {
                type_name: type_name.to_string(),
                referenced_by: site.to_string(),
            });
        }
        Ok(GraphQLType::named_ref(type_name))
    }
}

fn wrapped_type_ref<'a>(
    type_ref: &'a IntrospectionTypeRef,
    site: SchemaCoordinate<'_>,
) -> Result<&'a IntrospectionTypeRef> {
    type_ref.of_type.as_deref().ok_or_else(
        || TypeRegistryBuildError::MissingWrappedType {
            kind: type_ref.kind,
            referenced_by: site.to_string(),
        },
    )
}
