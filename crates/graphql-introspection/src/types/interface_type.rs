use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) possible_types: Vec<NamedGraphQLTypeRef>,
}

impl InterfaceType {
    /// The names of the types that implement this interface, as reported in
    /// `possibleTypes`.
    pub fn possible_type_names(&self) -> Vec<&str> {
        self.possible_types.iter().map(|type_ref| type_ref.name()).collect()
    }

    pub fn possible_types<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry GraphQLType> {
        self.possible_types
            .iter()
            .filter_map(|type_ref| type_ref.deref(registry).ok())
            .collect()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    /// The [`InterfaceType`]s this `InterfaceType` itself implements.
    pub fn interfaces<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry InterfaceType> {
        self.data.interfaces(registry)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.data.interface_names()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}
