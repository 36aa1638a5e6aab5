use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// Look up one of this type's fields by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from field name to [`Field`] for all fields of this
    /// [`ObjectType`], in the order the server listed them.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The [`InterfaceType`]s this [`ObjectType`] implements.
    pub fn interfaces<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry InterfaceType> {
        self.0.interfaces(registry)
    }

    /// The names of the interfaces this [`ObjectType`] implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
