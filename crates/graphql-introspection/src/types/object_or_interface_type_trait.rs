use crate::schema::TypeRegistry;
use crate::types::Field;
use crate::types::InterfaceType;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`].
pub trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interfaces<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry InterfaceType>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
