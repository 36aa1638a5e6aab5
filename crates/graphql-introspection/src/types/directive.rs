use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::TypeRegistry;
use crate::types::DirectiveLocation;
use crate::types::Parameter;
use indexmap::IndexMap;

/// A directive definition reported by the schema, including built-ins like
/// `@deprecated` when the server lists them.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) description: Option<String>,
    pub(crate) is_repeatable: bool,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
}

impl Directive {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the directive may be applied more than once at a location.
    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    /// The locations this directive may be applied to, in the order the
    /// server listed them.
    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    /// The name of this directive, without the leading `@`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}

impl DerefByName for Directive {
    type Source = TypeRegistry;

    fn deref_name<'a>(
        registry: &'a TypeRegistry,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        registry.lookup_directive(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
