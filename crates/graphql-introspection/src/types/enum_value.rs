use crate::types::DeprecationState;

/// A single value of an [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecation: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}

impl EnumValue {
    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
