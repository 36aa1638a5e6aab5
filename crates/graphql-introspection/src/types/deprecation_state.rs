/// Whether a field, argument, input field or enum value is deprecated, as
/// reported by `isDeprecated` and `deprecationReason`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum DeprecationState {
    Deprecated(Option<String>),
    #[default]
    NotDeprecated,
}

impl DeprecationState {
    pub(crate) fn from_introspection(
        is_deprecated: bool,
        reason: Option<&str>,
    ) -> Self {
        if is_deprecated {
            Self::Deprecated(reason.map(str::to_string))
        } else {
            Self::NotDeprecated
        }
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => reason.as_deref(),
            Self::NotDeprecated => None,
        }
    }
}
