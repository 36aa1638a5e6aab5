use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// The declared type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter) or
/// [`InputField`](crate::types::InputField).
///
/// Non-null wrappers are folded into the `nullable` flag of the annotation
/// they wrap, so `[String!]!` is a non-nullable list of non-nullable
/// `String`s.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type_annotation().innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Check if two type annotations are structurally equal: same list
    /// nesting, same nullability at each level, same innermost type name.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list)) =>
                self_list.nullable() == other_list.nullable()
                    && self_list.inner_type_annotation().is_equivalent_to(
                        other_list.inner_type_annotation(),
                    ),
            (Self::Named(self_named), Self::Named(other_named)) =>
                self_named.nullable() == other_named.nullable()
                    && self_named.graphql_type_name()
                        == other_named.graphql_type_name(),
            _ => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list_annot) => list_annot.nullable(),
            Self::Named(named_annot) => named_annot.nullable(),
        }
    }
}

impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}

impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
