use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_annotation: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}

impl ListTypeAnnotation {
    /// The annotation of the list's items.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
