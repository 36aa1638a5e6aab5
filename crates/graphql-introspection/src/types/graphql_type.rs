use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::TypeRegistry;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a named GraphQL type registered in a
/// [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}

impl GraphQLType {
    /// If this [`GraphQLType`] is a [`GraphQLType::Enum`], unwrap and return
    /// a reference to the inner [`EnumType`].
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The description the server reported for this type. Built-in scalars
    /// have none.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Returns `true` if values of this type may appear as arguments or
    /// input fields.
    pub fn is_input_type(&self) -> bool {
        match self {
            Self::Bool
            | Self::Enum(_)
            | Self::Float
            | Self::ID
            | Self::InputObject(_)
            | Self::Int
            | Self::Scalar(_)
            | Self::String => true,

            Self::Interface(_)
            | Self::Object(_)
            | Self::Union(_) => false,
        }
    }

    /// Returns `true` if this type may be the type of a field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}

impl DerefByName for GraphQLType {
    type Source = TypeRegistry;

    fn deref_name<'a>(
        registry: &'a TypeRegistry,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        registry.lookup_type(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
