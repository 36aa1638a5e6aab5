use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a `TResource` stored in some
/// other data-store (`TSource`) without holding a Rust reference to that
/// data-store. De-referencing is done via [`NamedRef::deref()`] by passing the
/// `TSource` explicitly.
///
/// [`ObjectType`](crate::types::ObjectType) for example stores the interfaces
/// it implements as `NamedRef<TypeRegistry, GraphQLType>`s, which lets the
/// [`TypeRegistry`](crate::schema::TypeRegistry) own every type without
/// self-references.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<TSource, TResource: DerefByName<Source = TSource>> {
    name: String,
    phantom: PhantomData<TResource>,
}

impl<TSource, TResource: DerefByName<Source = TSource>>
    NamedRef<TSource, TResource>
{
    pub fn new(name: impl AsRef<str>) -> Self {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement this for any type that can be looked up by name in a `Source`.
/// This enables [`NamedRef`]s to that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no definition found for `{0}`")]
    DanglingReference(String),
}
