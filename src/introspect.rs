use alloc::{collections::BTreeMap, string::String};
use tracing::debug;

use crate::{any::TypeInfo, constructor::Constructor};

/// What the host knows about a type name
#[derive(Clone, Debug)]
pub enum TypeDescriptor {
    /// An interface or abstract type, it can be bound but never constructed implicitly
    Abstract,
    /// A constructible type
    Concrete(Constructor),
}

impl TypeDescriptor {
    #[inline]
    #[must_use]
    pub const fn constructor(&self) -> Option<&Constructor> {
        match self {
            TypeDescriptor::Abstract => None,
            TypeDescriptor::Concrete(constructor) => Some(constructor),
        }
    }
}

/// The capability the resolver uses to learn how types are constructed.
///
/// Implementations are assumed total for any type the host can reference:
/// `None` means the name isn't a type at all.
pub trait Introspect {
    fn describe(&self, type_name: &str) -> Option<&TypeDescriptor>;

    #[inline]
    fn is_concrete(&self, type_name: &str) -> bool {
        matches!(self.describe(type_name), Some(TypeDescriptor::Concrete(_)))
    }
}

/// Map-backed [`Introspect`] implementation, filled per type at registration time
#[derive(Clone, Debug, Default)]
pub struct TypeCatalog {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { types: BTreeMap::new() }
    }

    #[inline]
    #[must_use]
    pub fn concrete(mut self, type_name: impl Into<String>, constructor: Constructor) -> Self {
        self.insert(type_name, TypeDescriptor::Concrete(constructor));
        self
    }

    /// Registers a concrete type under its short type name, e.g. `Circle`
    #[inline]
    #[must_use]
    pub fn concrete_of<T: ?Sized + 'static>(self, constructor: Constructor) -> Self {
        self.concrete(TypeInfo::of::<T>().short_name(), constructor)
    }

    #[inline]
    #[must_use]
    pub fn abstract_type(mut self, type_name: impl Into<String>) -> Self {
        self.insert(type_name, TypeDescriptor::Abstract);
        self
    }

    /// Registers the descriptor, returning the replaced one
    pub fn insert(&mut self, type_name: impl Into<String>, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        let type_name = type_name.into();
        debug!(type_name = type_name.as_str(), "Type described");
        self.types.insert(type_name, descriptor)
    }

    pub fn remove(&mut self, type_name: &str) -> Option<TypeDescriptor> {
        self.types.remove(type_name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Introspect for TypeCatalog {
    #[inline]
    fn describe(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }
}
