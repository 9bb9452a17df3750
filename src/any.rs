use core::{
    any::{type_name, TypeId},
    fmt::{self, Debug, Formatter},
};

/// Runtime type identity of a value stored in the container
#[derive(Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Debug for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Type name without its module path, e.g. `Circle` for `app::shapes::Circle`.
    /// Generic arguments keep their full paths.
    /// Names that don't start with a path, like arrays, tuples or references, are returned as is.
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        if !self.name.starts_with(|first: char| first.is_alphabetic() || first == '_') {
            return self.name;
        }

        let head = self.name.split_once('<').map_or(self.name, |(head, _)| head);
        match head.rsplit_once("::") {
            Some((path, _)) => &self.name[path.len() + 2..],
            None => self.name,
        }
    }
}
