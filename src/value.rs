use alloc::{boxed::Box, sync::Arc};
use core::{
    any::Any,
    fmt::{self, Debug, Formatter},
};
use parking_lot::Mutex;

use crate::any::TypeInfo;

pub(crate) trait CloneAny: Any + Send {
    #[must_use]
    fn clone_box(&self) -> Box<dyn CloneAny>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> CloneAny for T
where
    T: Any + Clone + Send,
{
    #[inline]
    fn clone_box(&self) -> Box<dyn CloneAny> {
        Box::new(self.clone())
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Shared handle to a value produced or stored by the container.
///
/// Cloning a [`Value`] clones the handle, not the object: both handles observe the same object
/// and compare equal with [`Value::ptr_eq`]. Use [`Value::deep_clone`] to get an independent copy.
#[derive(Clone)]
pub struct Value {
    type_info: TypeInfo,
    inner: Arc<Mutex<Box<dyn CloneAny>>>,
}

impl Value {
    #[inline]
    #[must_use]
    pub fn new<T: Clone + Send + 'static>(value: T) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            inner: Arc::new(Mutex::new(Box::new(value))),
        }
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_info.name
    }

    #[inline]
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_info == TypeInfo::of::<T>()
    }

    /// Returns `true` if both handles point to the same object
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copies the underlying object into a new, unshared handle
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        let cloned = (**self.inner.lock()).clone_box();
        Self {
            type_info: self.type_info,
            inner: Arc::new(Mutex::new(cloned)),
        }
    }

    /// Calls `f` with a shared reference to the object if it is a `T`.
    ///
    /// # Warning
    /// The object is locked while `f` runs, accessing the same value from `f` deadlocks.
    pub fn with<T: 'static, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.inner.lock();
        (**guard).as_any().downcast_ref::<T>().map(f)
    }

    /// Calls `f` with a mutable reference to the object if it is a `T`.
    /// The mutation is visible through every handle of this value.
    ///
    /// # Warning
    /// The object is locked while `f` runs, accessing the same value from `f` deadlocks.
    pub fn with_mut<T: 'static, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.inner.lock();
        (**guard).as_any_mut().downcast_mut::<T>().map(f)
    }

    #[inline]
    #[must_use]
    pub fn cloned<T: Clone + 'static>(&self) -> Option<T> {
        self.with(T::clone)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value").field("type", &self.type_info).finish_non_exhaustive()
    }
}
