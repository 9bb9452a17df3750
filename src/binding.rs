use alloc::string::String;
use parking_lot::Mutex;

use crate::{callable::Callable, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// A fresh value on every resolution
    Transient,
    /// One value, produced on first resolution and shared afterwards
    Singleton,
    /// The bound callable itself is the value
    ClosureWrapper,
}

/// What a binding is satisfied from
#[derive(Clone, Debug)]
pub enum Source {
    /// Name of a type the container constructs
    Type(String),
    /// A callable whose result is the value
    Callable(Callable),
    /// An existing value
    Value(Value),
}

impl Source {
    #[inline]
    #[must_use]
    pub fn type_name(type_name: impl Into<String>) -> Self {
        Self::Type(type_name.into())
    }

    #[inline]
    #[must_use]
    pub fn value<T: Clone + Send + 'static>(value: T) -> Self {
        Self::Value(Value::new(value))
    }
}

impl From<Callable> for Source {
    #[inline]
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

impl From<Value> for Source {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// A registered rule for an identifier.
///
/// Only a singleton has an instance cell, it's written once on the first successful resolution
/// and lives as long as the binding.
#[derive(Debug)]
pub enum Binding {
    Transient(Source),
    Singleton { source: Source, instance: Mutex<Option<Value>> },
    Closure(Callable),
}

impl Binding {
    #[inline]
    #[must_use]
    pub fn transient(source: impl Into<Source>) -> Self {
        Self::Transient(source.into())
    }

    #[inline]
    #[must_use]
    pub fn singleton(source: impl Into<Source>) -> Self {
        Self::Singleton {
            source: source.into(),
            instance: Mutex::new(None),
        }
    }

    #[inline]
    #[must_use]
    pub const fn closure(callable: Callable) -> Self {
        Self::Closure(callable)
    }

    #[inline]
    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        match self {
            Self::Transient(_) => Lifecycle::Transient,
            Self::Singleton { .. } => Lifecycle::Singleton,
            Self::Closure(_) => Lifecycle::ClosureWrapper,
        }
    }

    /// Cached singleton instance, `None` for other lifecycles or before the first resolution
    #[inline]
    #[must_use]
    pub fn instance(&self) -> Option<Value> {
        match self {
            Self::Singleton { instance, .. } => instance.lock().clone(),
            Self::Transient(_) | Self::Closure(_) => None,
        }
    }

    /// Stores the produced value if this is a singleton without an instance yet.
    /// Returns the value callers should observe: the first stored instance for singletons.
    pub(crate) fn remember(&self, value: Value) -> Value {
        match self {
            Self::Singleton { instance, .. } => instance.lock().get_or_insert(value).clone(),
            Self::Transient(_) | Self::Closure(_) => value,
        }
    }

    /// The bound source as is, without constructing or invoking anything
    #[must_use]
    pub fn literal(&self) -> Value {
        match self {
            Self::Transient(source) | Self::Singleton { source, .. } => match source {
                Source::Type(type_name) => Value::new(type_name.clone()),
                Source::Callable(callable) => Value::new(callable.clone()),
                Source::Value(value) => value.clone(),
            },
            Self::Closure(callable) => Value::new(callable.clone()),
        }
    }
}
