use alloc::{sync::Arc, vec::Vec};
use core::fmt::{self, Debug, Formatter};

use crate::{
    callable::{Arguments, BoxedBody},
    errors::InstantiateErrorKind,
    parameter::ParameterDescriptor,
    Value,
};

/// Describes how to construct a concrete type.
///
/// A constructor either has a designated initializer with a parameter list, which the resolver
/// arranges before calling it, or none, in which case it is called with no arguments.
#[derive(Clone)]
pub struct Constructor {
    parameters: Option<Arc<[ParameterDescriptor]>>,
    build: BoxedBody,
}

impl Constructor {
    /// Creates a constructor with a designated initializer
    #[must_use]
    pub fn new<F>(parameters: impl Into<Vec<ParameterDescriptor>>, build: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value, InstantiateErrorKind> + Send + Sync + 'static,
    {
        let parameters: Vec<ParameterDescriptor> = parameters.into();
        Self {
            parameters: Some(parameters.into()),
            build: Arc::new(build),
        }
    }

    /// Creates a constructor without a designated initializer
    #[must_use]
    pub fn nullary<F>(build: F) -> Self
    where
        F: Fn() -> Result<Value, InstantiateErrorKind> + Send + Sync + 'static,
    {
        Self {
            parameters: None,
            build: Arc::new(move |_: Arguments| build()),
        }
    }

    /// Creates a constructor without a designated initializer that builds `T::default()`
    #[inline]
    #[must_use]
    pub fn default_of<T: Default + Clone + Send + 'static>() -> Self {
        Self::nullary(|| Ok(Value::new(T::default())))
    }

    /// Creates a constructor that returns a copy of the passed value.
    /// It can be used when the value was created outside the container.
    #[inline]
    #[must_use]
    pub fn instance<T: Clone + Send + Sync + 'static>(val: T) -> Self {
        Self::nullary(move || Ok(Value::new(val.clone())))
    }

    /// Parameters of the designated initializer, `None` if there is no initializer
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> Option<&[ParameterDescriptor]> {
        self.parameters.as_deref()
    }

    /// Constructs the value from already arranged arguments
    ///
    /// # Errors
    /// Returns any error the build function returns
    #[inline]
    pub fn construct(&self, arguments: Arguments) -> Result<Value, InstantiateErrorKind> {
        (self.build)(arguments)
    }
}

impl Debug for Constructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
