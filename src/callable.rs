use alloc::{borrow::Cow, format, sync::Arc, vec::Vec};
use core::{
    any::type_name,
    fmt::{self, Debug, Formatter},
};

use crate::{any::TypeInfo, errors::InstantiateErrorKind, parameter::ParameterDescriptor, Value};

pub(crate) type BoxedBody = Arc<dyn Fn(Arguments) -> Result<Value, InstantiateErrorKind> + Send + Sync>;

/// Arguments arranged by the resolver, in the declaration order of the parameters
#[derive(Clone, Debug, Default)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    #[inline]
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets the handle of the argument at `index`.
    /// Keep the handle to share the object with the container, e.g. for singletons.
    ///
    /// # Errors
    /// Returns [`InstantiateErrorKind::MissingArgument`] if there is no argument at `index`
    pub fn value(&self, index: usize) -> Result<&Value, InstantiateErrorKind> {
        self.values.get(index).ok_or(InstantiateErrorKind::MissingArgument {
            index,
            len: self.values.len(),
        })
    }

    /// Gets a copy of the argument at `index`
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::MissingArgument`] if there is no argument at `index`
    /// - Returns [`InstantiateErrorKind::IncorrectType`] if the argument isn't a `T`
    pub fn get<T: Clone + 'static>(&self, index: usize) -> Result<T, InstantiateErrorKind> {
        let value = self.value(index)?;
        value.cloned().ok_or(InstantiateErrorKind::IncorrectType {
            index,
            expected: type_name::<T>(),
            actual: value.type_name(),
        })
    }
}

/// A function value the container can invoke after arranging its parameters.
///
/// Cloning is cheap, the body is shared.
#[derive(Clone)]
pub struct Callable {
    name: Cow<'static, str>,
    parameters: Arc<[ParameterDescriptor]>,
    body: BoxedBody,
}

impl Callable {
    /// Creates a callable from a free function or closure
    #[must_use]
    pub fn new<F>(name: impl Into<Cow<'static, str>>, parameters: impl Into<Vec<ParameterDescriptor>>, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value, InstantiateErrorKind> + Send + Sync + 'static,
    {
        let parameters: Vec<ParameterDescriptor> = parameters.into();
        Self {
            name: name.into(),
            parameters: parameters.into(),
            body: Arc::new(body),
        }
    }

    /// Creates a callable bound to a method of `target`.
    ///
    /// The method runs on a copy of the target that is written back once it returns,
    /// so the target isn't locked while the method runs and arguments may share its handle.
    /// Such arguments observe the target as it was before the call.
    #[must_use]
    pub fn method<T, F>(target: Value, method: &'static str, parameters: impl Into<Vec<ParameterDescriptor>>, body: F) -> Self
    where
        T: Clone + 'static,
        F: Fn(&mut T, Arguments) -> Result<Value, InstantiateErrorKind> + Send + Sync + 'static,
    {
        let name = format!("{}::{method}", target.type_info().short_name());
        let parameters: Vec<ParameterDescriptor> = parameters.into();
        Self {
            name: name.into(),
            parameters: parameters.into(),
            body: Arc::new(move |arguments: Arguments| {
                let Some(mut copy) = target.cloned::<T>() else {
                    return Err(InstantiateErrorKind::IncorrectTarget {
                        method,
                        expected: TypeInfo::of::<T>().name,
                        actual: target.type_name(),
                    });
                };

                let result = body(&mut copy, arguments);
                target.with_mut(|target: &mut T| *target = copy);
                result
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Calls the body with already arranged arguments, bypassing the container
    ///
    /// # Errors
    /// Returns any error the body returns
    #[inline]
    pub fn call(&self, arguments: Arguments) -> Result<Value, InstantiateErrorKind> {
        (self.body)(arguments)
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
