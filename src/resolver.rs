use alloc::{borrow::ToOwned as _, string::String, vec::Vec};
use tracing::{debug, debug_span, error, warn};

use crate::{
    binding::{Binding, Source},
    callable::{Arguments, Callable},
    config::Config,
    errors::{ResolutionCause, ResolveErrorKind},
    introspect::{Introspect, TypeDescriptor},
    parameter::ParameterDescriptor,
    registry::Registry,
    Value,
};

/// Produces values for identifiers and callables, resolving their parameters recursively.
///
/// A resolver borrows the registry it reads from, so the registry can't be changed while
/// a resolution is in progress. It tracks the identifiers being resolved and fails with
/// [`ResolveErrorKind::CyclicDependency`] instead of recursing forever.
pub struct Resolver<'a> {
    registry: &'a Registry,
    types: &'a dyn Introspect,
    config: Config,
    stack: Vec<String>,
}

impl<'a> Resolver<'a> {
    #[inline]
    #[must_use]
    pub fn new(registry: &'a Registry, types: &'a dyn Introspect, config: Config) -> Self {
        Self {
            registry,
            types,
            config,
            stack: Vec::new(),
        }
    }

    /// Resolves the identifier.
    ///
    /// Unbound identifiers that name a concrete type are constructed implicitly.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NotBound`] if the identifier isn't bound and isn't a concrete type
    /// - Returns [`ResolveErrorKind::Resolution`] if the value or one of its dependencies can't be produced
    /// - Returns [`ResolveErrorKind::CyclicDependency`] if the identifier depends on itself
    pub fn resolve(&mut self, id: &str) -> Result<Value, ResolveErrorKind> {
        let span = debug_span!("resolve", id);
        let _guard = span.enter();

        self.enter(id)?;
        let result = self.resolve_entered(id);
        self.stack.pop();

        result
    }

    /// Returns the bound source of the identifier as is: a value source itself, a callable source
    /// as a [`Callable`] value or a type source as its name.
    /// Nothing is constructed or invoked and singleton instances aren't touched.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NotBound`] if the identifier isn't bound
    pub fn catch(&self, id: &str) -> Result<Value, ResolveErrorKind> {
        match self.registry.get(id) {
            Some(binding) => Ok(binding.literal()),
            None => {
                let err = ResolveErrorKind::NotBound { id: id.to_owned() };
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Constructs the type, resolving the parameters of its initializer.
    /// Bindings of the type name itself aren't considered.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::Resolution`] if the type is unknown, abstract, or can't be constructed
    /// - Returns any error of resolving the initializer parameters
    pub fn instantiate(&mut self, type_name: &str) -> Result<Value, ResolveErrorKind> {
        let span = debug_span!("instantiate", type_name);
        let _guard = span.enter();

        let types = self.types;
        let Some(constructor) = types.describe(type_name).and_then(TypeDescriptor::constructor) else {
            let err = ResolveErrorKind::Resolution {
                target: type_name.to_owned(),
                cause: ResolutionCause::NotConstructible,
            };
            error!("{}", err);
            return Err(err);
        };

        let arguments = match constructor.parameters() {
            Some(parameters) => self.arrange_parameters(type_name, parameters)?,
            None => {
                debug!("No initializer, constructing without arguments");
                Arguments::default()
            }
        };

        match constructor.construct(arguments) {
            Ok(value) => {
                debug!("Constructed");
                Ok(value)
            }
            Err(err) => {
                let err = ResolveErrorKind::Resolution {
                    target: type_name.to_owned(),
                    cause: ResolutionCause::Instantiate(err),
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Calls the callable with its parameters resolved.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::Resolution`] if the callable fails
    /// - Returns any error of resolving the parameters
    pub fn invoke(&mut self, callable: &Callable) -> Result<Value, ResolveErrorKind> {
        let span = debug_span!("invoke", callable = callable.name());
        let _guard = span.enter();

        let arguments = self.arrange_parameters(callable.name(), callable.parameters())?;

        match callable.call(arguments) {
            Ok(value) => {
                debug!("Invoked");
                Ok(value)
            }
            Err(err) => {
                let err = ResolveErrorKind::Resolution {
                    target: callable.name().to_owned(),
                    cause: ResolutionCause::Instantiate(err),
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Returns `true` if the identifier is bound or names a concrete type
    #[inline]
    #[must_use]
    pub fn is_resolvable(&self, id: &str) -> bool {
        self.registry.has(id) || self.types.is_concrete(id)
    }
}

impl Resolver<'_> {
    fn enter(&mut self, id: &str) -> Result<(), ResolveErrorKind> {
        if self.stack.iter().any(|entered| entered == id) {
            let mut path = self.stack.clone();
            path.push(id.to_owned());

            let err = ResolveErrorKind::CyclicDependency { path };
            error!("{}", err);
            return Err(err);
        }

        self.stack.push(id.to_owned());
        Ok(())
    }

    fn resolve_entered(&mut self, id: &str) -> Result<Value, ResolveErrorKind> {
        let registry = self.registry;
        let Some(binding) = registry.get(id) else {
            if self.types.is_concrete(id) {
                debug!("Not bound, constructing implicitly");
                return self.instantiate(id);
            }

            let err = ResolveErrorKind::NotBound { id: id.to_owned() };
            warn!("{}", err);
            return Err(err);
        };

        if let Some(instance) = binding.instance() {
            debug!("Found in cache");
            return Ok(instance);
        }

        let value = match binding {
            Binding::Transient(source) => self.produce(source, true)?,
            Binding::Singleton { source, .. } => {
                debug!("Not found in cache");
                self.produce(source, false)?
            }
            Binding::Closure(callable) => Value::new(callable.clone()),
        };

        if let Binding::Singleton { .. } = binding {
            debug!("Cached");
        }
        Ok(binding.remember(value))
    }

    fn produce(&mut self, source: &Source, copy_values: bool) -> Result<Value, ResolveErrorKind> {
        match source {
            Source::Type(type_name) => self.instantiate(type_name),
            Source::Callable(callable) => self.invoke(callable),
            Source::Value(value) if copy_values => Ok(value.deep_clone()),
            Source::Value(value) => Ok(value.clone()),
        }
    }

    fn arrange_parameters(&mut self, target: &str, parameters: &[ParameterDescriptor]) -> Result<Arguments, ResolveErrorKind> {
        let mut values = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            values.push(self.resolve_parameter(target, parameter)?);
        }
        Ok(Arguments::new(values))
    }

    fn resolve_parameter(&mut self, target: &str, parameter: &ParameterDescriptor) -> Result<Value, ResolveErrorKind> {
        let named_id = self.config.named_id(parameter.name());
        if self.registry.has(&named_id) {
            debug!(parameter = parameter.name(), "Resolving by name");
            return self.resolve(&named_id);
        }

        if let Some(declared_type) = parameter.declared_type() {
            if self.registry.has(declared_type) || self.types.describe(declared_type).is_some() {
                debug!(parameter = parameter.name(), declared_type, "Resolving by type");
                return self.resolve(declared_type);
            }
        }

        if let Some(default) = parameter.default_value() {
            debug!(parameter = parameter.name(), "Using default value");
            return Ok(default.deep_clone());
        }

        let err = ResolveErrorKind::Resolution {
            target: target.to_owned(),
            cause: ResolutionCause::UnresolvableParameter {
                parameter: parameter.name().to_owned(),
            },
        };
        error!("{}", err);
        Err(err)
    }
}
