use alloc::{borrow::ToOwned as _, string::String};
use tracing::{debug, error};

use crate::{
    any::TypeInfo,
    binding::{Binding, Source},
    callable::Callable,
    config::Config,
    errors::ResolveErrorKind,
    introspect::{Introspect, TypeCatalog},
    registry::Registry,
    resolver::Resolver,
    Value,
};

/// Registry of bindings together with the type introspection used to autowire them.
///
/// All identifiers share one namespace: type names, free-form keys and named parameter
/// bindings (`$name` with the default config).
pub struct Container<I = TypeCatalog> {
    registry: Registry,
    types: I,
    config: Config,
}

impl Default for Container {
    #[inline]
    fn default() -> Self {
        Self::new(TypeCatalog::new())
    }
}

impl<I: Introspect> Container<I> {
    #[inline]
    #[must_use]
    pub fn new(types: I) -> Self {
        Self::with_config(types, Config::default())
    }

    #[inline]
    #[must_use]
    pub fn with_config(types: I, config: Config) -> Self {
        Self {
            registry: Registry::new(),
            types,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    #[inline]
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    #[inline]
    #[must_use]
    pub const fn types(&self) -> &I {
        &self.types
    }

    #[inline]
    pub fn types_mut(&mut self) -> &mut I {
        &mut self.types
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Binds the identifier, replacing any previous binding and its singleton instance.
    /// Returns the replaced binding.
    #[inline]
    pub fn bind(&mut self, id: impl Into<String>, binding: Binding) -> Option<Binding> {
        self.registry.bind(id, binding)
    }

    #[inline]
    pub fn transient(&mut self, id: impl Into<String>, source: impl Into<Source>) -> Option<Binding> {
        self.registry.transient(id, source)
    }

    #[inline]
    pub fn singleton(&mut self, id: impl Into<String>, source: impl Into<Source>) -> Option<Binding> {
        self.registry.singleton(id, source)
    }

    #[inline]
    pub fn closure(&mut self, id: impl Into<String>, callable: Callable) -> Option<Binding> {
        self.registry.closure(id, callable)
    }

    /// Returns `true` if the identifier is bound explicitly.
    /// Use [`Self::is_resolvable`] to also consider implicitly constructible types.
    #[inline]
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.registry.has(id)
    }

    #[inline]
    pub fn delete(&mut self, id: &str) -> Option<Binding> {
        self.registry.delete(id)
    }

    #[inline]
    pub fn reset(&mut self) {
        self.registry.reset();
    }

    /// Creates a resolver over the current bindings.
    /// Bindings can't be changed while it's alive.
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, &self.types, self.config)
    }

    /// Resolves the identifier, see [`Resolver::resolve`]
    #[allow(clippy::missing_errors_doc)]
    #[inline]
    pub fn resolve(&self, id: &str) -> Result<Value, ResolveErrorKind> {
        self.resolver().resolve(id)
    }

    /// Resolves the identifier and clones the value out as `T`
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::IncorrectType`] if the resolved value isn't a `T`
    /// - Returns any error of [`Resolver::resolve`]
    pub fn resolve_as<T: Clone + 'static>(&self, id: &str) -> Result<T, ResolveErrorKind> {
        let value = self.resolve(id)?;
        if let Some(value) = value.cloned::<T>() {
            return Ok(value);
        }

        let err = ResolveErrorKind::IncorrectType {
            id: id.to_owned(),
            expected: TypeInfo::of::<T>().name,
            actual: value.type_name(),
        };
        error!("{}", err);
        Err(err)
    }

    /// Returns the bound source without producing anything, see [`Resolver::catch`]
    #[allow(clippy::missing_errors_doc)]
    #[inline]
    pub fn catch(&self, id: &str) -> Result<Value, ResolveErrorKind> {
        self.resolver().catch(id)
    }

    /// Constructs the type, see [`Resolver::instantiate`]
    #[allow(clippy::missing_errors_doc)]
    #[inline]
    pub fn instantiate(&self, type_name: &str) -> Result<Value, ResolveErrorKind> {
        self.resolver().instantiate(type_name)
    }

    /// Calls the callable with resolved parameters, see [`Resolver::invoke`]
    #[allow(clippy::missing_errors_doc)]
    #[inline]
    pub fn invoke(&self, callable: &Callable) -> Result<Value, ResolveErrorKind> {
        self.resolver().invoke(callable)
    }

    #[inline]
    #[must_use]
    pub fn is_resolvable(&self, id: &str) -> bool {
        let resolvable = self.resolver().is_resolvable(id);
        debug!(id, resolvable, "Checked");
        resolvable
    }
}
