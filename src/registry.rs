use alloc::{collections::BTreeMap, string::String};
use tracing::debug;

use crate::{
    binding::{Binding, Source},
    callable::Callable,
};

/// Maps identifiers to their bindings.
///
/// Binding an identifier that is already bound replaces the previous binding,
/// including its cached singleton instance.
#[derive(Default, Debug)]
pub struct Registry {
    bindings: BTreeMap<String, Binding>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn provide(mut self, id: impl Into<String>, binding: Binding) -> Self {
        self.bind(id, binding);
        self
    }

    /// Binds the identifier, returning the replaced binding
    pub fn bind(&mut self, id: impl Into<String>, binding: Binding) -> Option<Binding> {
        let id = id.into();
        debug!(id = id.as_str(), lifecycle = ?binding.lifecycle(), "Bound");

        let replaced = self.bindings.insert(id, binding);
        if replaced.is_some() {
            debug!("Replaced previous binding");
        }
        replaced
    }

    #[inline]
    pub fn transient(&mut self, id: impl Into<String>, source: impl Into<Source>) -> Option<Binding> {
        self.bind(id, Binding::transient(source))
    }

    #[inline]
    pub fn singleton(&mut self, id: impl Into<String>, source: impl Into<Source>) -> Option<Binding> {
        self.bind(id, Binding::singleton(source))
    }

    #[inline]
    pub fn closure(&mut self, id: impl Into<String>, callable: Callable) -> Option<Binding> {
        self.bind(id, Binding::closure(callable))
    }

    /// Returns `true` if the identifier is bound explicitly.
    /// Types the container can construct implicitly aren't considered.
    #[inline]
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Binding> {
        self.bindings.get(id)
    }

    /// Removes the binding if present
    pub fn delete(&mut self, id: &str) -> Option<Binding> {
        let removed = self.bindings.remove(id);
        debug!(id, removed = removed.is_some(), "Deleted");
        removed
    }

    /// Removes all bindings.
    /// Singleton instances already handed out stay valid, but are no longer reachable from the registry.
    pub fn reset(&mut self) {
        debug!(len = self.bindings.len(), "Reset");
        self.bindings.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Registry;
    use crate::{
        binding::{Binding, Lifecycle, Source},
        callable::Callable,
        Value,
    };

    use alloc::{
        format,
        string::{String, ToString as _},
        vec::Vec,
    };
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_has() {
        let mut registry = Registry::new();
        registry.transient("A", Source::type_name("A"));
        registry.singleton("B", Source::type_name("C"));

        assert!(registry.has("A"));
        assert!(registry.has("B"));
        assert!(!registry.has("C"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    #[traced_test]
    fn test_bind_overwrites() {
        let mut registry = Registry::new();
        registry.singleton("Shape", Source::type_name("Circle"));

        let replaced = registry.transient("Shape", Source::type_name("Square"));

        assert_eq!(replaced.map(|binding| binding.lifecycle()), Some(Lifecycle::Singleton));
        assert_eq!(registry.get("Shape").map(Binding::lifecycle), Some(Lifecycle::Transient));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[traced_test]
    fn test_delete() {
        let mut registry = Registry::new()
            .provide("$n", Binding::singleton(Source::value(42i64)))
            .provide("log", Binding::closure(Callable::new("log", Vec::new(), |_| Ok(Value::new(())))));

        assert!(registry.delete("$n").is_some());
        assert!(registry.delete("$n").is_none());
        assert!(registry.delete("unknown").is_none());
        assert!(!registry.has("$n"));
        assert!(registry.has("log"));
    }

    #[test]
    #[traced_test]
    fn test_reset() {
        let mut registry = Registry::new();
        for i in 0..3 {
            registry.transient(format!("id{i}"), Source::value(i));
        }
        assert_eq!(registry.identifiers().collect::<Vec<_>>(), ["id0", "id1", "id2"]);

        registry.reset();

        assert!(registry.is_empty());
        assert!(!registry.has("id0"));
        assert!(logs_contain("Reset"));
    }

    #[test]
    fn test_reset_keeps_handed_out_instances() {
        let mut registry = Registry::new();
        registry.singleton("config", Source::value("prod".to_string()));
        let instance = registry.get("config").unwrap().remember(Value::new("prod".to_string()));

        registry.reset();

        assert_eq!(instance.cloned::<String>().unwrap(), "prod");
    }
}
