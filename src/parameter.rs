use alloc::string::String;

use crate::Value;

/// Describes one parameter of a constructor or callable.
///
/// Parameters are resolved in declaration order by the following rules, first match wins:
/// 1. A named binding for the parameter name with the configured prefix (`count` -> `$count`).
/// 2. The declared type, if the type is known to the container.
/// 3. The default value.
#[derive(Clone, Debug)]
pub struct ParameterDescriptor {
    name: String,
    declared_type: Option<String>,
    default: Option<Value>,
}

impl ParameterDescriptor {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            default: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn typed(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type.into()),
            default: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
