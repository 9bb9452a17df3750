use alloc::{format, string::String};

/// Config for a container
/// ## Fields
/// - `named_prefix`:
///   Prefix that turns a parameter name into the identifier of its named binding,
///   e.g. the parameter `count` is looked up as `$count` with the default prefix.
///
///   Named bindings are checked before the declared type of a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub named_prefix: char,
}

impl Default for Config {
    fn default() -> Self {
        Self { named_prefix: '$' }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn named_id(&self, parameter: &str) -> String {
        format!("{}{parameter}", self.named_prefix)
    }
}
