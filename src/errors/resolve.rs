use alloc::{string::String, vec::Vec};

use super::instantiate::InstantiateErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("{id} is not bound")]
    NotBound { id: String },
    #[error("Cannot resolve {target}: {cause}")]
    Resolution { target: String, cause: ResolutionCause },
    #[error("Cyclic dependency detected: {}", path.join(" -> "))]
    CyclicDependency { path: Vec<String> },
    #[error("Incorrect type resolved for {id}. Actual: {actual}, expected: {expected}")]
    IncorrectType {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl ResolveErrorKind {
    #[inline]
    #[must_use]
    pub const fn is_not_bound(&self) -> bool {
        matches!(self, Self::NotBound { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ResolutionCause {
    #[error("parameter `{parameter}` has no binding, no resolvable type and no default value")]
    UnresolvableParameter { parameter: String },
    #[error("type is unknown or abstract")]
    NotConstructible,
    #[error(transparent)]
    Instantiate(InstantiateErrorKind),
}
