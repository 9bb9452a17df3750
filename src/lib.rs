#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod binding;
pub(crate) mod callable;
pub(crate) mod config;
pub(crate) mod constructor;
pub(crate) mod container;
pub(crate) mod errors;
pub(crate) mod introspect;
pub(crate) mod parameter;
pub(crate) mod registry;
pub(crate) mod resolver;
pub(crate) mod value;

pub use any::TypeInfo;
pub use binding::{Binding, Lifecycle, Source};
pub use callable::{Arguments, Callable};
pub use config::Config;
pub use constructor::Constructor;
pub use container::Container;
pub use errors::{InstantiateErrorKind, ResolutionCause, ResolveErrorKind};
pub use introspect::{Introspect, TypeCatalog, TypeDescriptor};
pub use parameter::ParameterDescriptor;
pub use registry::Registry;
pub use resolver::Resolver;
pub use value::Value;
