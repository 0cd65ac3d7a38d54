//! Generator registry for datavary.
//!
//! Maps semantic type names (`integer`, `title`, ...) to categorized example
//! pools. A registry is assembled once at startup and read-only afterwards.

pub mod builtin;
pub mod entry;
pub mod errors;
pub mod registry;
pub mod value;

pub use builtin::base_data_types;
pub use entry::{GeneratorEntry, Label, LabeledValue};
pub use errors::{RegistryError, Result};
pub use registry::{Registry, RegistryBuilder};
pub use value::ExampleValue;
