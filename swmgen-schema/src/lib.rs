//! # swmgen Schema
//!
//! IDL type descriptors and the static tables the stub generator resolves
//! them against.
//!
//! This crate provides:
//! - The closed set of IDL type descriptors
//! - The type registry mapping each descriptor to its storage type,
//!   suffix token and printer format
//! - The exclusion set of entities that never get bindings
//! - Registry validation

pub mod error;
pub mod exclusion;
pub mod registry;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use exclusion::ExclusionFilter;
pub use registry::TypeRegistry;
pub use types::{PrinterFormat, RegistryEntry, TypeDescriptor};
pub use validation::validate_registry;
