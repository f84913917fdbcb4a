//! # swmgen Codegen
//!
//! Name resolution for generated workload-manager bindings.
//!
//! This crate provides:
//! - Word capitalization used by every generated identifier
//! - Tuple kind fragments and composite tuple struct names
//! - Record and scalar alias classification
//! - Entity class and field binding names
//! - Configurable name prefixes

pub mod binding;
pub mod config;
pub mod error;
pub mod naming;
pub mod record;
pub mod tuple;

pub use binding::{BindingResolver, EntityBinding, FieldBinding, FieldShape};
pub use config::NamingConfig;
pub use error::CodegenError;
pub use naming::{capitalize_words, pascal_words};
pub use record::{RecordName, RecordNameResolver};
pub use tuple::{TupleName, TupleNameResolver};

/// Resolves an entity with the default naming configuration.
///
/// # Arguments
/// * `name` - Entity name or record token
/// * `fields` - Field names with their shapes, in declaration order
///
/// # Errors
/// Returns `CodegenError` if the entity is excluded or any name or field
/// cannot be resolved.
pub fn resolve_entity<S: AsRef<str>>(
    name: &str,
    fields: &[(S, FieldShape)],
) -> Result<EntityBinding, CodegenError> {
    BindingResolver::new().entity(name, fields)
}
