//! # swmgen
//!
//! Type-descriptor resolution and naming engine for the workload manager's
//! stub generator.
//!
//! The generator hands over already-tokenized IDL types and record names;
//! this crate decides how each type is stored, which decoder handles it, how
//! it is printed, and what the generated classes and tuple structs are
//! called.
//!
//! ## Quick Start
//!
//! ```
//! use swmgen::prelude::*;
//!
//! let entry = TypeRegistry::lookup("job_id()")?;
//! assert_eq!(entry.storage, "std::string");
//!
//! let tuple = TupleNameResolver::new().resolve(&["job_id()", "integer()"])?;
//! assert_eq!(tuple.identifier, "SwmTupleStrInt64_T");
//!
//! let record = RecordNameResolver::new().resolve("#job_record{}")?;
//! assert_eq!(record.identifier, "SwmJobRecord");
//!
//! assert!(ExclusionFilter::is_excluded("service"));
//! # Ok::<(), swmgen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type descriptors, registry, exclusion set
//! - [`codegen`] - Tuple, record and entity name resolution

pub mod prelude;

/// Type descriptors, registry and exclusion set.
pub mod schema {
    pub use swmgen_schema::*;
}

/// Tuple, record and entity name resolution.
pub mod codegen {
    pub use swmgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use swmgen_codegen::{
    BindingResolver, CodegenError, NamingConfig, RecordNameResolver, TupleNameResolver,
    resolve_entity,
};
pub use swmgen_schema::{ExclusionFilter, SchemaError, TypeRegistry, validate_registry};
