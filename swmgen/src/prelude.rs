//! Prelude module for convenient imports.
//!
//! ```
//! use swmgen::prelude::*;
//! ```

// Schema types
pub use swmgen_schema::{
    ExclusionFilter, PrinterFormat, RegistryEntry, SchemaError, TypeDescriptor, TypeRegistry,
    validate_registry,
};

// Codegen types
pub use swmgen_codegen::{
    BindingResolver, CodegenError, EntityBinding, FieldBinding, FieldShape, NamingConfig,
    RecordName, RecordNameResolver, TupleName, TupleNameResolver, capitalize_words, pascal_words,
    resolve_entity,
};
