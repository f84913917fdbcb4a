//! Error types for name resolution.

use thiserror::Error;

/// Error type for name resolution operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Registry lookup error.
    #[error("schema error: {0}")]
    Schema(#[from] swmgen_schema::SchemaError),

    /// Tuple signature without fields.
    #[error("tuple signature has no fields")]
    EmptyTupleSignature,

    /// Blank descriptor inside a tuple signature.
    #[error("blank descriptor at position {position} in tuple signature")]
    BlankDescriptor {
        /// Zero-based field position.
        position: usize,
    },

    /// Record token that cannot produce an identifier.
    #[error("invalid record token '{token}': {reason}")]
    InvalidRecordToken {
        /// Token as given by the caller.
        token: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Field without a name.
    #[error("field name is blank")]
    BlankFieldName,

    /// Field declared twice in the same entity.
    #[error("duplicate field '{field}' in entity '{entity}'")]
    DuplicateField {
        /// Entity name.
        entity: String,
        /// Field name.
        field: String,
    },

    /// Entity in the exclusion set.
    #[error("entity '{name}' is excluded from generation")]
    ExcludedEntity {
        /// Entity name.
        name: String,
    },
}

impl CodegenError {
    /// Creates an invalid record token error.
    pub fn invalid_record(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecordToken {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
