//! Error types for descriptor lookup and registry validation.

use thiserror::Error;

/// Error type for type registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Descriptor has no registry entry.
    #[error("unknown type descriptor '{descriptor}'")]
    UnknownType {
        /// Descriptor as given by the caller.
        descriptor: String,
    },

    /// Registry consistency failure.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates an unknown type error.
    pub fn unknown_type(descriptor: impl Into<String>) -> Self {
        Self::UnknownType {
            descriptor: descriptor.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
