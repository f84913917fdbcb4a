//! Record name resolution.

use crate::config::NamingConfig;
use crate::error::CodegenError;
use crate::naming::pascal_words;

/// Structural marker opening a record token.
const RECORD_MARKER: char = '#';

/// Empty field braces closing a record token.
const EMPTY_FIELDS: &str = "{}";

/// Canonical name of a record or scalar alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordName {
    /// Generated class identifier (e.g. `SwmJobRecord`).
    pub identifier: String,
    /// Token with structural markers removed (e.g. `job_record`).
    pub name: String,
    /// True if the token denoted a structured record.
    pub is_struct: bool,
}

/// Resolver classifying record tokens.
#[derive(Debug, Clone, Default)]
pub struct RecordNameResolver {
    config: NamingConfig,
}

impl RecordNameResolver {
    /// Creates a resolver with the default naming configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given naming configuration.
    #[must_use]
    pub fn with_config(config: NamingConfig) -> Self {
        Self { config }
    }

    /// Classifies a token and derives its canonical identifier.
    ///
    /// `#name{}` is a structured record named `name`; any other token is a
    /// scalar alias used verbatim.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidRecordToken` for blank tokens and for
    /// record markers with nothing left once the markers are stripped.
    pub fn resolve(&self, token: &str) -> Result<RecordName, CodegenError> {
        if token.trim().is_empty() {
            return Err(CodegenError::invalid_record(token, "blank token"));
        }

        let (name, is_struct) = match token.strip_prefix(RECORD_MARKER) {
            Some(rest) => (rest.replace(EMPTY_FIELDS, ""), true),
            None => (token.to_string(), false),
        };

        if name.trim().is_empty() {
            return Err(CodegenError::invalid_record(token, "empty record name"));
        }

        let identifier = format!("{}{}", self.config.record(), pascal_words(&name));
        tracing::debug!("Resolved record token {} as {}", token, identifier);

        Ok(RecordName {
            identifier,
            name,
            is_struct,
        })
    }
}
