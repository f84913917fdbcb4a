//! Tuple name resolution.
//!
//! A tuple signature is named twice: once by its *kind*, a short fragment
//! selecting the tuple decoder, and once by its composite struct identifier.
//! Both are consumed by generated code, so both are kept.

use crate::config::NamingConfig;
use crate::error::CodegenError;
use crate::naming::capitalize_words;
use swmgen_schema::{TypeDescriptor, TypeRegistry};

/// Both names derived from one tuple signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleName {
    /// Tuple-kind fragment, possibly empty (e.g. `_atom_str`).
    pub kind: String,
    /// Composite struct identifier (e.g. `SwmTupleAtomStr`).
    pub identifier: String,
}

/// Resolver for tuple kinds and composite tuple identifiers.
#[derive(Debug, Clone, Default)]
pub struct TupleNameResolver {
    config: NamingConfig,
}

impl TupleNameResolver {
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

    /// Derives both the kind fragment and the struct identifier.
    ///
    /// # Errors
    /// Returns `CodegenError` if the signature is empty or has a blank field.
    pub fn resolve<S: AsRef<str>>(&self, signature: &[S]) -> Result<TupleName, CodegenError> {
        Ok(TupleName {
            kind: self.kind(signature)?,
            identifier: self.struct_name(signature)?,
        })
    }

    /// Derives the tuple-kind fragment.
    ///
    /// Only `atom()`, `string()` and `any()` contribute (`_atom`, `_str`,
    /// `_eterm`), in field order. Every other descriptor is skipped.
    ///
    /// # Errors
    /// Returns `CodegenError` if the signature is empty or has a blank field.
    pub fn kind<S: AsRef<str>>(&self, signature: &[S]) -> Result<String, CodegenError> {
        let fields = fields(signature)?;
        let mut kind = String::new();

        for field in fields {
            match TypeDescriptor::parse(field) {
                Some(TypeDescriptor::Atom) => kind.push_str("_atom"),
                Some(TypeDescriptor::String) => kind.push_str("_str"),
                Some(TypeDescriptor::Any) => kind.push_str("_eterm"),
                _ => tracing::trace!("Descriptor {} does not contribute to tuple kind", field),
            }
        }

        Ok(kind)
    }

    /// Derives the composite struct identifier.
    ///
    /// Each field contributes its word-capitalized suffix token, or its raw
    /// text when the descriptor is not registered. Tokens of a single
    /// character are dropped.
    ///
    /// # Errors
    /// Returns `CodegenError` if the signature is empty or has a blank field.
    pub fn struct_name<S: AsRef<str>>(&self, signature: &[S]) -> Result<String, CodegenError> {
        let fields = fields(signature)?;
        let mut name = self.config.tuple().to_string();

        for field in fields {
            let token = TypeRegistry::suffix(field).unwrap_or_else(|| {
                tracing::warn!("No suffix registered for {}, using it verbatim", field);
                field
            });
            let token = capitalize_words(token);
            if token.chars().count() > 1 {
                name.push_str(&token);
            }
        }

        Ok(name)
    }
}

/// Trims every field and rejects empty signatures and blank fields.
fn fields<S: AsRef<str>>(signature: &[S]) -> Result<Vec<&str>, CodegenError> {
    if signature.is_empty() {
        return Err(CodegenError::EmptyTupleSignature);
    }

    signature
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let field = field.as_ref().trim();
            if field.is_empty() {
                Err(CodegenError::BlankDescriptor { position })
            } else {
                Ok(field)
            }
        })
        .collect()
}
