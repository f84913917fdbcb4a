//! Registry validation utilities.
//!
//! Totality is guaranteed by the exhaustive registry `match`; these checks
//! cover the rest of the table's consistency so a bad edit is caught before
//! any binding is generated.

use crate::error::SchemaError;
use crate::exclusion::ExclusionFilter;
use crate::registry::TypeRegistry;
use crate::types::TypeDescriptor;
use std::collections::HashSet;

/// Validates the static registry and exclusion tables.
///
/// # Errors
/// Returns `SchemaError::Validation` describing the first inconsistency.
pub fn validate_registry() -> Result<(), SchemaError> {
    validate_descriptors()?;
    validate_entries()?;
    validate_exclusions()?;
    Ok(())
}

/// Every descriptor must be unique and round-trip through its token.
fn validate_descriptors() -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for descriptor in TypeDescriptor::ALL {
        let token = descriptor.as_str();
        if !seen.insert(token) {
            return Err(SchemaError::validation(format!(
                "Duplicate descriptor '{token}'"
            )));
        }
        if TypeDescriptor::parse(token) != Some(descriptor) {
            return Err(SchemaError::validation(format!(
                "Descriptor '{token}' does not parse back to {descriptor:?}"
            )));
        }
    }

    Ok(())
}

/// Every entry must carry a storage type, a suffix and a printer.
fn validate_entries() -> Result<(), SchemaError> {
    for (descriptor, entry) in TypeRegistry::descriptors() {
        if entry.storage.is_empty() {
            return Err(SchemaError::validation(format!(
                "Empty storage type for '{descriptor}'"
            )));
        }
        let valid_suffix = !entry.suffix.is_empty()
            && entry
                .suffix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_suffix {
            return Err(SchemaError::validation(format!(
                "Invalid suffix '{}' for '{descriptor}'",
                entry.suffix
            )));
        }
        if !entry.printer.is_eterm() && !entry.printer.as_str().starts_with('%') {
            return Err(SchemaError::validation(format!(
                "Invalid printer '{}' for '{descriptor}'",
                entry.printer
            )));
        }
    }

    Ok(())
}

/// Excluded names must be unique and non-empty.
fn validate_exclusions() -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for name in ExclusionFilter::names() {
        if name.is_empty() || !seen.insert(*name) {
            return Err(SchemaError::validation(format!(
                "Invalid or duplicate excluded entity '{name}'"
            )));
        }
    }

    Ok(())
}
