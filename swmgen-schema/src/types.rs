//! IDL type descriptor definitions.
//!
//! This module contains the closed set of type descriptors that may appear
//! in a stub specification, and the registry entry describing how each one
//! is stored, dispatched and printed in generated code.

use std::fmt;

/// IDL type descriptor.
///
/// Built-in IDL types come first, followed by the domain aliases declared
/// by the workload manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeDescriptor {
    /// `atom()`
    Atom,
    /// `any()`
    Any,
    /// `map()`
    Map,
    /// `string()`
    String,
    /// `binary()`
    Binary,
    /// `integer()`
    Integer,
    /// `pos_integer()`
    PosInteger,
    /// `float()`
    Float,
    /// `credential_id()`
    CredentialId,
    /// `remote_id()`
    RemoteId,
    /// `account_id()`
    AccountId,
    /// `session_id()`
    SessionId,
    /// `user_id()`
    UserId,
    /// `grid_id()`
    GridId,
    /// `cluster_id()`
    ClusterId,
    /// `partition_id()`
    PartitionId,
    /// `node_id()`
    NodeId,
    /// `job_id()`
    JobId,
    /// `image_id()`
    ImageId,
    /// `relocation_id()`
    RelocationId,
    /// `hook_id()`
    HookId,
}

impl TypeDescriptor {
    /// Every known descriptor, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Atom,
        Self::Any,
        Self::Map,
        Self::String,
        Self::Binary,
        Self::Integer,
        Self::PosInteger,
        Self::Float,
        Self::CredentialId,
        Self::RemoteId,
        Self::AccountId,
        Self::SessionId,
        Self::UserId,
        Self::GridId,
        Self::ClusterId,
        Self::PartitionId,
        Self::NodeId,
        Self::JobId,
        Self::ImageId,
        Self::RelocationId,
        Self::HookId,
    ];

    /// Returns the IDL token for this descriptor.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Atom => "atom()",
            Self::Any => "any()",
            Self::Map => "map()",
            Self::String => "string()",
            Self::Binary => "binary()",
            Self::Integer => "integer()",
            Self::PosInteger => "pos_integer()",
            Self::Float => "float()",
            Self::CredentialId => "credential_id()",
            Self::RemoteId => "remote_id()",
            Self::AccountId => "account_id()",
            Self::SessionId => "session_id()",
            Self::UserId => "user_id()",
            Self::GridId => "grid_id()",
            Self::ClusterId => "cluster_id()",
            Self::PartitionId => "partition_id()",
            Self::NodeId => "node_id()",
            Self::JobId => "job_id()",
            Self::ImageId => "image_id()",
            Self::RelocationId => "relocation_id()",
            Self::HookId => "hook_id()",
        }
    }

    /// Parses a descriptor from its IDL token.
    ///
    /// Matching is exact; callers trim surrounding whitespace beforehand.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "atom()" => Some(Self::Atom),
            "any()" => Some(Self::Any),
            "map()" => Some(Self::Map),
            "string()" => Some(Self::String),
            "binary()" => Some(Self::Binary),
            "integer()" => Some(Self::Integer),
            "pos_integer()" => Some(Self::PosInteger),
            "float()" => Some(Self::Float),
            "credential_id()" => Some(Self::CredentialId),
            "remote_id()" => Some(Self::RemoteId),
            "account_id()" => Some(Self::AccountId),
            "session_id()" => Some(Self::SessionId),
            "user_id()" => Some(Self::UserId),
            "grid_id()" => Some(Self::GridId),
            "cluster_id()" => Some(Self::ClusterId),
            "partition_id()" => Some(Self::PartitionId),
            "node_id()" => Some(Self::NodeId),
            "job_id()" => Some(Self::JobId),
            "image_id()" => Some(Self::ImageId),
            "relocation_id()" => Some(Self::RelocationId),
            "hook_id()" => Some(Self::HookId),
            _ => None,
        }
    }

    /// Returns true if this is a built-in IDL type rather than a domain alias.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Atom
                | Self::Any
                | Self::Map
                | Self::String
                | Self::Binary
                | Self::Integer
                | Self::PosInteger
                | Self::Float
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format used when printing a value of some type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrinterFormat {
    /// printf-style conversion such as `%s`, `%ld` or `%f`.
    Conversion(&'static str),
    /// Opaque external term, no primitive format exists.
    Eterm,
}

impl PrinterFormat {
    /// Sentinel text emitted for opaque terms.
    pub const ETERM: &'static str = "eterm";

    /// Returns the text embedded in generated code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conversion(spec) => *spec,
            Self::Eterm => Self::ETERM,
        }
    }

    /// Returns true if this is the opaque term sentinel.
    #[must_use]
    pub const fn is_eterm(&self) -> bool {
        matches!(self, Self::Eterm)
    }
}

impl fmt::Display for PrinterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry entry for a single descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryEntry {
    /// Target-language storage type.
    pub storage: &'static str,
    /// Suffix token used for naming and decoder dispatch.
    pub suffix: &'static str,
    /// Printer format.
    pub printer: PrinterFormat,
}

impl RegistryEntry {
    /// Creates a new registry entry.
    #[must_use]
    pub const fn new(
        storage: &'static str,
        suffix: &'static str,
        printer: PrinterFormat,
    ) -> Self {
        Self {
            storage,
            suffix,
            printer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_round_trip_all() {
        for descriptor in TypeDescriptor::ALL {
            assert_eq!(TypeDescriptor::parse(descriptor.as_str()), Some(descriptor));
        }
    }

    #[test]
    fn test_descriptor_parse_is_exact() {
        assert_eq!(TypeDescriptor::parse("job_id()"), Some(TypeDescriptor::JobId));
        assert_eq!(TypeDescriptor::parse("job_id"), None);
        assert_eq!(TypeDescriptor::parse(" job_id()"), None);
        assert_eq!(TypeDescriptor::parse("Job_id()"), None);
        assert_eq!(TypeDescriptor::parse(""), None);
    }

    #[test]
    fn test_descriptor_builtin() {
        assert!(TypeDescriptor::Float.is_builtin());
        assert!(TypeDescriptor::Map.is_builtin());
        assert!(!TypeDescriptor::NodeId.is_builtin());
        assert!(!TypeDescriptor::RelocationId.is_builtin());
    }

    #[test]
    fn test_descriptor_display() {
        assert_eq!(TypeDescriptor::PosInteger.to_string(), "pos_integer()");
    }

    #[test]
    fn test_printer_format_text() {
        assert_eq!(PrinterFormat::Conversion("%ld").as_str(), "%ld");
        assert_eq!(PrinterFormat::Eterm.as_str(), "eterm");
        assert!(PrinterFormat::Eterm.is_eterm());
        assert!(!PrinterFormat::Conversion("%s").is_eterm());
        assert_eq!(PrinterFormat::Conversion("%f").to_string(), "%f");
    }
}
