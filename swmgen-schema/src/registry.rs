//! Static type registry.
//!
//! Maps every [`TypeDescriptor`] to its storage type, suffix token and
//! printer format. The table is an exhaustive `match`, so adding a
//! descriptor without registering it fails to compile.

use crate::error::SchemaError;
use crate::types::{PrinterFormat, RegistryEntry, TypeDescriptor};

const STRING: &str = "std::string";
const ETERM: &str = "ETERM*";

const STR: PrinterFormat = PrinterFormat::Conversion("%s");
const LONG: PrinterFormat = PrinterFormat::Conversion("%ld");
const DOUBLE: PrinterFormat = PrinterFormat::Conversion("%f");

/// Read-only registry of IDL type descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeRegistry;

impl TypeRegistry {
    /// Returns the registry entry for a known descriptor.
    #[must_use]
    pub const fn entry(descriptor: TypeDescriptor) -> RegistryEntry {
        use TypeDescriptor as T;

        match descriptor {
            T::Atom => RegistryEntry::new(STRING, "atom", STR),
            T::Any | T::Map | T::Binary => {
                RegistryEntry::new(ETERM, "eterm", PrinterFormat::Eterm)
            }
            T::String => RegistryEntry::new(STRING, "str", STR),
            T::Integer => RegistryEntry::new("int64_t", "int64_t", LONG),
            T::PosInteger => RegistryEntry::new("uint64_t", "uint64_t", LONG),
            T::Float => RegistryEntry::new("double", "double", DOUBLE),
            T::RelocationId => RegistryEntry::new("std::uint64_t", "uint64_t", LONG),
            T::CredentialId
            | T::RemoteId
            | T::AccountId
            | T::SessionId
            | T::UserId
            | T::GridId
            | T::ClusterId
            | T::PartitionId
            | T::NodeId
            | T::JobId
            | T::ImageId
            | T::HookId => RegistryEntry::new(STRING, "str", STR),
        }
    }

    /// Looks up a descriptor by its IDL token.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` if the descriptor is not registered.
    pub fn lookup(descriptor: &str) -> Result<RegistryEntry, SchemaError> {
        TypeDescriptor::parse(descriptor.trim())
            .map(Self::entry)
            .ok_or_else(|| SchemaError::unknown_type(descriptor))
    }

    /// Returns the suffix token for a descriptor, if registered.
    #[must_use]
    pub fn suffix(descriptor: &str) -> Option<&'static str> {
        TypeDescriptor::parse(descriptor.trim()).map(|d| Self::entry(d).suffix)
    }

    /// Returns true if the descriptor is registered.
    #[must_use]
    pub fn contains(descriptor: &str) -> bool {
        TypeDescriptor::parse(descriptor.trim()).is_some()
    }

    /// Iterates over every registered descriptor with its entry.
    pub fn descriptors() -> impl Iterator<Item = (TypeDescriptor, RegistryEntry)> {
        TypeDescriptor::ALL.into_iter().map(|d| (d, Self::entry(d)))
    }
}
