//! Entity and field bindings.
//!
//! An entity becomes one generated class (`SwmQueue` in `wm_queue.h`) whose
//! fields are decoded one by one with type-specific decoder calls
//! (`ei_buffer_to_uint64_t`, `ei_buffer_to_str`, ...) and exposed through
//! `get_`/`set_` accessors. This module resolves every name and type such a
//! class needs; rendering the class text is up to the caller.

use crate::config::NamingConfig;
use crate::error::CodegenError;
use crate::record::RecordNameResolver;
use crate::tuple::TupleNameResolver;
use std::collections::HashSet;
use swmgen_schema::{ExclusionFilter, PrinterFormat, TypeRegistry};

/// Already-tokenized type of an entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Single registered descriptor, e.g. `job_id()`.
    Scalar(String),
    /// List of another shape, e.g. `[node_id()]`.
    List(Box<FieldShape>),
    /// Tuple signature, e.g. `{atom(), string()}`.
    Tuple(Vec<String>),
    /// Record reference token, e.g. `#resource{}`.
    Record(String),
}

impl FieldShape {
    /// Creates a scalar shape.
    pub fn scalar(descriptor: impl Into<String>) -> Self {
        Self::Scalar(descriptor.into())
    }

    /// Creates a list shape.
    #[must_use]
    pub fn list(inner: FieldShape) -> Self {
        Self::List(Box::new(inner))
    }

    /// Creates a tuple shape.
    pub fn tuple<I, S>(signature: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tuple(signature.into_iter().map(Into::into).collect())
    }

    /// Creates a record shape.
    pub fn record(token: impl Into<String>) -> Self {
        Self::Record(token.into())
    }

    /// Returns the record token this shape refers to, looking through lists.
    #[must_use]
    pub fn record_token(&self) -> Option<&str> {
        match self {
            Self::Record(token) => Some(token.as_str()),
            Self::List(inner) => inner.record_token(),
            Self::Scalar(_) | Self::Tuple(_) => None,
        }
    }
}

/// Resolved names and types of one entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Field name.
    pub name: String,
    /// Target-language storage type.
    pub storage: String,
    /// Decoder function name.
    pub decoder: String,
    /// Printer format.
    pub printer: PrinterFormat,
    /// Getter method name.
    pub getter: String,
    /// Setter method name.
    pub setter: String,
    /// Whether the field holds a list.
    pub is_list: bool,
}

/// Resolved names of one entity class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityBinding {
    /// Entity name.
    pub name: String,
    /// Generated class name.
    pub class_name: String,
    /// Generated header file name.
    pub header: String,
    /// Decoder of a list of entities.
    pub list_decoder: String,
    /// Converter from a single external term.
    pub eterm_converter: String,
    /// Headers of the records referenced by fields, first use first.
    pub includes: Vec<String>,
    /// Field bindings in declaration order.
    pub fields: Vec<FieldBinding>,
}

/// Storage type, decoder and printer of a shape.
struct ShapeTypes {
    storage: String,
    decoder: String,
    printer: PrinterFormat,
}

/// Resolver for entity and field bindings.
#[derive(Debug, Clone, Default)]
pub struct BindingResolver {
    config: NamingConfig,
    tuples: TupleNameResolver,
    records: RecordNameResolver,
}

impl BindingResolver {
    /// Creates a resolver with the default naming configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given naming configuration.
    #[must_use]
    pub fn with_config(config: NamingConfig) -> Self {
        Self {
            tuples: TupleNameResolver::with_config(config.clone()),
            records: RecordNameResolver::with_config(config.clone()),
            config,
        }
    }

    /// Resolves an entity and all of its fields.
    ///
    /// # Errors
    /// Returns `CodegenError::ExcludedEntity` for entities in the exclusion
    /// set, `CodegenError::DuplicateField` for repeated field names, and any
    /// error raised while resolving the name or a field.
    pub fn entity<S: AsRef<str>>(
        &self,
        name: &str,
        fields: &[(S, FieldShape)],
    ) -> Result<EntityBinding, CodegenError> {
        let record = self.records.resolve(name)?;
        if ExclusionFilter::is_excluded(&record.name) {
            return Err(CodegenError::ExcludedEntity { name: record.name });
        }

        let mut seen = HashSet::new();
        let mut bindings = Vec::with_capacity(fields.len());
        let mut includes = Vec::new();
        for (field_name, shape) in fields {
            let binding = self.field(field_name.as_ref(), shape)?;
            if !seen.insert(binding.name.clone()) {
                return Err(CodegenError::DuplicateField {
                    entity: record.name,
                    field: binding.name,
                });
            }
            if let Some(token) = shape.record_token() {
                let header = self.header(&self.records.resolve(token)?.name);
                if !includes.contains(&header) {
                    includes.push(header);
                }
            }
            bindings.push(binding);
        }

        tracing::debug!(
            "Resolved entity {} as {} with {} fields",
            record.name,
            record.identifier,
            bindings.len()
        );

        Ok(EntityBinding {
            class_name: record.identifier,
            header: self.header(&record.name),
            list_decoder: format!("{}{}", self.config.decoder(), record.name),
            eterm_converter: format!("{}{}", self.config.eterm_converter(), record.name),
            includes,
            name: record.name,
            fields: bindings,
        })
    }

    /// Resolves a single field.
    ///
    /// # Errors
    /// Returns `CodegenError::BlankFieldName` for blank names,
    /// `CodegenError::Schema` for unregistered scalar descriptors, and any
    /// tuple or record resolution error.
    pub fn field(&self, name: &str, shape: &FieldShape) -> Result<FieldBinding, CodegenError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CodegenError::BlankFieldName);
        }

        let types = self.shape_types(shape)?;

        Ok(FieldBinding {
            name: name.to_string(),
            storage: types.storage,
            decoder: types.decoder,
            printer: types.printer,
            getter: format!("get_{name}"),
            setter: format!("set_{name}"),
            is_list: matches!(shape, FieldShape::List(_)),
        })
    }

    fn header(&self, name: &str) -> String {
        format!("{}{name}.h", self.config.header())
    }

    fn shape_types(&self, shape: &FieldShape) -> Result<ShapeTypes, CodegenError> {
        let decoder = self.config.decoder();

        match shape {
            FieldShape::Scalar(descriptor) => {
                let entry = TypeRegistry::lookup(descriptor)?;
                Ok(ShapeTypes {
                    storage: entry.storage.to_string(),
                    decoder: format!("{decoder}{}", entry.suffix),
                    printer: entry.printer,
                })
            }
            FieldShape::List(inner) => {
                let inner = self.shape_types(inner)?;
                Ok(ShapeTypes {
                    storage: format!("std::vector<{}>", inner.storage),
                    decoder: inner.decoder,
                    printer: PrinterFormat::Eterm,
                })
            }
            FieldShape::Tuple(signature) => {
                let tuple = self.tuples.resolve(signature)?;
                Ok(ShapeTypes {
                    storage: tuple.identifier,
                    decoder: format!("{decoder}tuple{}", tuple.kind),
                    printer: PrinterFormat::Eterm,
                })
            }
            FieldShape::Record(token) => {
                let record = self.records.resolve(token)?;
                Ok(ShapeTypes {
                    storage: record.identifier,
                    decoder: format!("{decoder}{}", record.name),
                    printer: PrinterFormat::Eterm,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swmgen_schema::SchemaError;

    fn queue_fields() -> Vec<(&'static str, FieldShape)> {
        vec![
            ("id", FieldShape::scalar("pos_integer()")),
            ("name", FieldShape::scalar("string()")),
            ("state", FieldShape::scalar("atom()")),
            ("jobs", FieldShape::list(FieldShape::scalar("job_id()"))),
            ("nodes", FieldShape::list(FieldShape::scalar("node_id()"))),
            ("priority", FieldShape::scalar("integer()")),
            ("comment", FieldShape::scalar("string()")),
            ("revision", FieldShape::scalar("pos_integer()")),
        ]
    }

    #[test]
    fn test_queue_entity() {
        let resolver = BindingResolver::new();
        let entity = resolver.entity("queue", &queue_fields()).unwrap();

        assert_eq!(entity.name, "queue");
        assert_eq!(entity.class_name, "SwmQueue");
        assert_eq!(entity.header, "wm_queue.h");
        assert_eq!(entity.list_decoder, "ei_buffer_to_queue");
        assert_eq!(entity.eterm_converter, "eterm_to_queue");
        assert_eq!(entity.fields.len(), 8);

        let id = &entity.fields[0];
        assert_eq!(id.storage, "uint64_t");
        assert_eq!(id.decoder, "ei_buffer_to_uint64_t");
        assert_eq!(id.getter, "get_id");
        assert_eq!(id.setter, "set_id");
        assert_eq!(id.printer.as_str(), "%ld");

        let state = &entity.fields[2];
        assert_eq!(state.storage, "std::string");
        assert_eq!(state.decoder, "ei_buffer_to_atom");

        let jobs = &entity.fields[3];
        assert_eq!(jobs.storage, "std::vector<std::string>");
        assert_eq!(jobs.decoder, "ei_buffer_to_str");
        assert!(jobs.is_list);
        assert!(jobs.printer.is_eterm());

        let priority = &entity.fields[5];
        assert_eq!(priority.storage, "int64_t");
        assert_eq!(priority.decoder, "ei_buffer_to_int64_t");
    }

    #[test]
    fn test_record_entity_name() {
        let resolver = BindingResolver::new();
        let entity = resolver.entity("#hook_record{}", &[] as &[(&str, FieldShape)]).unwrap();
        assert_eq!(entity.class_name, "SwmHookRecord");
        assert_eq!(entity.header, "wm_hook_record.h");
        assert!(entity.fields.is_empty());
    }

    #[test]
    fn test_tuple_field() {
        let resolver = BindingResolver::new();
        let field = resolver
            .field("resources", &FieldShape::list(FieldShape::tuple(["atom()", "string()"])))
            .unwrap();
        assert_eq!(field.storage, "std::vector<SwmTupleAtomStr>");
        assert_eq!(field.decoder, "ei_buffer_to_tuple_atom_str");
    }

    #[test]
    fn test_record_field() {
        let resolver = BindingResolver::new();
        let field = resolver
            .field("owner", &FieldShape::record("#user{}"))
            .unwrap();
        assert_eq!(field.storage, "SwmUser");
        assert_eq!(field.decoder, "ei_buffer_to_user");
        assert!(!field.is_list);
    }

    #[test]
    fn test_entity_includes_record_headers() {
        let resolver = BindingResolver::new();
        let fields = [
            ("id", FieldShape::scalar("grid_id()")),
            ("resources", FieldShape::list(FieldShape::record("#resource{}"))),
            ("pairs", FieldShape::list(FieldShape::tuple(["atom()", "any()"]))),
            ("executable", FieldShape::record("#executable{}")),
            ("spare", FieldShape::record("#resource{}")),
        ];
        let entity = resolver.entity("grid", &fields).unwrap();
        assert_eq!(entity.includes, vec!["wm_resource.h", "wm_executable.h"]);
        assert_eq!(entity.fields[1].storage, "std::vector<SwmResource>");
    }

    #[test]
    fn test_entity_without_records_has_no_includes() {
        let resolver = BindingResolver::new();
        let entity = resolver.entity("queue", &queue_fields()).unwrap();
        assert!(entity.includes.is_empty());
    }

    #[test]
    fn test_record_token() {
        assert_eq!(
            FieldShape::list(FieldShape::record("#user{}")).record_token(),
            Some("#user{}")
        );
        assert_eq!(FieldShape::scalar("atom()").record_token(), None);
        assert_eq!(FieldShape::tuple(["atom()"]).record_token(), None);
    }

    #[test]
    fn test_opaque_field() {
        let resolver = BindingResolver::new();
        let field = resolver.field("payload", &FieldShape::scalar("binary()")).unwrap();
        assert_eq!(field.storage, "ETERM*");
        assert_eq!(field.decoder, "ei_buffer_to_eterm");
        assert!(field.printer.is_eterm());
    }

    #[test]
    fn test_unknown_scalar() {
        let resolver = BindingResolver::new();
        let result = resolver.field("x", &FieldShape::scalar("no_such_type()"));
        assert_eq!(
            result,
            Err(CodegenError::Schema(SchemaError::unknown_type("no_such_type()")))
        );
    }

    #[test]
    fn test_excluded_entity() {
        let resolver = BindingResolver::new();
        for name in ["service", "#table{}", "test"] {
            let result = resolver.entity(name, &queue_fields());
            assert!(
                matches!(result, Err(CodegenError::ExcludedEntity { .. })),
                "{name} should be excluded"
            );
        }
        assert!(resolver.entity("Service", &queue_fields()).is_ok());
    }

    #[test]
    fn test_duplicate_field() {
        let resolver = BindingResolver::new();
        let fields = [
            ("id", FieldShape::scalar("integer()")),
            ("id", FieldShape::scalar("string()")),
        ];
        assert_eq!(
            resolver.entity("grid", &fields),
            Err(CodegenError::DuplicateField {
                entity: "grid".to_string(),
                field: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_field_name() {
        let resolver = BindingResolver::new();
        assert_eq!(
            resolver.field(" ", &FieldShape::scalar("atom()")),
            Err(CodegenError::BlankFieldName)
        );
    }

    #[test]
    fn test_custom_config() {
        let config = NamingConfig::new()
            .record_prefix("Wm")
            .decoder_prefix("decode_")
            .header_prefix("");
        let resolver = BindingResolver::with_config(config);
        let entity = resolver
            .entity("account", &[("id", FieldShape::scalar("account_id()"))])
            .unwrap();
        assert_eq!(entity.class_name, "WmAccount");
        assert_eq!(entity.header, "account.h");
        assert_eq!(entity.list_decoder, "decode_account");
        assert_eq!(entity.fields[0].decoder, "decode_str");
    }
}
