//! Naming configuration.

/// Prefixes used when building generated identifiers.
///
/// The defaults reproduce the names the workload manager's C++ bindings
/// expect (`SwmQueue`, `SwmTupleStrStr`, `ei_buffer_to_str`, `wm_queue.h`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    record_prefix: String,
    tuple_prefix: String,
    decoder_prefix: String,
    eterm_converter_prefix: String,
    header_prefix: String,
}

impl NamingConfig {
    /// Creates a configuration with default prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            record_prefix: "Swm".to_string(),
            tuple_prefix: "SwmTuple".to_string(),
            decoder_prefix: "ei_buffer_to_".to_string(),
            eterm_converter_prefix: "eterm_to_".to_string(),
            header_prefix: "wm_".to_string(),
        }
    }

    /// Sets the prefix of record and entity class names.
    #[must_use]
    pub fn record_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.record_prefix = prefix.into();
        self
    }

    /// Sets the prefix of composite tuple struct names.
    #[must_use]
    pub fn tuple_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tuple_prefix = prefix.into();
        self
    }

    /// Sets the prefix of decoder function names.
    #[must_use]
    pub fn decoder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.decoder_prefix = prefix.into();
        self
    }

    /// Sets the prefix of term converter function names.
    #[must_use]
    pub fn eterm_converter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.eterm_converter_prefix = prefix.into();
        self
    }

    /// Sets the prefix of generated header file names.
    #[must_use]
    pub fn header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_prefix = prefix.into();
        self
    }

    /// Returns the record class prefix.
    #[must_use]
    pub fn record(&self) -> &str {
        &self.record_prefix
    }

    /// Returns the tuple struct prefix.
    #[must_use]
    pub fn tuple(&self) -> &str {
        &self.tuple_prefix
    }

    /// Returns the decoder function prefix.
    #[must_use]
    pub fn decoder(&self) -> &str {
        &self.decoder_prefix
    }

    /// Returns the term converter prefix.
    #[must_use]
    pub fn eterm_converter(&self) -> &str {
        &self.eterm_converter_prefix
    }

    /// Returns the header file prefix.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header_prefix
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::new()
    }
}
