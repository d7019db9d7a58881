//! Configuration for module assembly.

use schemalect_core::utils::quote;

/// Configuration shared by every dialect.
///
/// Controls the type-inference helper imported by the generated module and
/// applied in its `Schema` type export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the inference helper type
    pub(crate) helper_name: String,
    /// Module specifier the helper is imported from
    pub(crate) helper_module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            helper_name: "InferSchema".to_string(),
            helper_module: "@/lib/schema".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inference helper type name.
    pub fn helper_name(mut self, value: impl Into<String>) -> Self {
        self.helper_name = value.into();
        self
    }

    /// Set the module the inference helper is imported from.
    pub fn helper_module(mut self, value: impl Into<String>) -> Self {
        self.helper_module = value.into();
        self
    }

    pub(crate) fn helper_import(&self) -> String {
        format!(
            "import type {{ {} }} from {};",
            self.helper_name,
            quote(&self.helper_module)
        )
    }

    pub(crate) fn schema_type(&self) -> String {
        format!("{}<typeof schema>", self.helper_name)
    }
}
