//! YAML output of the document tree, through serde_yaml
//!
//! The tree goes through a `serde_json::Value` first so enum variants come out as plain
//! single-key mappings rather than YAML tags.

use super::registry::{FormatError, Formatter};
use crate::modl::ast::Document;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let value = serde_json::to_value(doc)
            .map_err(|err| FormatError::SerializationError(err.to_string()))?;
        serde_yaml::to_string(&value)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &'static str {
        "Document tree as YAML"
    }
}
