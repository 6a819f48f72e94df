//! JSON output of the document tree, through serde_json

use super::registry::{FormatError, Formatter};
use crate::modl::ast::Document;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &'static str {
        "Document tree as JSON"
    }
}
