//! Format registry for document serialization
//!
//! Each output format implements [Formatter] and is looked up by name in a [FormatRegistry].

use super::{JsonFormatter, TreevizFormatter, YamlFormatter};
use crate::modl::ast::Document;
use std::collections::BTreeMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under the requested name
    UnknownFormat {
        name: String,
        available: Vec<&'static str>,
    },
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "Unknown format '{}' (available: {})",
                name,
                available.join(", ")
            ),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// A named way of rendering a [Document] as text
pub trait Formatter: Send + Sync {
    /// The name the format is selected by, e.g. `--format treeviz`
    fn name(&self) -> &'static str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &'static str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in formats, with treeviz rendered by `treeviz`
    pub fn with_treeviz(treeviz: TreevizFormatter) -> Self {
        let mut registry = Self::new();
        registry.register(treeviz);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    /// Built-in formats with default treeviz settings
    pub fn with_defaults() -> Self {
        Self::with_treeviz(TreevizFormatter::default())
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters.insert(formatter.name(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Render a document in the named format
    pub fn render(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(doc),
            None => Err(FormatError::UnknownFormat {
                name: format.to_string(),
                available: self.formatters.keys().copied().collect(),
            }),
        }
    }

    /// `(name, description)` of every registered format, in name order
    pub fn formats(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .values()
            .map(|formatter| (formatter.name(), formatter.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modl::ast::Primitive;

    struct UpperFormatter;
    impl Formatter for UpperFormatter {
        fn name(&self) -> &'static str {
            "upper"
        }
        fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
            Ok(doc.primitive().map(|p| p.to_string().to_uppercase()).unwrap_or_default())
        }
    }

    #[test]
    fn test_register_and_render() {
        let mut registry = FormatRegistry::new();
        assert!(registry.get("upper").is_none());
        registry.register(UpperFormatter);

        let doc = Document::from_primitive(Primitive::PlainString("shout".into()));
        assert_eq!(registry.render(&doc, "upper").unwrap(), "SHOUT");
        assert_eq!(registry.get("upper").map(|f| f.description()), Some(""));
    }

    #[test]
    fn test_unknown_format_lists_available() {
        let registry = FormatRegistry::with_defaults();
        let doc = Document::from_structures(vec![]);
        let err = registry.render(&doc, "xml").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnknownFormat {
                name: "xml".to_string(),
                available: vec!["json", "treeviz", "yaml"],
            }
        );
        assert_eq!(
            err.to_string(),
            "Unknown format 'xml' (available: json, treeviz, yaml)"
        );
    }

    #[test]
    fn test_with_treeviz_replaces_default_settings() {
        let treeviz = TreevizFormatter {
            label_width: 2,
            show_node_types: true,
        };
        let registry = FormatRegistry::with_treeviz(treeviz);
        let doc = Document::from_primitive(Primitive::PlainString("abc".into()));
        assert_eq!(
            registry.render(&doc, "treeviz").unwrap(),
            "⧉ Document: primitive\n└─ ◦ PlainString: ab...\n"
        );
        let names: Vec<_> = registry.formats().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["json", "treeviz", "yaml"]);
    }
}
