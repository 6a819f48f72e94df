//! AST traits - common interface for uniform node access

/// Uniform access to the information formatters need from any node
pub trait AstNode {
    /// The node kind, e.g. "Map" or "PlainString"
    fn node_type(&self) -> &'static str;

    /// A short one-line label for the node
    fn display_label(&self) -> String;
}
