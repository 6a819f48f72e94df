//! Treeviz formatter
//!
//! One line per node, with the nesting drawn as box-drawing connectors:
//!
//! ```text
//! ⧉ 2 structures
//! ├─ ≔ a
//! │ └─ ◦ b
//! └─ ≔ c
//!   └─ ☰ 2 items
//!     ├─ # 1
//!     └─ # 2
//! ```
//!
//! Icons
//!     Document: ⧉
//!     Map: ⊞
//!     Array: ☰
//!     Pair: ≔
//!     Quoted: "
//!     PlainString: ◦
//!     Integer, Float: #
//!     BoolNull: ◇

use super::registry::{FormatError, Formatter};
use crate::modl::ast::{snapshot_from_document, AstSnapshot, Document};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Map" => "⊞",
        "Array" => "☰",
        "Pair" => "≔",
        "Quoted" => "\"",
        "PlainString" => "◦",
        "Integer" | "Float" => "#",
        "BoolNull" => "◇",
        _ => "○",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizFormatter {
    /// Labels longer than this many characters are cut and marked with "..."
    pub label_width: usize,
    /// Prefix each label with its node type
    pub show_node_types: bool,
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            show_node_types: false,
        }
    }
}

impl TreevizFormatter {
    /// Render the whole tree. Only node labels are truncated, not the document summary line.
    pub fn render(&self, doc: &Document) -> String {
        let snapshot = snapshot_from_document(doc);
        let mut output = format!(
            "{} {}\n",
            get_icon(&snapshot.node_type),
            self.label(&snapshot, snapshot.label.clone())
        );

        let child_count = snapshot.children.len();
        for (i, child) in snapshot.children.iter().enumerate() {
            self.format_snapshot(child, "", i + 1 == child_count, &mut output);
        }
        output
    }

    fn format_snapshot(
        &self,
        snapshot: &AstSnapshot,
        prefix: &str,
        is_last: bool,
        out: &mut String,
    ) {
        let connector = if is_last { "└─" } else { "├─" };
        out.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            get_icon(&snapshot.node_type),
            self.label(snapshot, truncate(&snapshot.label, self.label_width))
        ));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let child_count = snapshot.children.len();
        for (i, child) in snapshot.children.iter().enumerate() {
            self.format_snapshot(child, &child_prefix, i + 1 == child_count, out);
        }
    }

    /// Prefix `label` with the node type when enabled
    fn label(&self, snapshot: &AstSnapshot, label: String) -> String {
        if self.show_node_types {
            format!("{}: {}", snapshot.node_type, label)
        } else {
            label
        }
    }
}

/// Render a document with the default treeviz settings
pub fn to_treeviz_str(doc: &Document) -> String {
    TreevizFormatter::default().render(doc)
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.render(doc))
    }

    fn description(&self) -> &'static str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
