//! AST Snapshot - a normalized intermediate representation of the document tree
//!
//! The snapshot captures node types, labels and children in one uniform shape so that every
//! formatter can focus on presentation instead of reimplementing the traversal. Build it with
//! [snapshot_from_document] or [snapshot_from_value].

use super::traits::AstNode;
use super::{Array, Document, Map, Pair, Root, Structure, Value};
use serde::Serialize;

/// A snapshot of a node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    /// The type of node (e.g. "Pair", "Map", "Integer")
    pub node_type: String,

    /// The key, literal text or size summary of the node
    pub label: String,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    fn of<T: AstNode>(node: &T) -> Self {
        Self::new(node.node_type().to_string(), node.display_label())
    }
}

pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    let children = match doc.root() {
        Root::Primitive(primitive) => vec![AstSnapshot::of(primitive)],
        Root::Structures(structures) => structures.iter().map(snapshot_structure).collect(),
    };
    AstSnapshot::of(doc).with_children(children)
}

fn snapshot_structure(structure: &Structure) -> AstSnapshot {
    match structure {
        Structure::Map(map) => snapshot_map(map),
        Structure::Array(array) => snapshot_array(array),
        Structure::Pair(pair) => snapshot_pair(pair),
    }
}

/// Snapshot a value and all of its descendants
pub fn snapshot_from_value(value: &Value) -> AstSnapshot {
    match value {
        Value::Map(map) => snapshot_map(map),
        Value::Array(array) => snapshot_array(array),
        Value::Pair(pair) => snapshot_pair(pair),
        Value::Primitive(primitive) => AstSnapshot::of(primitive),
    }
}

fn snapshot_map(map: &Map) -> AstSnapshot {
    AstSnapshot::of(map).with_children(map.entries().iter().map(snapshot_pair).collect())
}

fn snapshot_array(array: &Array) -> AstSnapshot {
    AstSnapshot::of(array).with_children(array.items().iter().map(snapshot_from_value).collect())
}

fn snapshot_pair(pair: &Pair) -> AstSnapshot {
    AstSnapshot::of(pair).with_children(vec![snapshot_from_value(pair.value())])
}
