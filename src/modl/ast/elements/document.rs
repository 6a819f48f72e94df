//! Document element
//!
//! The root of a parsed MODL input. A document holds either exactly one primitive (`hello`,
//! `42`, `{text}`) or a sequence of structures separated by `;` (`a=b;c=d`, `()`). The two are
//! mutually exclusive; the sequence may be empty for empty input.

use super::super::traits::AstNode;
use super::{Primitive, Structure};
use serde::Serialize;

/// What the root of a document holds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Root {
    Primitive(Primitive),
    Structures(Vec<Structure>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    root: Root,
}

impl Document {
    pub fn from_primitive(primitive: Primitive) -> Self {
        Self {
            root: Root::Primitive(primitive),
        }
    }

    pub fn from_structures(structures: Vec<Structure>) -> Self {
        Self {
            root: Root::Structures(structures),
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn into_root(self) -> Root {
        self.root
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.root, Root::Primitive(_))
    }

    /// The root primitive, if the document is a single scalar
    pub fn primitive(&self) -> Option<&Primitive> {
        match &self.root {
            Root::Primitive(primitive) => Some(primitive),
            Root::Structures(_) => None,
        }
    }

    /// The top-level structures; empty when the root is a primitive
    pub fn structures(&self) -> &[Structure] {
        match &self.root {
            Root::Primitive(_) => &[],
            Root::Structures(structures) => structures,
        }
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        match &self.root {
            Root::Primitive(_) => "primitive".to_string(),
            Root::Structures(structures) if structures.len() == 1 => "1 structure".to_string(),
            Root::Structures(structures) => format!("{} structures", structures.len()),
        }
    }
}
