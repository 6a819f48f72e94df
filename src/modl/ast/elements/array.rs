//! Array element
//!
//! An ordered, heterogeneous sequence of values, written `[1;two;(a=b)]`. Pairs are allowed as
//! elements.

use super::super::traits::AstNode;
use super::value::Value;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Array {
    pub items: Vec<Value>,
}

impl Array {
    pub fn new(items: Vec<Value>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }
}

impl AstNode for Array {
    fn node_type(&self) -> &'static str {
        "Array"
    }

    fn display_label(&self) -> String {
        match self.items.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}
