//! The two recursive sums of the grammar
//!
//! [Structure] is what the top level of a document may hold. [Value] is what a pair, a map or
//! an array may hold: any structure, or a primitive.

use super::super::traits::AstNode;
use super::{Array, Map, Pair, Primitive};
use serde::Serialize;

/// A map, an array or a pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Structure {
    Map(Map),
    Array(Array),
    Pair(Pair),
}

/// Any node that can be bound to a key or held by a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Map(Map),
    Array(Array),
    Pair(Pair),
    Primitive(Primitive),
}

impl Value {
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Value::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    /// Narrow to a structure; primitives have no structure form
    pub fn into_structure(self) -> Option<Structure> {
        match self {
            Value::Map(map) => Some(Structure::Map(map)),
            Value::Array(array) => Some(Structure::Array(array)),
            Value::Pair(pair) => Some(Structure::Pair(pair)),
            Value::Primitive(_) => None,
        }
    }

    pub fn into_pair(self) -> Option<Pair> {
        match self {
            Value::Pair(pair) => Some(pair),
            _ => None,
        }
    }
}

impl Structure {
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Structure::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Structure::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Structure::Pair(pair) => Some(pair),
            _ => None,
        }
    }
}

impl From<Structure> for Value {
    fn from(structure: Structure) -> Self {
        match structure {
            Structure::Map(map) => Value::Map(map),
            Structure::Array(array) => Value::Array(array),
            Structure::Pair(pair) => Value::Pair(pair),
        }
    }
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        Value::Primitive(primitive)
    }
}

impl AstNode for Value {
    fn node_type(&self) -> &'static str {
        match self {
            Value::Map(map) => map.node_type(),
            Value::Array(array) => array.node_type(),
            Value::Pair(pair) => pair.node_type(),
            Value::Primitive(primitive) => primitive.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Value::Map(map) => map.display_label(),
            Value::Array(array) => array.display_label(),
            Value::Pair(pair) => pair.display_label(),
            Value::Primitive(primitive) => primitive.display_label(),
        }
    }
}
