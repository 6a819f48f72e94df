//! Document model for parsed MODL
//!
//!     The tree produced by the parser. Every node kind is an enum variant, so consumers match
//!     exhaustively and a new node kind is a compile-time-checked change.
//!
//!     Nodes are built once, during a single parse, and never mutated afterward. They carry no
//!     source locations: `x(a=b)` and `x=(a=b)` produce equal trees.
//!
//! Node Kinds
//!
//!     - [Document]: the root, either one [Primitive] or a sequence of [Structure]s.
//!     - [Structure]: a [Map], an [Array] or a [Pair]; anything allowed at the top level.
//!     - [Value]: a structure or a primitive; anything allowed inside a collection or a pair.
//!     - [Primitive]: quoted string, plain string, integer, float, or true/false/null.
//!
//!     See [elements] for each node and [snapshot] for the normalized view used by formatters.

pub mod elements;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Array, BoolNull, Document, Key, Map, Pair, Primitive, Root, Structure, Value,
};
pub use snapshot::{snapshot_from_document, snapshot_from_value, AstSnapshot};
pub use traits::AstNode;
