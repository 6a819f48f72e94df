//! Element-specific AST node definitions
//!
//!     Leaves are [primitive]s. [pair]s bind a key to a value, [map]s hold pairs, [array]s hold
//!     values of any kind, and [value] ties them together into the two recursive sums the
//!     grammar uses. The [document] is the root.

pub mod array;
pub mod document;
pub mod map;
pub mod pair;
pub mod primitive;
pub mod value;

pub use array::Array;
pub use document::{Document, Root};
pub use map::Map;
pub use pair::{Key, Pair};
pub use primitive::{BoolNull, Primitive};
pub use value::{Structure, Value};
