//! # modl
//!
//! A lexer and recursive-descent parser for MODL, a compact object notation built from maps
//! `( )`, arrays `[ ]`, pairs `key=value` and `;` separators.
//!
//! ```text
//! o(n=Example;c=GB;t=[1;2;3])
//! ```
//!
//! Start with [parse_document], or run the stages separately through
//! [lexing::tokenize](crate::modl::lexing::tokenize) and
//! [parsing::parse](crate::modl::parsing::parse).

pub mod modl;

pub use crate::modl::ast::{
    Array, BoolNull, Document, Key, Map, Pair, Primitive, Root, Structure, Value,
};
pub use crate::modl::error::Error;
pub use crate::modl::parsing::ParserLimits;
pub use crate::modl::{parse_document, parse_document_with_limits};
