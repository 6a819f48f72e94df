//! Output formats for parsed documents
//!
//! - `treeviz`: indented tree with icons, for reading
//! - `json` and `yaml`: the serde representation of the document tree

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
