//! Resource limits for parsing
//!
//! The parser recurses once per nested map or array, so unbounded nesting in hostile input
//! would exhaust the stack. The depth limit turns that into an ordinary [ParseError]. The
//! default stays well inside a 2 MiB thread stack in unoptimized builds.
//!
//! [ParseError]: super::ParseError

/// Default maximum nesting depth of maps and arrays
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Maximum number of maps and arrays open at the same time
    pub max_nesting_depth: usize,
}

impl ParserLimits {
    pub const fn new(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NESTING_DEPTH)
    }
}
