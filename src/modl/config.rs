//! Configuration for the modl tooling
//!
//! `defaults/modl.default.toml` is embedded into the crate so the documented defaults and the
//! runtime behavior stay in sync. Callers layer their own files and overrides on top through
//! [Loader] before deserializing into [ModlConfig].

use crate::modl::formats::TreevizFormatter;
use crate::modl::parsing::ParserLimits;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/modl.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ModlConfig {
    pub inspect: InspectConfig,
    pub treeviz: TreevizConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    /// Name of the output format used when none is requested
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub label_width: usize,
    pub show_node_types: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_nesting_depth: usize,
}

impl From<&TreevizConfig> for TreevizFormatter {
    fn from(config: &TreevizConfig) -> Self {
        TreevizFormatter {
            label_width: config.label_width,
            show_node_types: config.show_node_types,
        }
    }
}

impl From<&LimitsConfig> for ParserLimits {
    fn from(config: &LimitsConfig) -> Self {
        ParserLimits::new(config.max_nesting_depth)
    }
}

/// Builds a [ModlConfig] from the embedded defaults plus any number of layers.
///
/// Later layers win: files are applied in the order they were added and overrides beat every
/// file.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it when absent (e.g. `modl.toml` in the working directory)
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Override one dotted key, e.g. `inspect.format` from `--format`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ModlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ModlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modl::parsing::DEFAULT_MAX_NESTING_DEPTH;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.inspect.format, "treeviz");
        assert_eq!(config.treeviz.label_width, 30);
        assert!(!config.treeviz.show_node_types);
        assert_eq!(config.limits.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
        assert_eq!(
            TreevizFormatter::from(&config.treeviz),
            TreevizFormatter::default()
        );
        assert_eq!(ParserLimits::from(&config.limits), ParserLimits::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("inspect.format", "json")
            .expect("override to apply")
            .set_override("limits.max_nesting_depth", 8_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, "json");
        assert_eq!(config.limits.max_nesting_depth, 8);
    }

    #[test]
    fn layers_user_file() {
        let path = std::env::temp_dir().join(format!("modl-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(file, "[treeviz]\nshow_node_types = true").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        std::fs::remove_file(&path).ok();

        assert!(config.treeviz.show_node_types);
        assert_eq!(config.treeviz.label_width, 30);
    }

    #[test]
    fn overrides_beat_files() {
        let path = std::env::temp_dir().join(format!("modl-override-{}.toml", std::process::id()));
        std::fs::write(&path, "[inspect]\nformat = \"yaml\"\n").expect("write config");

        let config = Loader::new()
            .with_optional_file(&path)
            .set_override("inspect.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.inspect.format, "json");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/modl.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, "treeviz");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/modl.toml")
            .build()
            .is_err());
    }
}
