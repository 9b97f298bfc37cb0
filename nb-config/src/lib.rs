//! Shared configuration loader for the nb toolchain.
//!
//! `defaults/nb.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NbConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nb_convert::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/nb.default.toml");

/// Top-level configuration consumed by nb applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NbConfig {
    pub notebook: NotebookConfig,
    pub output: OutputConfig,
}

/// Language metadata applied when the document carries no language attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct NotebookConfig {
    pub language_name: String,
    pub language_version: String,
}

impl From<NotebookConfig> for ConvertOptions {
    fn from(config: NotebookConfig) -> Self {
        ConvertOptions {
            language_name: config.language_name,
            language_version: config.language_version,
        }
    }
}

impl From<&NotebookConfig> for ConvertOptions {
    fn from(config: &NotebookConfig) -> Self {
        ConvertOptions {
            language_name: config.language_name.clone(),
            language_version: config.language_version.clone(),
        }
    }
}

/// Serialization knobs for the emitted notebook.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NbConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NbConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.notebook.language_name, "python");
        assert_eq!(config.notebook.language_version, "3.9.1");
        assert!(!config.output.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("notebook.language_name", "cpp")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.notebook.language_name, "cpp");
        assert_eq!(config.notebook.language_version, "3.9.1");
    }

    #[test]
    fn notebook_config_converts_to_convert_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: ConvertOptions = (&config.notebook).into();
        assert_eq!(options, ConvertOptions::default());
    }
}
