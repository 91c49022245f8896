//! Shared configuration loader for the ttyvid utilities.
//!
//! `defaults/tools.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Binaries layer user-specific files and CLI flags on top
//! of those defaults via [`Loader`] before deserializing into [`ToolsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/tools.default.toml");

/// Top-level configuration consumed by the binaries.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    pub migrate: MigrationConfig,
    pub transparency: TransparencyConfig,
    pub blobs: BlobsConfig,
}

/// Where `migrate-themes` reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MigrationConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Input extension, without the leading dot
    pub extension: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TransparencyConfig {
    pub threshold: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BlobsConfig {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    pub frame_delay_ms: u64,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply an override only when a value is present.
    pub fn set_override_option<I>(self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ToolsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
