//! Shared configuration loader for the mdbb toolchain.
//!
//! `defaults/mdbb.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdbbConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdbb_babel::CleanupRules;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdbb.default.toml");

/// Top-level configuration consumed by mdbb applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdbbConfig {
    pub convert: ConvertConfig,
    pub log: LogConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub cleanup: CleanupConfig,
}

/// Mirrors the switches exposed by the post-processor.
#[derive(Debug, Clone, Deserialize)]
pub struct CleanupConfig {
    pub merge_adjacent_quotes: bool,
    pub drop_empty_headers: bool,
    pub collapse_blank_lines: bool,
    pub trim_document: bool,
}

impl From<CleanupConfig> for CleanupRules {
    fn from(config: CleanupConfig) -> Self {
        CleanupRules::from(&config)
    }
}

impl From<&CleanupConfig> for CleanupRules {
    fn from(config: &CleanupConfig) -> Self {
        CleanupRules {
            merge_adjacent_quotes: config.merge_adjacent_quotes,
            drop_empty_headers: config.drop_empty_headers,
            collapse_blank_lines: config.collapse_blank_lines,
            trim_document: config.trim_document,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by tracing's `EnvFilter`.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
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
    pub fn build(self) -> Result<MdbbConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdbbConfig, ConfigError> {
    Loader::new().build()
}
