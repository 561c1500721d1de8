//! Configuration loading.
//!
//! `defaults/bible-rope.default.toml` is embedded into the binary so the
//! documented defaults and runtime behavior stay in sync. The CLI layers a user
//! file and flag overrides on top of those defaults via [`Loader`] before
//! deserializing into [`Settings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::rope::building::ParseFailurePolicy;

const DEFAULT_TOML: &str = include_str!("../../defaults/bible-rope.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sources: SourcesSettings,
    pub loading: LoadingSettings,
    pub network: NetworkSettings,
    pub logging: LoggingSettings,
}

/// Where translations come from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesSettings {
    pub index_url: String,
    /// Local files, loaded instead of the index when non-empty.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadingSettings {
    pub on_parse_error: ParseFailurePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSettings {
    pub timeout_secs: u64,
}

impl NetworkSettings {
    /// `None` when the timeout is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub level: String,
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

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}
