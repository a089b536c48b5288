//! Application settings.
//!
//! Layered with the `config` crate: compiled defaults, then an optional TOML
//! file, then `TRIPBUDGET__*` environment variables
//! (e.g. `TRIPBUDGET__LOGGING__LEVEL=debug`).

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::budget::{ReferenceTables, TablesError};

/// Environment variable naming a settings file.
pub const CONFIG_ENV_VAR: &str = "TRIPBUDGET_CONFIG";

/// Prefix for per-key environment overrides.
pub const ENV_PREFIX: &str = "TRIPBUDGET";

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings sources could not be read or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The reference tables were read but are not usable.
    #[error("invalid reference tables: {0}")]
    Tables(#[from] TablesError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub tables: ReferenceTables,
}

impl Settings {
    /// Defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `path` (or [`CONFIG_ENV_VAR`]) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = path.map(Path::to_path_buf).or_else(Self::path_from_env);

        let mut builder = config::Config::builder();
        if let Some(path) = &path {
            builder = builder.add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validated()
    }

    /// Settings file named by [`CONFIG_ENV_VAR`], if set and non-empty.
    pub fn path_from_env() -> Option<PathBuf> {
        env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Normalize and check the reference tables.
    pub fn validated(mut self) -> Result<Self, SettingsError> {
        self.tables = self.tables.validated()?;
        Ok(self)
    }

    /// Set the log level directive.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the log output format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Replace the reference tables.
    pub fn with_tables(mut self, tables: ReferenceTables) -> Self {
        self.tables = tables;
        self
    }
}
