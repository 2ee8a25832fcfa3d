//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an empty file is a valid configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{self, CatalogError, Locale, MessageCatalog};
use crate::logger::Level;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Message catalog source and locale.
    pub catalog: CatalogConfig,

    /// Log output settings for the binary.
    pub logging: LoggingConfig,
}

/// Message catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding bundle files. `None` uses the compiled-in bundle.
    pub dir: Option<PathBuf>,

    /// Bundle basename, e.g. `ErrorMessages` for `ErrorMessages_en_US.toml`.
    pub basename: String,

    /// The single locale messages are resolved in.
    pub locale: Locale,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            basename: "ErrorMessages".to_string(),
            locale: Locale::default(),
        }
    }
}

impl CatalogConfig {
    /// Build the catalog this configuration describes.
    pub fn load_catalog(&self) -> Result<MessageCatalog, CatalogError> {
        match &self.dir {
            Some(dir) => catalog::load_bundle(dir, &self.basename, &self.locale),
            None => {
                if self.locale != Locale::default() {
                    tracing::warn!(
                        locale = %self.locale,
                        "No catalog directory configured; using the built-in en-US bundle"
                    );
                }
                MessageCatalog::builtin()
            }
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human readable (development).
    #[default]
    Pretty,
    /// Single-line, human readable.
    Compact,
    /// One JSON object per line (log aggregation).
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format '{0}' (expected pretty, compact or json)")]
pub struct ParseFormatError(pub String);

impl FromStr for LogFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error). `RUST_LOG` wins
    /// when set.
    pub level: Level,

    /// Output format.
    pub format: LogFormat,

    /// Include the event target (module path) in output.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}
