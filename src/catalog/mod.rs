//! Message catalog subsystem.
//!
//! # Data Flow
//! ```text
//! bundle files (TOML, per locale)          compiled-in default bundle
//!     → loader.rs (read, parse, merge)         → MessageCatalog::builtin()
//!     → MessageCatalog (immutable)  ◀──────────┘
//!     → shared via Arc with every ErrorCodeLogger
//!
//! resolve(code)      → template, or the code itself on a miss
//! format(code, args) → "<code> - <formatted template>" on a hit,
//!                      "<formatted code>" on a miss
//! ```
//!
//! # Design Decisions
//! - A catalog miss is a degraded result, never an error
//! - The catalog is immutable once built; no reload
//! - One optional process-wide slot backs `error_message` and the global
//!   logger factory; everything else receives the catalog by `Arc`

pub mod format;
pub mod loader;
pub mod locale;

use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

pub use format::format_template;
pub use loader::load_bundle;
pub use locale::Locale;

/// Bundle compiled into the binary, used when nothing else is installed.
const BUILTIN_BUNDLE: &str = include_str!("../../catalog/ErrorMessages_en_US.toml");

/// Separator between the code and its resolved text.
pub const CODE_SEPARATOR: &str = " - ";

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog bundle {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog bundle {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no catalog bundle '{basename}' for locale {locale} in {}", .dir.display())]
    NotFound {
        dir: PathBuf,
        basename: String,
        locale: Locale,
    },

    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),

    #[error("a process-wide message catalog is already installed")]
    AlreadyInstalled,
}

/// Read-only mapping from error code to message template.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: Locale,
    entries: HashMap<String, String>,
}

/// Result of [`MessageCatalog::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage<'a> {
    /// Resolved template: the catalog entry, or the code on a miss.
    pub template: &'a str,
    /// Display text handed to the log facade.
    pub text: String,
    /// Whether the code had a catalog entry.
    pub found: bool,
}

impl MessageCatalog {
    /// An empty catalog; every code resolves to itself.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from code/template pairs.
    pub fn from_entries<I, K, V>(locale: Locale, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale,
            entries: entries
                .into_iter()
                .map(|(code, template)| (code.into(), template.into()))
                .collect(),
        }
    }

    /// The compiled-in `en-US` bundle.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = loader::parse_bundle(BUILTIN_BUNDLE).map_err(|source| CatalogError::Parse {
            path: PathBuf::from("catalog/ErrorMessages_en_US.toml"),
            source,
        })?;
        Ok(Self::from_entries(Locale::default(), entries))
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// The template for `code`, or `None` when the catalog has no entry.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// The template for `code`, falling back to `code` itself.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.lookup(code).unwrap_or(code)
    }

    /// Resolve `code` and substitute `args` into the result.
    pub fn format<'a>(&'a self, code: &'a str, args: &[&dyn Display]) -> FormattedMessage<'a> {
        match self.lookup(code) {
            Some(template) => FormattedMessage {
                template,
                text: format!("{code}{CODE_SEPARATOR}{}", format_template(template, args)),
                found: true,
            },
            None => FormattedMessage {
                template: code,
                text: format_template(code, args),
                found: false,
            },
        }
    }

    /// Display text for `code` with `args`.
    pub fn error_message(&self, code: &str, args: &[&dyn Display]) -> String {
        self.format(code, args).text
    }

    /// All codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// All entries, sorted by code.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(code, template)| (code.as_str(), template.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

static GLOBAL_CATALOG: OnceLock<Arc<MessageCatalog>> = OnceLock::new();

/// Install the process-wide catalog. Only the first install succeeds, and it
/// must happen before anything calls [`global`].
pub fn install(catalog: MessageCatalog) -> Result<Arc<MessageCatalog>, CatalogError> {
    let catalog = Arc::new(catalog);
    GLOBAL_CATALOG
        .set(catalog.clone())
        .map_err(|_| CatalogError::AlreadyInstalled)?;
    tracing::debug!(
        locale = %catalog.locale(),
        entries = catalog.len(),
        "Installed message catalog"
    );
    Ok(catalog)
}

/// The process-wide catalog, initializing it from the compiled-in bundle on
/// first use.
pub fn global() -> Arc<MessageCatalog> {
    GLOBAL_CATALOG
        .get_or_init(|| {
            let catalog = MessageCatalog::builtin().unwrap_or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Built-in message catalog is unusable; codes will not be resolved"
                );
                MessageCatalog::empty(Locale::default())
            });
            Arc::new(catalog)
        })
        .clone()
}

/// Display text for `code` against the process-wide catalog.
///
/// Usable without a logger, e.g. for user-facing error surfaces.
pub fn error_message(code: &str, args: &[&dyn Display]) -> String {
    global().error_message(code, args)
}
