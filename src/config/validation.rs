//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the catalog source exists and the basename is usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("catalog.basename must not be empty")]
    EmptyBasename,

    #[error("catalog.basename '{0}' must be a file name, not a path")]
    BasenameIsPath(String),

    #[error("catalog.dir {} does not exist or is not a directory", .0.display())]
    MissingCatalogDir(PathBuf),
}

/// Check `config` for problems serde cannot catch.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let catalog = &config.catalog;

    let basename = catalog.basename.trim();
    if basename.is_empty() {
        errors.push(ValidationError::EmptyBasename);
    } else if basename.contains(['/', '\\']) {
        errors.push(ValidationError::BasenameIsPath(catalog.basename.clone()));
    }

    if let Some(dir) = &catalog.dir {
        if !dir.is_dir() {
            errors.push(ValidationError::MissingCatalogDir(dir.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
