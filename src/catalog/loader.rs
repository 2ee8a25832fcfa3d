//! Catalog bundle loading from disk.
//!
//! A bundle is a flat TOML table of `"CODE" = "template"` strings. For a
//! basename `ErrorMessages` and locale `en-US` the loader reads, when present:
//!
//! ```text
//! ErrorMessages.toml          (base)
//! ErrorMessages_en.toml       (language)
//! ErrorMessages_en_US.toml    (language + region)
//! ```
//!
//! More specific files override entries of more general ones.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogError, Locale, MessageCatalog};

/// Bundle file extension.
pub const BUNDLE_EXTENSION: &str = "toml";

/// Parse the text of one bundle file.
pub fn parse_bundle(text: &str) -> Result<HashMap<String, String>, toml::de::Error> {
    toml::from_str(text)
}

/// Candidate bundle paths for `locale`, most general first.
pub fn bundle_paths(dir: &Path, basename: &str, locale: &Locale) -> Vec<PathBuf> {
    locale
        .bundle_suffixes()
        .into_iter()
        .rev()
        .map(|suffix| dir.join(format!("{basename}{suffix}.{BUNDLE_EXTENSION}")))
        .collect()
}

/// Load a single bundle file.
pub fn load_bundle_file(path: &Path) -> Result<HashMap<String, String>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bundle(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and merge every bundle file for `locale` found in `dir`.
pub fn load_bundle(
    dir: &Path,
    basename: &str,
    locale: &Locale,
) -> Result<MessageCatalog, CatalogError> {
    let mut entries = HashMap::new();
    let mut loaded = 0usize;

    for path in bundle_paths(dir, basename, locale) {
        if !path.is_file() {
            continue;
        }
        let bundle = load_bundle_file(&path)?;
        tracing::debug!(path = %path.display(), entries = bundle.len(), "Loaded catalog bundle");
        entries.extend(bundle);
        loaded += 1;
    }

    if loaded == 0 {
        return Err(CatalogError::NotFound {
            dir: dir.to_path_buf(),
            basename: basename.to_string(),
            locale: locale.clone(),
        });
    }

    tracing::info!(
        locale = %locale,
        files = loaded,
        entries = entries.len(),
        "Message catalog loaded"
    );

    Ok(MessageCatalog::from_entries(locale.clone(), entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_parse_bundle() {
        let entries = parse_bundle(
            r#"
            # account errors
            "APP-200-404" = "Account {} not found"
            "APP-200-409" = "Account {} already exists"
            "#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["APP-200-404"], "Account {} not found");
    }

    #[test]
    fn test_parse_bundle_rejects_non_strings() {
        assert!(parse_bundle("\"APP-1\" = 42").is_err());
    }

    #[test]
    fn test_bundle_paths_order() {
        let paths = bundle_paths(Path::new("cat"), "ErrorMessages", &Locale::default());
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["ErrorMessages.toml", "ErrorMessages_en.toml", "ErrorMessages_en_US.toml"]
        );
    }

    #[test]
    fn test_specific_overrides_general() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "Msgs.toml",
            "\"A\" = \"base a\"\n\"B\" = \"base b\"\n\"C\" = \"base c\"\n",
        );
        write(dir.path(), "Msgs_en.toml", "\"B\" = \"en b\"\n\"C\" = \"en c\"\n");
        write(dir.path(), "Msgs_en_US.toml", "\"C\" = \"en-US c\"\n");

        let catalog = load_bundle(dir.path(), "Msgs", &Locale::default()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.resolve("A"), "base a");
        assert_eq!(catalog.resolve("B"), "en b");
        assert_eq!(catalog.resolve("C"), "en-US c");
        assert_eq!(catalog.locale(), &Locale::default());
    }

    #[test]
    fn test_other_locales_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Msgs_en.toml", "\"A\" = \"english\"\n");
        write(dir.path(), "Msgs_fr.toml", "\"A\" = \"français\"\n");

        let catalog = load_bundle(dir.path(), "Msgs", &Locale::default()).unwrap();
        assert_eq!(catalog.resolve("A"), "english");
    }

    #[test]
    fn test_missing_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_bundle(dir.path(), "Msgs", &Locale::default()).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_bundle_propagates() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Msgs_en_US.toml", "\"A\" = \n");
        let err = load_bundle(dir.path(), "Msgs", &Locale::default()).unwrap_err();
        match err {
            CatalogError::Parse { path, .. } => assert!(path.ends_with("Msgs_en_US.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
