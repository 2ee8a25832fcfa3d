//! Catalog locale.
//!
//! # Responsibilities
//! - Parse locale tags (`en`, `en-US`, `en_US`)
//! - Produce bundle file suffixes from most specific to base
//!
//! # Design Decisions
//! - One fixed locale per process; no negotiation
//! - Language is stored lowercase, region uppercase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::CatalogError;

/// A language with an optional region, e.g. `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parse a locale tag. Accepts `-` or `_` as separator, any case.
    pub fn parse(tag: &str) -> Result<Self, CatalogError> {
        let tag = tag.trim();
        let mut parts = tag.split(['-', '_']);

        let language = parts.next().unwrap_or_default();
        if !is_alpha(language) {
            return Err(CatalogError::InvalidLocale(tag.to_string()));
        }

        let region = match parts.next() {
            Some(region) if is_alpha(region) => Some(region.to_ascii_uppercase()),
            Some(_) => return Err(CatalogError::InvalidLocale(tag.to_string())),
            None => None,
        };

        if parts.next().is_some() {
            return Err(CatalogError::InvalidLocale(tag.to_string()));
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Bundle file suffixes to try, most specific first.
    ///
    /// `en-US` yields `["_en_US", "_en", ""]`.
    pub fn bundle_suffixes(&self) -> Vec<String> {
        let mut suffixes = Vec::with_capacity(3);
        if let Some(region) = &self.region {
            suffixes.push(format!("_{}_{}", self.language, region));
        }
        suffixes.push(format!("_{}", self.language));
        suffixes.push(String::new());
        suffixes
    }
}

fn is_alpha(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic())
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(serde::de::Error::custom)
    }
}
