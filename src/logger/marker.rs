//! Categorization tags.
//!
//! A marker is a label attached to a record independent of its level and
//! code, e.g. `SECURITY` or `BILLING`, used by sinks for filtering.

use std::borrow::Cow;
use std::fmt;

/// Named categorization tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    name: Cow<'static, str>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    /// A marker usable in `const`/`static` position.
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&'static str> for Marker {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}
