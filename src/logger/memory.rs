//! In-memory backend that keeps every record it receives.
//!
//! Useful for asserting on emissions in tests and for embedders that want to
//! inspect what would have been logged.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::logger::{Level, LogFacade, Marker, Record};

/// Owned copy of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub logger: String,
    pub level: Level,
    pub code: String,
    pub template: String,
    pub message: String,
    pub args: Vec<String>,
    pub fields: Vec<(String, String)>,
    pub marker: Option<Marker>,
    pub error: Option<String>,
}

impl CapturedRecord {
    /// Value of the structured field `key`, if attached.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<(&str, &Record<'_>)> for CapturedRecord {
    fn from((logger, record): (&str, &Record<'_>)) -> Self {
        Self {
            logger: logger.to_string(),
            level: record.level,
            code: record.code.to_string(),
            template: record.template.to_string(),
            message: record.message.to_string(),
            args: record.args.iter().map(|arg| arg.to_string()).collect(),
            fields: record
                .fields()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            marker: record.marker.cloned(),
            error: record.error.map(|e| e.to_string()),
        }
    }
}

/// Facade that stores records instead of writing them anywhere.
#[derive(Debug)]
pub struct MemoryFacade {
    name: String,
    min_level: Level,
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryFacade {
    /// Accepts every level.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_min_level(name, Level::Trace)
    }

    /// Accepts `min_level` and above.
    pub fn with_min_level(name: impl Into<String>, min_level: Level) -> Self {
        Self {
            name: name.into(),
            min_level,
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        // A panic mid-push leaves the vector intact.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of captured records, in emission order.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Remove and return captured records.
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogFacade for MemoryFacade {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        level >= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        let captured = CapturedRecord::from((self.name.as_str(), record));
        self.lock().push(captured);
    }
}
