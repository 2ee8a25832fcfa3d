//! The logging facade seam.
//!
//! # Responsibilities
//! - Define what the decorator needs from an underlying logger
//! - Carry one enriched record from the decorator to that logger
//!
//! # Design Decisions
//! - Records borrow everything; nothing is allocated on behalf of the sink
//! - Formatting is done before the facade sees the record, so every backend
//!   shows the same text
//! - Transport, sinks and level gating belong to the backend

use std::error::Error;
use std::fmt::Display;

use crate::logger::{Level, Marker};

/// Name of the structured field carrying the raw error code.
pub const ERROR_CODE_FIELD: &str = "error";

/// An underlying logger that the error-code decorator forwards to.
///
/// Implementations must be safe to call from many threads at once.
pub trait LogFacade: Send + Sync {
    /// Name of this logger (its category in the backend).
    fn name(&self) -> &str;

    /// Whether a record at `level`, optionally tagged with `marker`, would be
    /// emitted.
    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool;

    /// Emit one record.
    fn log(&self, record: &Record<'_>);
}

/// One log emission, constructed per call and dropped right after.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    /// Raw error code as passed by the caller.
    pub code: &'a str,
    /// Template the code resolved to (the code itself on a catalog miss).
    pub template: &'a str,
    /// Fully formatted display text.
    pub message: &'a str,
    /// All positional arguments, including any beyond the placeholders.
    pub args: &'a [&'a dyn Display],
    pub marker: Option<&'a Marker>,
    /// Attached error; never part of `args` or `message`.
    pub error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Record<'a> {
    /// Structured key/value fields attached to this record.
    ///
    /// Always exactly one: the raw code under [`ERROR_CODE_FIELD`].
    pub fn fields(&self) -> [(&'static str, &'a str); 1] {
        [(ERROR_CODE_FIELD, self.code)]
    }
}

impl std::fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("args", &crate::catalog::format::DisplayArgs(self.args))
            .field("marker", &self.marker)
            .field("error", &self.error.map(|e| e.to_string()))
            .finish()
    }
}
