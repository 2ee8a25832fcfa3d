//! Shared utilities for integration testing.

use std::sync::Arc;

use error_code_logger::catalog::{Locale, MessageCatalog};
use error_code_logger::logger::{ErrorCodeLogger, MemoryFacade};

/// Catalog used across integration tests.
#[allow(dead_code)]
pub fn test_catalog() -> Arc<MessageCatalog> {
    Arc::new(MessageCatalog::from_entries(
        Locale::default(),
        [
            ("GREET-100", "Hello {}"),
            ("APP-100-400", "Failed to send email to {}"),
            ("APP-100-504", "Mail server {} did not respond within {} ms"),
            ("APP-200-404", "Account {} not found"),
        ],
    ))
}

/// A logger over an in-memory sink, plus the sink.
#[allow(dead_code)]
pub fn memory_logger(name: &str) -> (ErrorCodeLogger, Arc<MemoryFacade>) {
    let sink = Arc::new(MemoryFacade::new(name));
    (ErrorCodeLogger::new(sink.clone(), test_catalog()), sink)
}

/// Write a bundle file into `dir`.
#[allow(dead_code)]
pub fn write_bundle(dir: &std::path::Path, file_name: &str, entries: &[(&str, &str)]) {
    let body: String = entries
        .iter()
        .map(|(code, template)| format!("{code:?} = {template:?}\n"))
        .collect();
    std::fs::write(dir.join(file_name), body).unwrap();
}
