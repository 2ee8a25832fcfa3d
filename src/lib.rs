//! Error-code logging library.
//!
//! Call sites log stable error codes such as `"APP-100-400"` instead of prose.
//! Each record carries the raw code as the structured field `error` and a
//! message resolved from a per-locale catalog.

pub mod catalog;
pub mod config;
pub mod logger;
pub mod observability;

pub use catalog::{error_message, MessageCatalog};
pub use config::AppConfig;
pub use logger::{get_logger, get_logger_for, ErrorCodeLogger, Level, Marker};
