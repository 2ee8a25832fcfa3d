//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ErrorCodeLogger → TracingFacade
//!     → tracing events (fields: logger, error, marker, args, cause)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout (pretty, compact or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - The error code is a first-class field, never only part of the message

pub mod logging;

pub use logging::{init_logging, LoggingError};
