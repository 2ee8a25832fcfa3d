//! Error-code logging subsystem.
//!
//! # Data Flow
//! ```text
//! caller: log.warn("APP-200-404", &[&id])
//!     → error_code.rs  (gate on level, single dispatch path)
//!     → catalog        (resolve code, format template)
//!     → Record { level, code, message, args, marker, error }
//!     → facade.rs      (LogFacade seam)
//!         → tracing_facade.rs (tracing events)
//!         → memory.rs         (captured records)
//! ```
//!
//! # Design Decisions
//! - The structured `error` field is always the raw code, so consumers can
//!   join on it no matter how the catalog words the message
//! - The level of the emitted record always matches the method called
//! - Backends are pluggable through [`LogFacade`]; `tracing` is the default

pub mod error_code;
pub mod facade;
pub mod factory;
pub mod level;
pub mod macros;
pub mod marker;
pub mod memory;
pub mod tracing_facade;

pub use error_code::ErrorCodeLogger;
pub use facade::{LogFacade, Record, ERROR_CODE_FIELD};
pub use factory::{default_factory, get_logger, get_logger_for, LoggerFactory};
pub use level::{Level, ParseLevelError};
pub use marker::Marker;
pub use memory::{CapturedRecord, MemoryFacade};
pub use tracing_facade::TracingFacade;
