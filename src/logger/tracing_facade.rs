//! `tracing` backend for the error-code logger.
//!
//! Every record becomes one `tracing` event at the matching level:
//!
//! ```text
//! WARN error_code_logger::logger::tracing_facade: APP-200-404 - Account 42 not found
//!     logger="billing::invoices" error="APP-200-404" args=[42]
//! ```
//!
//! The raw code is recorded as the `error` field, the optional marker as
//! `marker`, positional arguments as `args` and an attached error as `cause`.
//!
//! `tracing` targets are static, so the logger name cannot be one. Instead
//! every check and event runs inside a `error_code_logger{logger=<name>}`
//! span at the record's level, which `EnvFilter` span directives can match:
//!
//! ```text
//! RUST_LOG="warn,[error_code_logger{logger=billing}]=debug"
//! ```

use tracing::field;

use crate::catalog::format::DisplayArgs;
use crate::logger::{Level, LogFacade, Marker, Record};

/// Forwards records to the current `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct TracingFacade {
    name: String,
}

impl TracingFacade {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Name of the span carrying the logger name.
pub const LOGGER_SPAN: &str = "error_code_logger";

// `tracing` needs the level as a constant at each callsite.
macro_rules! logger_span {
    ($level:expr, $name:expr) => {
        tracing::span!($level, LOGGER_SPAN, logger = $name.as_str())
    };
}

macro_rules! level_enabled {
    ($level:expr, $name:expr) => {{
        let span = logger_span!($level, $name);
        let _entered = span.enter();
        tracing::enabled!($level)
    }};
}

macro_rules! emit_event {
    ($level:expr, $name:expr, $record:expr) => {{
        let record: &Record<'_> = $record;
        let span = logger_span!($level, $name);
        let _entered = span.enter();
        tracing::event!(
            $level,
            logger = %$name,
            error = record.code,
            marker = record.marker.map(Marker::name),
            args = (!record.args.is_empty()).then(|| field::debug(DisplayArgs(record.args))),
            cause = record.error.map(field::display),
            "{}",
            record.message
        )
    }};
}

impl LogFacade for TracingFacade {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        match level {
            Level::Trace => level_enabled!(tracing::Level::TRACE, self.name),
            Level::Debug => level_enabled!(tracing::Level::DEBUG, self.name),
            Level::Info => level_enabled!(tracing::Level::INFO, self.name),
            Level::Warn => level_enabled!(tracing::Level::WARN, self.name),
            Level::Error => level_enabled!(tracing::Level::ERROR, self.name),
        }
    }

    fn log(&self, record: &Record<'_>) {
        match record.level {
            Level::Trace => emit_event!(tracing::Level::TRACE, self.name, record),
            Level::Debug => emit_event!(tracing::Level::DEBUG, self.name, record),
            Level::Info => emit_event!(tracing::Level::INFO, self.name, record),
            Level::Warn => emit_event!(tracing::Level::WARN, self.name, record),
            Level::Error => emit_event!(tracing::Level::ERROR, self.name, record),
        }
    }
}
