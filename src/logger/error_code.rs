//! The error-code logging decorator.
//!
//! # Responsibilities
//! - Treat the first argument of every logging call as an error code
//! - Attach the raw code as the structured `error` field
//! - Resolve and format the code through the message catalog
//! - Forward to the wrapped facade at the same level, with the same marker
//!   and attached error
//!
//! # Design Decisions
//! - All public methods funnel into [`ErrorCodeLogger::emit`]
//! - Formatting is skipped when the facade has the level disabled
//! - The attached error is never a format argument
//! - No state besides the delegate and catalog handles; clones are cheap and
//!   calls from any number of threads are independent

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::catalog::{self, MessageCatalog};
use crate::logger::{Level, LogFacade, Marker, Record};

/// Logger that takes error codes instead of free-text messages.
///
/// ```
/// use std::sync::Arc;
/// use error_code_logger::catalog::{Locale, MessageCatalog};
/// use error_code_logger::logger::{ErrorCodeLogger, MemoryFacade};
///
/// let catalog = Arc::new(MessageCatalog::from_entries(
///     Locale::default(),
///     [("APP-200-404", "Account {} not found")],
/// ));
/// let sink = Arc::new(MemoryFacade::new("accounts"));
/// let log = ErrorCodeLogger::new(sink.clone(), catalog);
///
/// log.warn("APP-200-404", &[&42]);
///
/// let record = &sink.records()[0];
/// assert_eq!(record.message, "APP-200-404 - Account 42 not found");
/// assert_eq!(record.field("error"), Some("APP-200-404"));
/// ```
#[derive(Clone)]
pub struct ErrorCodeLogger {
    delegate: Arc<dyn LogFacade>,
    catalog: Arc<MessageCatalog>,
}

macro_rules! level_methods {
    (
        $level:expr, $name:literal,
        $enabled:ident, $enabled_marked:ident,
        $log:ident, $with_error:ident, $marked:ident, $marked_with_error:ident
    ) => {
        #[doc = concat!("Whether ", $name, " records are emitted.")]
        pub fn $enabled(&self) -> bool {
            self.delegate.is_enabled($level, None)
        }

        #[doc = concat!("Whether ", $name, " records tagged with `marker` are emitted.")]
        pub fn $enabled_marked(&self, marker: &Marker) -> bool {
            self.delegate.is_enabled($level, Some(marker))
        }

        #[doc = concat!("Log `code` at ", $name, " with positional `args` (zero or more).")]
        pub fn $log(&self, code: &str, args: &[&dyn Display]) {
            self.emit($level, None, code, args, None);
        }

        #[doc = concat!("Log `code` at ", $name, " with an attached error.")]
        pub fn $with_error(&self, code: &str, error: &(dyn Error + 'static)) {
            self.emit($level, None, code, &[], Some(error));
        }

        #[doc = concat!("Log `code` at ", $name, " tagged with `marker`.")]
        pub fn $marked(&self, marker: &Marker, code: &str, args: &[&dyn Display]) {
            self.emit($level, Some(marker), code, args, None);
        }

        #[doc = concat!("Log `code` at ", $name, " tagged with `marker`, with an attached error.")]
        pub fn $marked_with_error(
            &self,
            marker: &Marker,
            code: &str,
            error: &(dyn Error + 'static),
        ) {
            self.emit($level, Some(marker), code, &[], Some(error));
        }
    };
}

impl ErrorCodeLogger {
    pub fn new(delegate: Arc<dyn LogFacade>, catalog: Arc<MessageCatalog>) -> Self {
        Self { delegate, catalog }
    }

    /// Wrap `delegate` using the process-wide catalog.
    pub fn with_global_catalog(delegate: Arc<dyn LogFacade>) -> Self {
        Self::new(delegate, catalog::global())
    }

    /// Name of the wrapped logger.
    pub fn name(&self) -> &str {
        self.delegate.name()
    }

    pub fn catalog(&self) -> &Arc<MessageCatalog> {
        &self.catalog
    }

    pub fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
        self.delegate.is_enabled(level, marker)
    }

    /// Single dispatch path behind every logging method.
    pub fn emit(
        &self,
        level: Level,
        marker: Option<&Marker>,
        code: &str,
        args: &[&dyn Display],
        error: Option<&(dyn Error + 'static)>,
    ) {
        if !self.delegate.is_enabled(level, marker) {
            return;
        }

        let formatted = self.catalog.format(code, args);
        let record = Record {
            level,
            code,
            template: formatted.template,
            message: &formatted.text,
            args,
            marker,
            error,
        };
        self.delegate.log(&record);
    }

    /// Log `code` at `level` with positional `args`.
    pub fn log(&self, level: Level, code: &str, args: &[&dyn Display]) {
        self.emit(level, None, code, args, None);
    }

    /// Log `code` at `level` tagged with `marker`.
    pub fn log_marked(&self, level: Level, marker: &Marker, code: &str, args: &[&dyn Display]) {
        self.emit(level, Some(marker), code, args, None);
    }

    level_methods!(
        Level::Trace, "trace",
        is_trace_enabled, is_trace_enabled_marked,
        trace, trace_with_error, trace_marked, trace_marked_with_error
    );

    level_methods!(
        Level::Debug, "debug",
        is_debug_enabled, is_debug_enabled_marked,
        debug, debug_with_error, debug_marked, debug_marked_with_error
    );

    level_methods!(
        Level::Info, "info",
        is_info_enabled, is_info_enabled_marked,
        info, info_with_error, info_marked, info_marked_with_error
    );

    level_methods!(
        Level::Warn, "warn",
        is_warn_enabled, is_warn_enabled_marked,
        warn, warn_with_error, warn_marked, warn_marked_with_error
    );

    level_methods!(
        Level::Error, "error",
        is_error_enabled, is_error_enabled_marked,
        error, error_with_error, error_marked, error_marked_with_error
    );
}

impl fmt::Debug for ErrorCodeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCodeLogger")
            .field("name", &self.name())
            .field("locale", &format_args!("{}", self.catalog.locale()))
            .finish()
    }
}
