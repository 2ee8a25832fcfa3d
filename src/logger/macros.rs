//! Variadic logging macros.
//!
//! ```
//! use error_code_logger::logger::Marker;
//! use error_code_logger::{code_info, code_warn, log_code};
//! use error_code_logger::logger::Level;
//!
//! let log = error_code_logger::logger::get_logger("docs");
//! let security = Marker::from_static("SECURITY");
//!
//! code_info!(log, "APP-100-400", "demo@example.com");
//! code_warn!(log, marker: security, "APP-200-423", "alice", 5);
//! log_code!(log, Level::Error, "APP-900-500");
//! ```

/// Log an error code at a given level with any number of arguments.
///
/// `log_code!(logger, level, code, args...)` or
/// `log_code!(logger, level, marker: m, code, args...)`.
#[macro_export]
macro_rules! log_code {
    ($logger:expr, $level:expr, marker: $marker:expr, $code:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_marked(
            $level,
            &$marker,
            $code,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
    ($logger:expr, $level:expr, $code:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            $code,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// [`log_code!`] at trace.
#[macro_export]
macro_rules! code_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_code!($logger, $crate::logger::Level::Trace, $($rest)+)
    };
}

/// [`log_code!`] at debug.
#[macro_export]
macro_rules! code_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_code!($logger, $crate::logger::Level::Debug, $($rest)+)
    };
}

/// [`log_code!`] at info.
#[macro_export]
macro_rules! code_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_code!($logger, $crate::logger::Level::Info, $($rest)+)
    };
}

/// [`log_code!`] at warn.
#[macro_export]
macro_rules! code_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_code!($logger, $crate::logger::Level::Warn, $($rest)+)
    };
}

/// [`log_code!`] at error.
#[macro_export]
macro_rules! code_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_code!($logger, $crate::logger::Level::Error, $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::catalog::{Locale, MessageCatalog};
    use crate::logger::{ErrorCodeLogger, Level, Marker, MemoryFacade};

    #[test]
    fn test_macros_forward_level_marker_and_args() {
        let catalog =
            MessageCatalog::from_entries(Locale::default(), [("A-1", "{} then {} then {}")]);
        let sink = Arc::new(MemoryFacade::new("macros"));
        let log = ErrorCodeLogger::new(sink.clone(), Arc::new(catalog));
        let audit = Marker::from_static("AUDIT");

        code_trace!(log, "A-1");
        code_debug!(log, "A-1", 1);
        code_info!(log, "A-1", 1, "two");
        code_warn!(log, marker: audit, "A-1", 1, "two", 3.5, 'x');
        code_error!(log, "plain {}", "text",);
        log_code!(log, Level::Info, marker: audit, "A-1");

        let records = sink.records();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].message, "A-1 - {} then {} then {}");
        assert_eq!(records[1].level, Level::Debug);
        assert_eq!(records[2].message, "A-1 - 1 then two then {}");
        assert_eq!(records[3].message, "A-1 - 1 then two then 3.5");
        assert_eq!(records[3].args, vec!["1", "two", "3.5", "x"]);
        assert_eq!(records[3].marker.as_ref().map(Marker::name), Some("AUDIT"));
        assert_eq!(records[4].message, "plain text");
        assert_eq!(records[4].level, Level::Error);
        assert_eq!(records[5].marker.as_ref(), Some(&audit));
    }
}
