//! Obtaining error-code loggers by name or by component type.

use std::any::type_name;
use std::fmt;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::catalog::{self, MessageCatalog};
use crate::logger::{ErrorCodeLogger, LogFacade, TracingFacade};

type BackendFn = dyn Fn(&str) -> Arc<dyn LogFacade> + Send + Sync;

/// Builds and caches one [`ErrorCodeLogger`] per name.
pub struct LoggerFactory {
    catalog: Arc<MessageCatalog>,
    backend: Box<BackendFn>,
    loggers: DashMap<String, ErrorCodeLogger>,
}

impl LoggerFactory {
    /// Factory creating delegates with `backend`.
    pub fn new<F>(catalog: Arc<MessageCatalog>, backend: F) -> Self
    where
        F: Fn(&str) -> Arc<dyn LogFacade> + Send + Sync + 'static,
    {
        Self {
            catalog,
            backend: Box::new(backend),
            loggers: DashMap::new(),
        }
    }

    /// Factory whose loggers forward to `tracing`.
    pub fn tracing(catalog: Arc<MessageCatalog>) -> Self {
        Self::new(catalog, |name| Arc::new(TracingFacade::new(name)) as Arc<dyn LogFacade>)
    }

    /// Logger named `name`, created on first request.
    pub fn get_logger(&self, name: &str) -> ErrorCodeLogger {
        if let Some(logger) = self.loggers.get(name) {
            return logger.clone();
        }

        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::trace!(logger = name, "Creating error-code logger");
                ErrorCodeLogger::new((self.backend)(name), self.catalog.clone())
            })
            .clone()
    }

    /// Logger named after the type `T`, e.g. `my_app::billing::Invoices`.
    pub fn get_logger_for<T: ?Sized>(&self) -> ErrorCodeLogger {
        self.get_logger(type_name::<T>())
    }

    pub fn catalog(&self) -> &Arc<MessageCatalog> {
        &self.catalog
    }

    /// Number of cached loggers.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("locale", &format_args!("{}", self.catalog.locale()))
            .field("loggers", &self.loggers.len())
            .finish()
    }
}

static DEFAULT_FACTORY: OnceLock<LoggerFactory> = OnceLock::new();

/// The process-wide factory: `tracing` backend, process-wide catalog.
pub fn default_factory() -> &'static LoggerFactory {
    DEFAULT_FACTORY.get_or_init(|| LoggerFactory::tracing(catalog::global()))
}

/// Logger named `name` from the process-wide factory.
pub fn get_logger(name: &str) -> ErrorCodeLogger {
    default_factory().get_logger(name)
}

/// Logger named after `T` from the process-wide factory.
pub fn get_logger_for<T: ?Sized>() -> ErrorCodeLogger {
    default_factory().get_logger_for::<T>()
}
