//! Logger registry: one logger instance per name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::logger::Logger;

/// Name used when no logger name is given
pub const ROOT_LOGGER: &str = "root";

/// Map from logger name to the logger created for it
///
/// Loggers are created on first request and live as long as the registry.
/// Lookups and inserts share one exclusive lock so check-then-create is atomic.
#[derive(Debug, Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Get the logger for `name` (`"root"` when `None`), creating it if needed
    pub fn get_logger<'a>(&self, name: impl Into<Option<&'a str>>) -> Arc<Logger> {
        let name = name.into().unwrap_or(ROOT_LOGGER);
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }
        let logger = Arc::new(Logger::new(name));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Number of loggers created so far
    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all loggers created so far
    pub fn names(&self) -> Vec<String> {
        self.loggers.lock().keys().cloned().collect()
    }
}

// Global registry instance
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Get a logger from the process-wide registry
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use spoor_core::get_logger;
///
/// let a = get_logger("app");
/// let b = get_logger("app");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn get_logger<'a>(name: impl Into<Option<&'a str>>) -> Arc<Logger> {
    GLOBAL_REGISTRY.get_logger(name)
}

/// The process-wide root logger
pub fn root_logger() -> Arc<Logger> {
    GLOBAL_REGISTRY.get_logger(None)
}
