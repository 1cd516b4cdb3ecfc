//! Handler that forwards formatted lines to a host service

use spoor_core::{HandlerCore, LogHandler, LogLevel, LogRecord};

use super::traits::{ServiceLogger, SharedService};

/// A handler whose sink is a `ServiceLogger`
///
/// WARNING records go to `warn`, ERROR records to `error`, and every other
/// level, CRITICAL and FATAL included, to `info`. The host API has no
/// separate entry points for the two highest levels.
pub struct ServiceHandler {
    core: HandlerCore,
    service: SharedService,
}

impl ServiceHandler {
    /// Create a handler with level and templates from the global config
    pub fn new(service: SharedService) -> Self {
        Self::with_core(service, HandlerCore::from_global())
    }

    /// Create a handler with explicit level and formatter state
    pub fn with_core(service: SharedService, core: HandlerCore) -> Self {
        Self { core, service }
    }

    pub fn service(&self) -> &SharedService {
        &self.service
    }
}

impl LogHandler for ServiceHandler {
    fn core(&self) -> &HandlerCore {
        &self.core
    }

    fn emit(&self, record: &LogRecord) {
        let msg = self.format(record);
        match record.level() {
            LogLevel::WARNING => self.service.warn(&msg),
            LogLevel::ERROR => self.service.error(&msg),
            _ => self.service.info(&msg),
        }
    }
}
