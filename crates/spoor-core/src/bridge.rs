//! Bridge from the `log` facade
//!
//! Routes `log::info!` and friends to `get_logger(target)`, so crates that
//! log through the facade end up on spoor handlers.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::SpoorResult;
use crate::level::LogLevel;
use crate::registry::{get_logger, Registry};

/// Map a facade level onto a spoor level
pub fn map_level(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::ERROR,
        Level::Warn => LogLevel::WARNING,
        Level::Info => LogLevel::INFO,
        Level::Debug | Level::Trace => LogLevel::DEBUG,
    }
}

/// `log::Log` implementation backed by spoor loggers
pub struct SpoorLog {
    max_level: LevelFilter,
    registry: Option<Registry>,
}

impl SpoorLog {
    /// Route to the process-wide registry
    pub fn new(max_level: LevelFilter) -> Self {
        Self {
            max_level,
            registry: None,
        }
    }

    /// Route to a private registry
    pub fn with_registry(max_level: LevelFilter, registry: Registry) -> Self {
        Self {
            max_level,
            registry: Some(registry),
        }
    }

    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_ref()
    }
}

impl Log for SpoorLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let logger = match self.registry {
            Some(ref registry) => registry.get_logger(record.target()),
            None => get_logger(record.target()),
        };
        // Already rendered by the facade; no printf pass.
        logger.log(map_level(record.level()), &record.args().to_string(), &[]);
    }

    fn flush(&self) {}
}

/// Install `SpoorLog` as the global `log` logger
pub fn install(max_level: LevelFilter) -> SpoorResult<()> {
    log::set_boxed_logger(Box::new(SpoorLog::new(max_level)))?;
    log::set_max_level(max_level);
    Ok(())
}
