//! Handler trait and the shared state every handler composes

use std::io::Write;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::config::Config;
use crate::error::SpoorResult;
use crate::format::Formatter;
use crate::level::LogLevel;
use crate::record::LogRecord;

/// A byte sink shared between handlers and the caller that supplied it
pub type SharedSink = Arc<Mutex<dyn Write + Send>>;

/// Type alias for an Arc-wrapped handler
pub type SharedHandler = Arc<dyn LogHandler>;

/// Wrap a writer so it can be handed to a handler
pub fn shared_sink<W: Write + Send + 'static>(writer: W) -> SharedSink {
    Arc::new(Mutex::new(writer))
}

/// Write one line plus terminator under a single lock acquisition
pub(crate) fn write_line(sink: &SharedSink, line: &str) -> SpoorResult<()> {
    let mut sink = sink.lock();
    sink.write_all(line.as_bytes())?;
    sink.write_all(b"\n")?;
    sink.flush()?;
    Ok(())
}

/// Level and formatter state shared by all handler variants
#[derive(Debug)]
pub struct HandlerCore {
    level: AtomicI32,
    formatter: RwLock<Formatter>,
}

impl HandlerCore {
    pub fn new(level: LogLevel, formatter: Formatter) -> Self {
        Self {
            level: AtomicI32::new(level.ordinal()),
            formatter: RwLock::new(formatter),
        }
    }

    /// Snapshot level and templates from a config
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.level,
            Formatter::new(config.format.clone(), config.datefmt.clone()),
        )
    }

    /// Snapshot the current global config
    pub fn from_global() -> Self {
        Self::from_config(&crate::config::snapshot())
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_ordinal(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter.read().clone()
    }

    pub fn set_formatter(&self, formatter: Formatter) {
        *self.formatter.write() = formatter;
    }

    pub fn format(&self, record: &LogRecord) -> String {
        self.formatter.read().format(record)
    }
}

/// A sink with its own level gate and formatter
///
/// Implementations:
/// - `StreamHandler`: writes to any byte sink, stderr by default
/// - `FileHandler`: appends to a file
/// - `ServiceHandler` (spoor-service): forwards to a host service logger
///
/// Variants provide `core` and `emit`; everything else has a default.
/// The level gate is applied by `Logger::log`, not by `handle`: calling
/// `handle` directly bypasses the handler's own level.
pub trait LogHandler: Send + Sync {
    /// Shared level and formatter state
    fn core(&self) -> &HandlerCore;

    /// Format the record and deliver it; failures are swallowed
    fn emit(&self, record: &LogRecord);

    fn level(&self) -> LogLevel {
        self.core().level()
    }

    fn set_level(&self, level: LogLevel) {
        self.core().set_level(level);
    }

    fn formatter(&self) -> Formatter {
        self.core().formatter()
    }

    /// Replace the formatter; affects subsequent emits only
    fn set_formatter(&self, formatter: Formatter) {
        self.core().set_formatter(formatter);
    }

    fn handle(&self, record: &LogRecord) {
        self.emit(record);
    }

    fn format(&self, record: &LogRecord) -> String {
        self.core().format(record)
    }
}
