//! Named loggers

use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::handlers::{LogHandler, SharedHandler};
use crate::level::LogLevel;
use crate::record::{Arg, LogRecord};

/// Exit status used after a FATAL record has been delivered
pub const FATAL_EXIT_CODE: i32 = 1;

/// What happens after a FATAL record has been delivered
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Ends the process with `std::process::exit`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// A named source of log records
///
/// Records fan out to the attached handlers in the order they were added.
/// Each handler is gated on its own level; the logger's own level is stored
/// but not consulted when dispatching.
pub struct Logger {
    name: String,
    level: AtomicI32,
    handlers: RwLock<Vec<SharedHandler>>,
    terminator: RwLock<Arc<dyn Terminator>>,
}

impl Logger {
    /// Create an unregistered logger; use `get_logger` for the shared instance
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: AtomicI32::new(LogLevel::default().ordinal()),
            handlers: RwLock::new(Vec::with_capacity(2)),
            terminator: RwLock::new(Arc::new(ProcessExit)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_ordinal(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
    }

    /// Append a handler; the same handler may be added more than once
    pub fn add_handler(&self, handler: SharedHandler) {
        self.handlers.write().push(handler);
    }

    /// Snapshot of the attached handlers in dispatch order
    pub fn handlers(&self) -> Vec<SharedHandler> {
        self.handlers.read().clone()
    }

    /// Replace what runs after FATAL delivery
    pub fn set_terminator(&self, terminator: Arc<dyn Terminator>) {
        *self.terminator.write() = terminator;
    }

    /// Deliver a record to every handler whose level is at or below `level`
    ///
    /// A FATAL record is delivered first, then the terminator runs with
    /// `FATAL_EXIT_CODE`.
    pub fn log(&self, level: LogLevel, msg: &str, args: &[Arg]) {
        let record = LogRecord::new(level, self.name.as_str(), msg, args);
        // Dispatch outside the lock so handlers may log through this logger.
        let handlers = self.handlers();
        for handler in &handlers {
            if level >= handler.level() {
                handler.handle(&record);
            }
        }
        if level == LogLevel::FATAL {
            let terminator = self.terminator.read().clone();
            terminator.terminate(FATAL_EXIT_CODE);
        }
    }

    pub fn debug(&self, msg: &str, args: &[Arg]) {
        self.log(LogLevel::DEBUG, msg, args);
    }

    pub fn info(&self, msg: &str, args: &[Arg]) {
        self.log(LogLevel::INFO, msg, args);
    }

    pub fn warn(&self, msg: &str, args: &[Arg]) {
        self.log(LogLevel::WARNING, msg, args);
    }

    pub fn error(&self, msg: &str, args: &[Arg]) {
        self.log(LogLevel::ERROR, msg, args);
    }

    pub fn critical(&self, msg: &str, args: &[Arg]) {
        self.log(LogLevel::CRITICAL, msg, args);
    }

    /// Log at FATAL, then terminate
    pub fn fatal(&self, msg: &str, args: &[Arg]) {
        self.log(LogLevel::FATAL, msg, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &self.handlers.read().len())
            .finish()
    }
}

/// Convenience macros for logging with positional arguments
///
/// ```
/// use spoor_core::{log_error, Logger};
///
/// let logger = Logger::new("disk");
/// log_error!(logger, "failed: %s (%d%% used)", "disk full", 99);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($msg, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($msg, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($msg, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($msg, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.critical($msg, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($msg, &[$($crate::Arg::from($arg)),*])
    };
}
