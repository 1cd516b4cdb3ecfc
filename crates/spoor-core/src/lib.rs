//! Spoor Core
//!
//! Named loggers that fan leveled records out to pluggable handlers, each
//! with its own level gate and line template.
//!
//! ## Dispatch
//!
//! A call such as `logger.error(...)` builds one `LogRecord` and offers it to
//! every attached handler in insertion order. A handler receives the record
//! when the record's level is at or above the handler's level; it then
//! formats the record with its own `Formatter` and writes one line.
//! Logging never fails: open, write and formatting problems are swallowed or
//! rendered inline. A FATAL record is delivered and then ends the process.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use spoor_core::{basic_config, get_logger, log_error, FileHandler, StreamHandler};
//!
//! basic_config([("format", "{asctime} {levelname} {message}")]);
//!
//! let logger = get_logger("app");
//! logger.add_handler(Arc::new(StreamHandler::new()));
//! logger.add_handler(Arc::new(FileHandler::new("app.log", "a")));
//!
//! log_error!(logger, "failed: %s", "disk full");
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod level;
pub mod logger;
pub mod record;
pub mod registry;

pub use config::{basic_config, basic_config_json, default_handler, Config, ConfigValue};
pub use error::{SpoorError, SpoorResult};
pub use format::Formatter;
pub use handlers::{
    shared_sink, FileHandler, HandlerCore, LogHandler, SharedHandler, SharedSink, StreamHandler,
};
pub use level::LogLevel;
pub use logger::{Logger, ProcessExit, Terminator, FATAL_EXIT_CODE};
pub use record::{Arg, LogRecord};
pub use registry::{get_logger, root_logger, Registry, ROOT_LOGGER};
