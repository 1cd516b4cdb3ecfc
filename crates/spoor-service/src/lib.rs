//! Spoor Service
//!
//! A spoor handler whose sink is a host logging facility (system service
//! log, extension host output channel, ...) exposing separate
//! info/warn/error entry points.
//!
//! ```rust
//! use std::sync::Arc;
//! use spoor_core::get_logger;
//! use spoor_service::{ConsoleService, ServiceHandler};
//!
//! let logger = get_logger("daemon");
//! logger.add_handler(Arc::new(ServiceHandler::new(Arc::new(ConsoleService::new()))));
//! logger.warn("low disk: %d%%", &[7.into()]);
//! ```

mod traits;
mod noop;
mod console;
mod handler;

pub use traits::{ServiceLogger, SharedService};
pub use noop::NoOpService;
pub use console::ConsoleService;
pub use handler::ServiceHandler;
