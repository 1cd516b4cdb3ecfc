//! Host service logger capability

use std::sync::Arc;

/// A host logging facility with severity-specific entry points
///
/// Implementations:
/// - `NoOpService`: Silent service for testing
/// - `ConsoleService`: Writes to stdout/stderr
/// - Host adapters: system service logs, extension host output channels
pub trait ServiceLogger: Send + Sync {
    /// Deliver an informational line
    fn info(&self, message: &str);

    /// Deliver a warning line
    fn warn(&self, message: &str);

    /// Deliver an error line
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped service logger
pub type SharedService = Arc<dyn ServiceLogger>;
