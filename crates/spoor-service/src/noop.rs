//! No-op service implementation

use super::traits::ServiceLogger;

/// A service that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpService;

impl NoOpService {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceLogger for NoOpService {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
