//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the fallible internals of spoor
///
/// The logging surface itself never returns these: file-open and write
/// failures are swallowed at the handler boundary. They surface only through
/// opt-in constructors such as `FileHandler::try_new`.
#[derive(Error, Debug)]
pub enum SpoorError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Failed to install log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl SpoorError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

pub type SpoorResult<T> = Result<T, SpoorError>;
