//! File handler implementation

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use super::stream::StreamHandler;
use super::traits::{shared_sink, HandlerCore, LogHandler};
use crate::config::{self, Config};
use crate::error::{SpoorError, SpoorResult};
use crate::record::LogRecord;

/// A handler that appends formatted lines to a file
///
/// The file is opened once, create-if-missing and append-only. `mode` is
/// kept for introspection; it does not change how the file is opened.
/// There is no reopening or rotation.
pub struct FileHandler {
    stream: StreamHandler,
    filename: PathBuf,
    mode: String,
}

impl FileHandler {
    /// Open `filename` for appending
    ///
    /// If the file cannot be opened the handler is still returned; records
    /// sent to it are dropped.
    pub fn new(filename: impl Into<PathBuf>, mode: impl Into<String>) -> Self {
        Self::from_config(&config::snapshot(), filename, mode)
    }

    /// Like `new`, but report the open failure
    pub fn try_new(filename: impl Into<PathBuf>, mode: impl Into<String>) -> SpoorResult<Self> {
        let config = config::snapshot();
        let filename = filename.into();
        let file = open_append(&filename)?;
        Ok(Self {
            stream: StreamHandler::from_config(&config, Some(shared_sink(file))),
            filename,
            mode: mode.into(),
        })
    }

    /// Open `filename` with level and templates taken from `config`
    pub fn from_config(config: &Config, filename: impl Into<PathBuf>, mode: impl Into<String>) -> Self {
        let filename = filename.into();
        let stream = match open_append(&filename) {
            Ok(file) => StreamHandler::from_config(config, Some(shared_sink(file))),
            Err(_) => StreamHandler::detached(config),
        };
        Self {
            stream,
            filename,
            mode: mode.into(),
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Whether the file was opened successfully
    pub fn is_open(&self) -> bool {
        self.stream.sink().is_some()
    }
}

fn open_append(path: &Path) -> SpoorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SpoorError::open(path, e))
}

impl LogHandler for FileHandler {
    fn core(&self) -> &HandlerCore {
        self.stream.core()
    }

    fn emit(&self, record: &LogRecord) {
        self.stream.emit(record);
    }
}
