//! Stream handler implementation

use super::traits::{shared_sink, write_line, HandlerCore, LogHandler, SharedSink};
use crate::config::{self, Config};
use crate::record::LogRecord;

/// A handler that writes formatted lines to a byte sink
///
/// A handler without a sink (see `FileHandler` when the file cannot be
/// opened) accepts records and drops them.
pub struct StreamHandler {
    core: HandlerCore,
    sink: Option<SharedSink>,
}

impl Default for StreamHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamHandler {
    /// Create a handler on the configured stream, or stderr when none is set
    pub fn new() -> Self {
        let config = config::snapshot();
        let sink = config.stream.clone();
        Self::from_config(&config, sink)
    }

    /// Create a handler on the given sink
    pub fn with_sink(sink: SharedSink) -> Self {
        Self::from_config(&config::snapshot(), Some(sink))
    }

    /// Create a handler from an explicit config snapshot
    ///
    /// Falls back to stderr when `sink` is `None`.
    pub fn from_config(config: &Config, sink: Option<SharedSink>) -> Self {
        Self {
            core: HandlerCore::from_config(config),
            sink: Some(sink.unwrap_or_else(|| shared_sink(std::io::stderr()))),
        }
    }

    pub(crate) fn detached(config: &Config) -> Self {
        Self {
            core: HandlerCore::from_config(config),
            sink: None,
        }
    }

    /// The sink this handler writes to, if any
    pub fn sink(&self) -> Option<&SharedSink> {
        self.sink.as_ref()
    }
}

impl LogHandler for StreamHandler {
    fn core(&self) -> &HandlerCore {
        &self.core
    }

    fn emit(&self, record: &LogRecord) {
        if let Some(ref sink) = self.sink {
            let _ = write_line(sink, &self.format(record));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::format::Formatter;
    use crate::level::LogLevel;
    use crate::record::Arg;

    fn buffer() -> (Arc<Mutex<Vec<u8>>>, SharedSink) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink: SharedSink = buffer.clone();
        (buffer, sink)
    }

    fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().clone()).unwrap()
    }

    #[test]
    fn test_stream_handler_writes_lines() {
        let (buf, sink) = buffer();
        let handler = StreamHandler::from_config(&Config::default(), Some(sink));
        handler.set_formatter(Formatter::new("{levelname}: {message}", ""));

        handler.emit(&LogRecord::new(LogLevel::ERROR, "x", "failed: %s", vec![Arg::from("disk full")]));
        handler.emit(&LogRecord::new(LogLevel::INFO, "x", "second", Vec::new()));

        assert_eq!(contents(&buf), "ERROR: failed: disk full\nINFO: second\n");
    }

    #[test]
    fn test_stream_handler_adopts_config() {
        let mut config = Config::default();
        config.level = LogLevel::WARNING;
        config.format = "[{levelname}] {message}".to_string();
        let (buf, sink) = buffer();
        let handler = StreamHandler::from_config(&config, Some(sink));

        assert_eq!(handler.level(), LogLevel::WARNING);
        handler.emit(&LogRecord::new(LogLevel::WARNING, "x", "careful", Vec::new()));
        assert_eq!(contents(&buf), "[WARNING] careful\n");
    }

    #[test]
    fn test_stream_handler_defaults_to_stderr() {
        let handler = StreamHandler::from_config(&Config::default(), None);
        assert!(handler.sink().is_some());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let handler = StreamHandler::from_config(&Config::default(), Some(shared_sink(BrokenPipe)));
        handler.emit(&LogRecord::new(LogLevel::ERROR, "x", "lost", Vec::new()));
    }

    #[test]
    fn test_detached_handler_drops_records() {
        let handler = StreamHandler::detached(&Config::default());
        assert!(handler.sink().is_none());
        handler.emit(&LogRecord::new(LogLevel::ERROR, "x", "dropped", Vec::new()));
    }
}
