//! Console service: a stand-in host facility for terminals and tests

use std::io::Write;

use spoor_core::{shared_sink, SharedSink};

use super::traits::ServiceLogger;

/// Writes `<prefix> <TAG> <message>` lines, info to one sink and
/// warn/error to another
///
/// `new` uses stdout and stderr. The tag names the service operation that
/// was called, so CRITICAL records routed to `info` show up as `INFO`.
#[derive(Clone)]
pub struct ConsoleService {
    prefix: String,
    out: SharedSink,
    err: SharedSink,
}

impl Default for ConsoleService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleService {
    pub fn new() -> Self {
        Self::with_sinks(
            "[spoor]",
            shared_sink(std::io::stdout()),
            shared_sink(std::io::stderr()),
        )
    }

    /// Route info lines to `out` and warn/error lines to `err`
    pub fn with_sinks(prefix: impl Into<String>, out: SharedSink, err: SharedSink) -> Self {
        Self {
            prefix: prefix.into(),
            out,
            err,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn deliver(&self, sink: &SharedSink, tag: &str, message: &str) {
        let mut sink = sink.lock();
        let _ = writeln!(sink, "{} {} {}", self.prefix, tag, message);
        let _ = sink.flush();
    }
}

impl ServiceLogger for ConsoleService {
    fn info(&self, message: &str) {
        self.deliver(&self.out, "INFO", message);
    }

    fn warn(&self, message: &str) {
        self.deliver(&self.err, "WARN", message);
    }

    fn error(&self, message: &str) {
        self.deliver(&self.err, "ERROR", message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use spoor_core::{Formatter, HandlerCore, LogHandler, LogLevel, Logger};

    use super::*;
    use crate::ServiceHandler;

    fn capture() -> (Arc<Mutex<Vec<u8>>>, SharedSink) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink: SharedSink = buffer.clone();
        (buffer, sink)
    }

    fn text(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().clone()).unwrap()
    }

    #[test]
    fn test_operations_tagged_and_split_by_sink() {
        let (out, out_sink) = capture();
        let (err, err_sink) = capture();
        let service = ConsoleService::with_sinks("[agent]", out_sink, err_sink);

        service.info("started");
        service.warn("slow");
        service.error("failed");

        assert_eq!(service.prefix(), "[agent]");
        assert_eq!(text(&out), "[agent] INFO started\n");
        assert_eq!(text(&err), "[agent] WARN slow\n[agent] ERROR failed\n");
    }

    #[test]
    fn test_critical_lands_on_info_sink() {
        let (out, out_sink) = capture();
        let (err, err_sink) = capture();
        let service = Arc::new(ConsoleService::with_sinks("[d]", out_sink, err_sink));
        let core = HandlerCore::new(LogLevel::DEBUG, Formatter::new("{levelname} {message}", ""));
        let handler = ServiceHandler::with_core(service, core);
        assert_eq!(handler.level(), LogLevel::DEBUG);

        let logger = Logger::new("console");
        logger.add_handler(Arc::new(handler));
        logger.critical("overheating", &[]);
        logger.warn("fan %d stopped", &[2.into()]);

        assert_eq!(text(&out), "[d] INFO CRITICAL overheating\n");
        assert_eq!(text(&err), "[d] WARN WARNING fan 2 stopped\n");
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(ConsoleService::default().prefix(), "[spoor]");
    }
}
