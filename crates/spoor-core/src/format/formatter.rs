//! Line templates

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

use super::printf::sprintf;
use crate::record::LogRecord;

const LEVELNAME: &str = "{levelname}";
const MESSAGE: &str = "{message}";
const ASCTIME: &str = "{asctime}";

/// Renders a `LogRecord` into a single line of text
///
/// `fmt` is the line template with optional `{levelname}`, `{message}` and
/// `{asctime}` placeholders; `datefmt` is a strftime-style time template used
/// for `{asctime}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    fmt: String,
    datefmt: String,
}

impl Formatter {
    pub fn new(fmt: impl Into<String>, datefmt: impl Into<String>) -> Self {
        Self {
            fmt: fmt.into(),
            datefmt: datefmt.into(),
        }
    }

    pub fn fmt(&self) -> &str {
        &self.fmt
    }

    pub fn datefmt(&self) -> &str {
        &self.datefmt
    }

    /// Render the record's message, substituting arguments when present
    pub fn format_message(&self, record: &LogRecord) -> String {
        if record.args().is_empty() {
            record.msg().to_string()
        } else {
            sprintf(record.msg(), record.args())
        }
    }

    /// Render the full line
    ///
    /// The template is scanned once: the first occurrence of each placeholder
    /// is replaced and substituted text is never rescanned, so a message
    /// containing `{asctime}` is emitted literally.
    pub fn format(&self, record: &LogRecord) -> String {
        let message = self.format_message(record);
        let mut out = String::with_capacity(self.fmt.len() + message.len());
        let mut rest = self.fmt.as_str();
        let (mut levelname, mut msg, mut asctime) = (false, false, false);

        while let Some(pos) = rest.find('{') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            if !levelname && rest.starts_with(LEVELNAME) {
                out.push_str(record.level().as_str());
                rest = &rest[LEVELNAME.len()..];
                levelname = true;
            } else if !msg && rest.starts_with(MESSAGE) {
                out.push_str(&message);
                rest = &rest[MESSAGE.len()..];
                msg = true;
            } else if !asctime && rest.starts_with(ASCTIME) {
                self.write_time(&mut out);
                rest = &rest[ASCTIME.len()..];
                asctime = true;
            } else {
                out.push('{');
                rest = &rest[1..];
            }
        }
        out.push_str(rest);
        out
    }

    fn write_time(&self, out: &mut String) {
        let items: Vec<Item<'_>> = StrftimeItems::new(&self.datefmt).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            out.push_str("%!(BADTIME)");
            return;
        }
        let _ = write!(out, "{}", Local::now().format_with_items(items.into_iter()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use crate::record::Arg;

    #[test]
    fn test_format_with_args() {
        let formatter = Formatter::new("{levelname}: {message}", "%Y-%m-%d");
        let record = LogRecord::new(LogLevel::ERROR, "x", "failed: %s", vec![Arg::from("disk full")]);
        assert_eq!(formatter.format(&record), "ERROR: failed: disk full");
    }

    #[test]
    fn test_format_without_args_keeps_percent() {
        let formatter = Formatter::new("{message}", "");
        let record = LogRecord::new(LogLevel::INFO, "x", "100% done", Vec::new());
        assert_eq!(formatter.format(&record), "100% done");
    }

    #[test]
    fn test_placeholder_substituted_once() {
        let formatter = Formatter::new("{levelname} {levelname} {message} {message}", "");
        let record = LogRecord::new(LogLevel::WARNING, "x", "hi", Vec::new());
        assert_eq!(formatter.format(&record), "WARNING {levelname} hi {message}");
    }

    #[test]
    fn test_message_placeholders_not_rescanned() {
        let formatter = Formatter::new("{levelname}: {message} at {asctime}", "fixed");
        let record = LogRecord::new(LogLevel::INFO, "x", "see {asctime} and {levelname}", Vec::new());
        assert_eq!(
            formatter.format(&record),
            "INFO: see {asctime} and {levelname} at fixed"
        );
    }

    #[test]
    fn test_missing_placeholders_ignored() {
        let formatter = Formatter::new("static {text}", "%Y");
        let record = LogRecord::new(LogLevel::INFO, "x", "hi", Vec::new());
        assert_eq!(formatter.format(&record), "static {text}");
    }

    #[test]
    fn test_asctime_rendered_with_datefmt() {
        let formatter = Formatter::new("[{asctime}]", "%Y-%m-%d");
        let record = LogRecord::new(LogLevel::INFO, "x", "hi", Vec::new());
        let line = formatter.format(&record);
        assert_eq!(line.len(), "[2024-01-01]".len());
        assert!(line.starts_with('[') && line.ends_with(']'));
        assert_eq!(&line[5..6], "-");
    }

    #[test]
    fn test_bad_datefmt_marker() {
        let formatter = Formatter::new("{asctime}", "bad %");
        let record = LogRecord::new(LogLevel::INFO, "x", "hi", Vec::new());
        assert_eq!(formatter.format(&record), "%!(BADTIME)");
    }

    #[test]
    fn test_format_is_repeatable() {
        let formatter = Formatter::new("{levelname}|{message}", "");
        let record = LogRecord::new(LogLevel::DEBUG, "x", "n=%d", vec![Arg::from(1)]);
        assert_eq!(formatter.format(&record), formatter.format(&record));
    }
}
