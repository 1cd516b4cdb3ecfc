//! Process-wide defaults for newly constructed handlers
//!
//! Handlers snapshot the config when they are built; changing the config
//! never affects handlers that already exist.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::handlers::{FileHandler, SharedHandler, SharedSink, StreamHandler};
use crate::level::LogLevel;

pub const DEFAULT_FORMAT: &str = "{levelname}: {asctime} - {message}";
pub const DEFAULT_DATEFMT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_FILEMODE: &str = "a";

/// Handler construction defaults
#[derive(Clone)]
pub struct Config {
    /// Build a `FileHandler` on this path instead of a `StreamHandler`
    pub filename: Option<PathBuf>,
    /// Mode recorded on file handlers
    pub filemode: String,
    /// Line template
    pub format: String,
    /// strftime-style template for `{asctime}`
    pub datefmt: String,
    /// Level adopted by new handlers
    pub level: LogLevel,
    /// Sink for stream handlers; ignored when `filename` is set
    pub stream: Option<SharedSink>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: None,
            filemode: DEFAULT_FILEMODE.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            datefmt: DEFAULT_DATEFMT.to_string(),
            level: LogLevel::INFO,
            stream: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("filename", &self.filename)
            .field("filemode", &self.filemode)
            .field("format", &self.format)
            .field("datefmt", &self.datefmt)
            .field("level", &self.level)
            .field("stream", &self.stream.as_ref().map(|_| "<sink>"))
            .finish()
    }
}

/// A value in a `basic_config` options map
#[derive(Clone)]
pub enum ConfigValue {
    Text(String),
    Stream(SharedSink),
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<SharedSink> for ConfigValue {
    fn from(value: SharedSink) -> Self {
        ConfigValue::Stream(value)
    }
}

impl Config {
    /// Overwrite fields from `(key, value)` pairs
    ///
    /// Keys are matched case-insensitively against `filename`, `filemode`,
    /// `format`, `datefmt` and `stream`. Unknown keys, and values of the
    /// wrong kind for a key, are ignored.
    pub fn apply<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ConfigValue>,
    {
        for (key, value) in options {
            match (key.as_ref().to_lowercase().as_str(), value.into()) {
                ("filename", ConfigValue::Text(v)) => self.filename = Some(PathBuf::from(v)),
                ("filemode", ConfigValue::Text(v)) => self.filemode = v,
                ("format", ConfigValue::Text(v)) => self.format = v,
                ("datefmt", ConfigValue::Text(v)) => self.datefmt = v,
                ("stream", ConfigValue::Stream(s)) => self.stream = Some(s),
                _ => {}
            }
        }
    }

    /// Same as `apply`, reading string members of a JSON object
    ///
    /// Non-object values and non-string members are ignored; `stream` has
    /// no JSON form.
    pub fn apply_json(&mut self, options: &serde_json::Value) {
        if let Some(map) = options.as_object() {
            self.apply(
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.as_str(), ConfigValue::from(s)))),
            );
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Update the global config
///
/// # Example
///
/// ```
/// use spoor_core::config::{basic_config, snapshot};
///
/// basic_config([("Format", "{levelname} {message}"), ("DateFmt", "%H:%M")]);
/// assert_eq!(snapshot().datefmt, "%H:%M");
/// ```
pub fn basic_config<I, K, V>(options: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<ConfigValue>,
{
    CONFIG.write().apply(options);
}

/// Update the global config from a JSON object
pub fn basic_config_json(options: &serde_json::Value) {
    CONFIG.write().apply_json(options);
}

/// A copy of the current global config
pub fn snapshot() -> Config {
    CONFIG.read().clone()
}

/// Build the handler the current global config describes
///
/// A `FileHandler` when `filename` is set, otherwise a `StreamHandler` on
/// the configured stream (stderr if none).
pub fn default_handler() -> SharedHandler {
    let config = snapshot();
    match config.filename {
        Some(ref filename) => Arc::new(FileHandler::from_config(
            &config,
            filename.clone(),
            config.filemode.clone(),
        )),
        None => Arc::new(StreamHandler::from_config(&config, config.stream.clone())),
    }
}

#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

#[cfg(test)]
pub(crate) fn reset() {
    *CONFIG.write() = Config::default();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::format::Formatter;
    use crate::handlers::LogHandler;
    use crate::record::LogRecord;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.level, LogLevel::INFO);
        assert_eq!(config.format, "{levelname}: {asctime} - {message}");
        assert_eq!(config.datefmt, "%Y-%m-%d %H:%M:%S");
        assert!(config.filename.is_none());
        assert!(config.stream.is_none());
    }

    #[test]
    fn test_apply_is_case_insensitive_and_ignores_unknown() {
        let mut config = Config::default();
        config.apply([
            ("FileName", "out.log"),
            ("FILEMODE", "w"),
            ("format", "{message}"),
            ("colour", "blue"),
        ]);
        assert_eq!(config.filename, Some(PathBuf::from("out.log")));
        assert_eq!(config.filemode, "w");
        assert_eq!(config.format, "{message}");
        assert_eq!(config.datefmt, DEFAULT_DATEFMT);
    }

    #[test]
    fn test_apply_ignores_mismatched_values() {
        let sink: SharedSink = Arc::new(Mutex::new(Vec::<u8>::new()));
        let mut config = Config::default();
        config.apply([
            ("format", ConfigValue::from(sink.clone())),
            ("stream", ConfigValue::from("stderr")),
        ]);
        assert_eq!(config.format, DEFAULT_FORMAT);
        assert!(config.stream.is_none());

        config.apply([("stream", ConfigValue::from(sink))]);
        assert!(config.stream.is_some());
    }

    #[test]
    fn test_apply_json() {
        let mut config = Config::default();
        config.apply_json(&json!({"datefmt": "%H", "filename": 7, "level": "DEBUG"}));
        assert_eq!(config.datefmt, "%H");
        assert!(config.filename.is_none());
        assert_eq!(config.level, LogLevel::INFO);

        config.apply_json(&json!(["format", "x"]));
        assert_eq!(config.format, DEFAULT_FORMAT);
    }

    #[test]
    fn test_basic_config_affects_only_new_handlers() {
        let _guard = TEST_LOCK.lock();
        reset();

        let before = StreamHandler::new();
        basic_config([("format", "changed {message}")]);
        let after = StreamHandler::new();

        assert_eq!(before.formatter(), Formatter::new(DEFAULT_FORMAT, DEFAULT_DATEFMT));
        assert_eq!(after.formatter().fmt(), "changed {message}");
        reset();
    }

    #[test]
    fn test_default_handler_uses_configured_stream() {
        let _guard = TEST_LOCK.lock();
        reset();

        let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let sink: SharedSink = buffer.clone();
        basic_config([("format", ConfigValue::from("{message}")), ("stream", sink.into())]);

        let handler = default_handler();
        handler.emit(&LogRecord::new(LogLevel::INFO, "x", "to stream", Vec::new()));
        assert_eq!(String::from_utf8(buffer.lock().clone()).unwrap(), "to stream\n");
        reset();
    }

    #[test]
    fn test_default_handler_appends_to_configured_file() {
        let _guard = TEST_LOCK.lock();
        reset();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        fs::write(&path, "prior\n").unwrap();
        basic_config_json(&json!({"filename": path.to_str().unwrap(), "format": "{message}"}));

        let handler = default_handler();
        handler.emit(&LogRecord::new(LogLevel::INFO, "x", "one", Vec::new()));
        handler.emit(&LogRecord::new(LogLevel::INFO, "x", "two", Vec::new()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "prior\none\ntwo\n");
        reset();
    }
}
