//! Log severity levels

use std::fmt;
use std::str::FromStr;

use crate::error::SpoorError;

/// Ordered log severity
///
/// A thin wrapper over the ordinal so that any integer is representable:
/// comparisons stay well defined and values outside the named range render
/// as `UNKNOWN` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(i32);

impl LogLevel {
    pub const DEBUG: LogLevel = LogLevel(0);
    pub const INFO: LogLevel = LogLevel(1);
    pub const WARNING: LogLevel = LogLevel(2);
    pub const ERROR: LogLevel = LogLevel(3);
    pub const CRITICAL: LogLevel = LogLevel(4);
    pub const FATAL: LogLevel = LogLevel(5);

    /// Build a level from a raw ordinal; no validation is performed
    pub const fn from_ordinal(ordinal: i32) -> Self {
        LogLevel(ordinal)
    }

    /// The underlying ordinal
    pub const fn ordinal(self) -> i32 {
        self.0
    }

    /// Rendered name of the level
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARNING => "WARNING",
            LogLevel::ERROR => "ERROR",
            LogLevel::CRITICAL => "CRITICAL",
            LogLevel::FATAL => "FATAL",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = SpoorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::DEBUG),
            "info" => Ok(LogLevel::INFO),
            "warning" | "warn" => Ok(LogLevel::WARNING),
            "error" => Ok(LogLevel::ERROR),
            "critical" => Ok(LogLevel::CRITICAL),
            "fatal" => Ok(LogLevel::FATAL),
            _ => Err(SpoorError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::DEBUG < LogLevel::INFO);
        assert!(LogLevel::INFO < LogLevel::WARNING);
        assert!(LogLevel::WARNING < LogLevel::ERROR);
        assert!(LogLevel::ERROR < LogLevel::CRITICAL);
        assert!(LogLevel::CRITICAL < LogLevel::FATAL);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(LogLevel::DEBUG.as_str(), "DEBUG");
        assert_eq!(LogLevel::INFO.as_str(), "INFO");
        assert_eq!(LogLevel::WARNING.as_str(), "WARNING");
        assert_eq!(LogLevel::ERROR.to_string(), "ERROR");
        assert_eq!(LogLevel::CRITICAL.to_string(), "CRITICAL");
        assert_eq!(LogLevel::FATAL.to_string(), "FATAL");
    }

    #[test]
    fn test_out_of_range_level() {
        let odd = LogLevel::from_ordinal(42);
        assert_eq!(odd.as_str(), "UNKNOWN");
        assert!(odd > LogLevel::FATAL);
        assert!(LogLevel::from_ordinal(-1) < LogLevel::DEBUG);
        assert_eq!(LogLevel::from_ordinal(-1).to_string(), "UNKNOWN");
    }

    #[test]
    fn test_default_is_debug() {
        assert_eq!(LogLevel::default(), LogLevel::DEBUG);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::WARNING);
        assert_eq!("CRITICAL".parse::<LogLevel>().unwrap(), LogLevel::CRITICAL);
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(SpoorError::UnknownLevel(_))
        ));
    }
}
