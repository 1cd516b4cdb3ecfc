//! Log records and their positional arguments

use std::fmt;

use crate::level::LogLevel;

/// An opaque positional value substituted into a message template
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Capture any `Display` value as a string argument
    pub fn display(value: impl fmt::Display) -> Self {
        Arg::Str(value.to_string())
    }

    /// Type name used in formatting mismatch markers
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{}", n),
            Arg::Uint(n) => write!(f, "{}", n),
            Arg::Float(x) => write!(f, "{}", x),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

macro_rules! impl_arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_arg_from!(Int as i64: i8, i16, i32, i64, isize);
impl_arg_from!(Uint as u64: u8, u16, u32, u64, usize);
impl_arg_from!(Float as f64: f32, f64);

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

/// Snapshot of one log event
///
/// Stored verbatim; the message is only rendered when a handler formats it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    level: LogLevel,
    name: String,
    msg: String,
    args: Vec<Arg>,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        name: impl Into<String>,
        msg: impl Into<String>,
        args: impl Into<Vec<Arg>>,
    ) -> Self {
        Self {
            level,
            name: name.into(),
            msg: msg.into(),
            args: args.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Name of the logger that produced the record
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unrendered message template
    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}
