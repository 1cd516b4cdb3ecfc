//! Message rendering

mod formatter;
mod printf;

pub use formatter::Formatter;
pub use printf::sprintf;
