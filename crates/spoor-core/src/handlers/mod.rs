//! Handlers: level-gated sinks for formatted records

mod traits;
mod stream;
mod file;

pub use traits::{shared_sink, HandlerCore, LogHandler, SharedHandler, SharedSink};
pub use stream::StreamHandler;
pub use file::FileHandler;
