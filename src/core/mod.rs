pub mod config;
pub mod error;
pub mod message;
pub mod severity;
pub mod sink;

pub use config::{init, init_once, tag, LogConfig, DEFAULT_TAG};
pub use error::LogError;
pub use message::{fatal_at, LogMessage};
pub use severity::Severity;
pub use sink::{platform_sink, LogFacadeSink, LogSink, StderrSink};
#[cfg(target_os = "android")]
pub use sink::LogcatSink;
