use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("log sink already initialized")]
    AlreadyInitialized,
    #[error("invalid log tag: {0:?}")]
    InvalidTag(String),
}
