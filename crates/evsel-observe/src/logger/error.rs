use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("unknown log format {0:?} (expected text or json)")]
    InvalidFormat(String),
    #[error("invalid log filter {0:?}")]
    InvalidLogLevel(String),
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}
