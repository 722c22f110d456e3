//! Error types

/// Errors raised while configuring or installing the logger
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Filter directive could not be parsed
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// Configuration value is not recognised
    #[error("configuration error: {0}")]
    Config(String),

    /// A global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;
