//! Unified error types for Fingermark

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Fingermark
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport errors from the underlying HTTP client
    #[error("Transport error: {0}")]
    Transport(String),

    /// Durable identity storage read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// The fingerprint engine was not registered before install
    #[error("Fingerprint engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The interception layer was already installed
    #[error("Interceptor already installed: {0}")]
    AlreadyInstalled(String),

    /// A request channel was used out of order
    #[error("Channel state error: {0}")]
    ChannelState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Error::Storage(msg.into())
    }

    /// Create a new engine unavailable error
    pub fn engine_unavailable<S: Into<String>>(msg: S) -> Self {
        Error::EngineUnavailable(msg.into())
    }

    /// Create a new already installed error
    pub fn already_installed<S: Into<String>>(msg: S) -> Self {
        Error::AlreadyInstalled(msg.into())
    }

    /// Create a new channel state error
    pub fn channel_state<S: Into<String>>(msg: S) -> Self {
        Error::ChannelState(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
