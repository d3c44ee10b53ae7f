//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout must exceed the AI client timeout and the maximum poll wait")]
    RequestTimeoutTooShort,

    #[error("Invalid AI client timeout")]
    InvalidAiTimeout,

    #[error("Poll interval must be greater than zero")]
    InvalidPollInterval,

    #[error("Maximum poll wait is shorter than the poll interval")]
    PollWaitTooShort,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Chat max tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("Rate refresh interval must be greater than zero")]
    InvalidRefreshInterval,
}
