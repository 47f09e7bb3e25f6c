//! Error types for workout plan generation and the CLI host.

use thiserror::Error;

/// Failures raised by the completion service or the HTTP layer in front of it
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider authentication failed: {0}")]
    AuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Provider model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider client error: {0}")]
    Client(String),
}

/// The two failure kinds a generation attempt can end in.
///
/// Both are terminal for the attempt. Neither is retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Deployment problem detected before any network call (missing credential).
    #[error("{0}")]
    Configuration(String),

    /// Anything the completion service call itself raised.
    #[error("{0}")]
    Service(#[from] ProviderError),
}

impl GenerationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::Configuration(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, GenerationError::Service(_))
    }
}

/// Host-level errors: configuration loading, user input, runtime setup
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
