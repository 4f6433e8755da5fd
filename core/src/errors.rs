/// Error types for the Merchdesk dashboard core.
use thiserror::Error;

/// Errors surfaced by the external fetch boundary (Graph API client,
/// configuration loading). The selection, filter, and query layers are
/// infallible by design: bad foreign keys are handled by omission, never by
/// raising an error, and a failed fetch must not corrupt selection or
/// filter state.
#[derive(Error, Debug)]
pub enum AdsApiError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Config file error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type for fetch-boundary operations.
pub type AdsApiResult<T> = Result<T, AdsApiError>;
