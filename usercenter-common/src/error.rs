//! Error types shared by the account UI crates

use thiserror::Error;

/// Invalid UI configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("per_page must be greater than zero")]
    ZeroPerPage,

    #[error("window_size must be greater than zero")]
    ZeroWindowSize,

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A form field name that is not part of the profile form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile field: {0}")]
pub struct ParseFieldError(pub String);
