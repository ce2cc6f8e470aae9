//! Error types for route generation.

use thiserror::Error;

/// Route registry errors.
#[derive(Debug, Error)]
pub enum RouteError {
    /// No template is registered under this key.
    #[error("route not found: {0}")]
    UnknownRoute(String),

    /// Configuration could not be parsed.
    #[error("invalid routes config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type alias for route operations.
pub type Result<T> = std::result::Result<T, RouteError>;
