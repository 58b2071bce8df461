//! # Centralized Error Handling
//!
//! Error types used across the widget core. They follow the `thiserror`
//! pattern and never reach the user directly: the controller turns each one
//! into a fixed chat message, toast or status line.
//!
//! ## Error Categories
//!
//! 1. **Backend calls** - [`ApiError`]
//!    - [`Network`](ApiError::Network) → request never completed
//!    - [`Status`](ApiError::Status) → non-success HTTP status without a usable body
//!    - [`Server`](ApiError::Server) → body decoded and carried an `error` field
//!    - [`Decode`](ApiError::Decode) → body was not the expected JSON
//!
//! 2. **Widget errors** - [`AppError`]
//!    - [`Api`](AppError::Api), [`Storage`](AppError::Storage),
//!      [`Config`](AppError::Config)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{ApiError, AppError, Result};
//!
//! fn require_ok(status: u16) -> Result<()> {
//!     if status >= 400 {
//!         return Err(ApiError::Status(status).into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(require_ok(500), Err(AppError::Api(ApiError::Status(500)))));
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a single backend request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not complete (offline, DNS, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status and no decodable body.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The server reported a logical error in the `error` field.
    #[error("Server error: {0}")]
    Server(String),

    /// The body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Widget-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Browser storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid widget configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::Decode(err.to_string()))
    }
}
