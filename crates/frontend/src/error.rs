//! Top-level error type.
//!
//! Handlers convert failures into visible messages or redirects before they
//! reach this type; `AppError` exists for the seams where that conversion is
//! not possible (startup, credential persistence).

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::session::StoreError;

/// Application-level error for the headless client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The credential store failed.
    #[error("credential store error: {0}")]
    CredentialStore(#[from] StoreError),

    /// A client-side precondition was not met; no request was issued.
    #[error("validation failed: {0}")]
    ValidationFailed(String),
}
