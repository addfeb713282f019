//! Error types

mod api;
mod form;

pub use api::*;
pub use form::*;

/// Top-level error type for all rackwise operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error during an API call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid form input.
    #[error(transparent)]
    Form(#[from] FormError),

    /// JSON serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The operation was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,
}

impl Error {
    /// Translates the error into a uniform user-facing message.
    ///
    /// Actions surface this string as the failure outcome instead of the raw
    /// error chain, so notifications stay readable regardless of which layer
    /// produced the failure.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(ApiError::Http { status, .. }) => {
                format!("The server rejected the request (HTTP {})", status)
            }
            Error::Api(ApiError::Network(_)) => {
                "Could not reach the server, check your connection".to_string()
            }
            Error::Api(ApiError::Timeout(_)) => "The request timed out".to_string(),
            Error::Api(ApiError::InvalidUrl(_)) => "The service URL is invalid".to_string(),
            Error::Api(ApiError::Parse { .. }) => {
                "The server returned an unexpected response".to_string()
            }
            Error::Form(e) => e.to_string(),
            Error::Serialization(_) => "The request could not be encoded".to_string(),
            Error::Cancelled => "The operation was cancelled".to_string(),
        }
    }
}
