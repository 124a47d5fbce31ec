//! Network-related error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Encapsulated network errors hiding implementation details.
///
/// This type wraps all transport-level failures without exposing third-party
/// library types (like `reqwest::Error`) in the public API, so the public
/// surface stays stable even if the underlying HTTP library changes.
///
/// Transport failures are passed through to callers unchanged: this layer
/// never retries and never converts a network error into anything else.
///
/// # Example
///
/// ```rust
/// use cfapi_core::error::NetworkError;
///
/// fn handle_network_error(err: NetworkError) {
///     match &err {
///         NetworkError::RequestFailed { status, message } => {
///             println!("HTTP {}: {}", status, message);
///         }
///         NetworkError::Timeout => {
///             println!("Request timed out");
///         }
///         NetworkError::ConnectionFailed(msg) => {
///             println!("Connection failed: {}", msg);
///         }
///         _ => println!("Network error: {}", err),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Request failed with a non-success HTTP status code.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Opaque transport error for underlying issues.
    /// Uses `Box<dyn StdError>` to hide implementation details while preserving the source.
    #[error("Transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

impl NetworkError {
    /// Wraps an arbitrary transport error while preserving it as a source.
    pub fn transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NetworkError::Timeout
        } else if e.is_connect() {
            NetworkError::ConnectionFailed(e.to_string())
        } else {
            NetworkError::transport(e)
        }
    }
}
