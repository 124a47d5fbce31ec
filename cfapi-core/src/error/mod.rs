//! # Error Handling for cfapi
//!
//! Strongly-typed errors for the request/response mapping layer, built on
//! `thiserror`. The taxonomy keeps four failure kinds pairwise
//! distinguishable, because callers react to each differently:
//!
//! ```text
//! Error (main error type)
//! ├── Request        - Parameter validation sentinels (raised before any I/O)
//! ├── Network        - Transport-layer failures, passed through unchanged
//! ├── Parse          - Response-decoding failures
//! ├── Api            - Failures reported by the service envelope
//! ├── File           - Local file I/O on the upload path
//! ├── Authentication - Credential problems detected client-side
//! ├── Timeout        - Operation timeout
//! └── Cancelled      - Operation cancelled by the caller
//! ```
//!
//! Design constraints follow the usual production rules:
//!
//! 1. All public enums are `#[non_exhaustive]` for forward compatibility
//! 2. Large variants are boxed to keep the enum small
//! 3. String payloads use `Cow<'static, str>` so static messages allocate nothing
//! 4. No `unwrap()` or `expect()` on recoverable paths
//! 5. All error types are `Send + Sync + 'static`
//!
//! ## Quick Start
//!
//! ```rust
//! use cfapi_core::error::{Error, RequestError, Result};
//!
//! fn require_account(account_id: &str) -> Result<()> {
//!     if account_id.is_empty() {
//!         return Err(Error::Request(RequestError::MissingAccountId));
//!     }
//!     Ok(())
//! }
//! ```

pub(crate) mod convert;
mod details;
mod network;
mod parse;
mod request;


use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

pub use details::{ApiErrorDetails, ApiMessage};
pub use network::NetworkError;
pub use parse::ParseError;
pub use request::RequestError;

/// Result type alias for all cfapi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type for the `cfapi` library.
///
/// # Example
///
/// ```rust
/// use cfapi_core::error::Error;
///
/// let err = Error::authentication("Invalid API token");
/// assert!(err.to_string().contains("Invalid API token"));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failure reported by the service envelope (`success: false`).
    /// Boxed to reduce enum size.
    #[error("API error: {0}")]
    Api(Box<ApiErrorDetails>),

    /// Network-related errors encapsulating transport layer issues.
    /// Boxed to reduce enum size.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// Errors during response decoding. Boxed to reduce enum size.
    #[error("Parse error: {0}")]
    Parse(Box<ParseError>),

    /// A required request parameter was missing; raised before any I/O.
    #[error("Invalid request: {0}")]
    Request(RequestError),

    /// Local file could not be opened or read on the upload path.
    ///
    /// Kept separate from [`Error::Network`] so callers never mistake a bad
    /// local path for a transport failure.
    #[error("Failed to read file {path:?}: {source}")]
    File {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Authentication errors (missing or malformed credentials).
    #[error("Authentication error: {0}")]
    Authentication(Cow<'static, str>),

    /// Operation timeout.
    #[error("Timeout: {0}")]
    Timeout(Cow<'static, str>),

    /// Operation was cancelled by the caller before completion.
    #[error("Cancelled: {0}")]
    Cancelled(Cow<'static, str>),
}

impl Error {
    /// Creates an authentication error.
    pub fn authentication(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a cancellation error.
    pub fn cancelled(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Cancelled(message.into())
    }

    /// Creates an API error from envelope details.
    #[must_use]
    pub fn api(details: ApiErrorDetails) -> Self {
        Self::Api(Box::new(details))
    }

    /// Creates a local-file error for the upload path.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Returns the validation sentinel if this is a request error.
    #[must_use]
    pub fn as_request(&self) -> Option<RequestError> {
        match self {
            Self::Request(e) => Some(*e),
            _ => None,
        }
    }

    /// Returns `true` if this error originated in the transport layer.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Returns `true` if this error came from decoding a response body.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
