//! Response-decoding error types.

use std::borrow::Cow;
use thiserror::Error;

/// Errors raised while decoding API responses.
///
/// Decode failures are always distinguishable from validation errors
/// ([`RequestError`](crate::error::RequestError)) and transport errors
/// ([`NetworkError`](crate::error::NetworkError)): a caller matching on
/// [`Error::Parse`](crate::error::Error::Parse) sees only problems with the
/// bytes the server actually returned.
///
/// # Memory Optimization
///
/// Uses `Cow<'static, str>` for field names to avoid allocation when using
/// static strings:
///
/// ```rust
/// use cfapi_core::error::ParseError;
///
/// // Zero allocation (static string)
/// let err = ParseError::missing_field("result");
///
/// // Allocation only when needed (dynamic string)
/// let field = format!("result[{}]", 3);
/// let err = ParseError::missing_field_owned(field);
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// Response body was not the expected JSON envelope.
    ///
    /// Wraps the underlying serde failure with a fixed context message so
    /// malformed bodies on otherwise-successful responses surface as decode
    /// errors rather than panics or silent defaults.
    #[error("unable to unmarshal response: {0}")]
    Envelope(#[source] serde_json::Error),

    /// Failed to deserialize JSON outside the envelope path.
    #[error("Failed to deserialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required field in response.
    #[error("Missing required field: {0}")]
    MissingField(Cow<'static, str>),

    /// Invalid value for a field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: Cow<'static, str>,
        /// Error message
        message: Cow<'static, str>,
    },
}

impl ParseError {
    /// Creates a `MissingField` error with a static string (no allocation).
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(Cow::Borrowed(field))
    }

    /// Creates a `MissingField` error with a dynamic string.
    #[must_use]
    pub fn missing_field_owned(field: String) -> Self {
        Self::MissingField(Cow::Owned(field))
    }

    /// Creates an `InvalidValue` error.
    pub fn invalid_value(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
