//! Parameter-validation error sentinels.

use thiserror::Error;

/// One sentinel per required-but-missing request field.
///
/// Every operation validates its parameters before any network I/O and
/// returns the first violated rule, checked outer-to-inner: routing
/// identifier (account or zone), then resource identifier, then any
/// operation-specific required field. The variants are plain unit values so
/// callers can pattern-match or compare with `==`:
///
/// ```rust
/// use cfapi_core::error::{Error, RequestError};
///
/// fn is_missing_account(err: &Error) -> bool {
///     matches!(err, Error::Request(RequestError::MissingAccountId))
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    /// Required account ID is missing.
    #[error("required missing account ID")]
    MissingAccountId,

    /// Required zone ID is missing.
    #[error("required missing zone ID")]
    MissingZoneId,

    /// Required video ID is missing.
    #[error("required missing video ID")]
    MissingVideoId,

    /// Required upload URL is missing.
    #[error("required missing upload URL")]
    MissingUploadUrl,

    /// Required local file path is missing.
    #[error("required missing file path")]
    MissingFilePath,

    /// Required maximum duration is missing.
    #[error("required missing max duration")]
    MissingMaxDuration,
}
