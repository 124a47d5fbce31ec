//! Service-reported API error details.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single code/message pair from the envelope `errors` or `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ApiMessage {
    /// Numeric service error code.
    #[serde(default)]
    pub code: i64,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Details of a failure reported by the service itself.
///
/// Produced when a response carries the envelope but `success` is `false`.
/// Boxed inside [`Error::Api`](crate::error::Error::Api) to keep the error
/// enum small.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiErrorDetails {
    /// Errors reported by the service.
    pub errors: Vec<ApiMessage>,
    /// Informational messages accompanying the failure.
    pub messages: Vec<ApiMessage>,
}

impl ApiErrorDetails {
    /// Returns the first service error code, if any.
    #[must_use]
    pub fn first_code(&self) -> Option<i64> {
        self.errors.first().map(|e| e.code)
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "request was unsuccessful");
        }
        let rendered: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(", "))
    }
}

impl std::error::Error for ApiErrorDetails {}
