//! The v4 API response envelope.
//!
//! Every JSON endpoint wraps its payload in the same outer structure: a
//! `success` flag, `errors`/`messages` arrays, the payload under `result`,
//! and optional pagination metadata under `result_info`. Decoding happens in
//! one place so every operation surfaces the same error shapes: malformed
//! bodies become [`ParseError::Envelope`], service-reported failures become
//! [`Error::Api`].

use crate::error::{ApiErrorDetails, ApiMessage, Error, ParseError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Pagination and result-count metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct ResultInfo {
    /// Current page number.
    #[serde(default)]
    pub page: u64,
    /// Results per page.
    #[serde(default)]
    pub per_page: u64,
    /// Number of results on this page.
    #[serde(default)]
    pub count: u64,
    /// Total number of results across pages.
    #[serde(default)]
    pub total_count: u64,
}

/// The outer JSON structure wrapping every response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Errors reported by the service.
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    /// Informational messages.
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    /// The payload. Absent or `null` on failures and empty results.
    #[serde(default)]
    pub result: Option<T>,
    /// Pagination metadata, present on list responses.
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

impl<T> Envelope<T> {
    /// Extracts the payload, failing when the envelope has no `result`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`] when `result` is absent or null.
    pub fn into_result(self) -> Result<T> {
        self.result
            .ok_or_else(|| Error::from(ParseError::missing_field("result")))
    }

    /// Returns the pagination metadata, defaulting when the service omitted it.
    #[must_use]
    pub fn result_info(&self) -> ResultInfo {
        self.result_info.unwrap_or_default()
    }
}

/// Decodes raw response bytes into an envelope.
///
/// # Errors
///
/// - [`ParseError::Envelope`] ("unable to unmarshal response") on malformed
///   JSON or an unexpected shape
/// - [`Error::Api`] when the envelope decoded but `success` is `false`
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| Error::from(ParseError::Envelope(e)))?;

    if !envelope.success {
        return Err(Error::api(ApiErrorDetails {
            errors: envelope.errors,
            messages: envelope.messages,
        }));
    }

    Ok(envelope)
}
