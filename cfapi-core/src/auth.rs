//! API credentials and auth header rendering.
//!
//! Credentials live entirely in the transport layer: operations never see
//! them, they are rendered into headers once per request.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const AUTH_KEY_HEADER: &str = "x-auth-key";
const AUTH_EMAIL_HEADER: &str = "x-auth-email";

/// Credentials for the Cloudflare API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Scoped API token, sent as `Authorization: Bearer <token>`.
    ApiToken(String),
    /// Legacy API key plus account email.
    ApiKey {
        /// Global API key.
        key: String,
        /// Account email address.
        email: String,
    },
}

impl Credentials {
    /// Renders the credentials into request headers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when a credential value cannot be
    /// encoded as a header (embedded control characters and the like).
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Credentials::ApiToken(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| Error::authentication("API token is not a valid header value"))?;
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            Credentials::ApiKey { key, email } => {
                headers.insert(
                    HeaderName::from_static(AUTH_KEY_HEADER),
                    HeaderValue::from_str(key).map_err(|_| {
                        Error::authentication("API key is not a valid header value")
                    })?,
                );
                headers.insert(
                    HeaderName::from_static(AUTH_EMAIL_HEADER),
                    HeaderValue::from_str(email).map_err(|_| {
                        Error::authentication("auth email is not a valid header value")
                    })?,
                );
            }
        }
        Ok(headers)
    }
}
