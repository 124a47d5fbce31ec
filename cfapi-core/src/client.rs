//! Base client shared by every endpoint family.
//!
//! `BaseClient` joins the configured base URL with an operation path,
//! renders auth headers, and delegates to [`HttpClient`] for the single
//! network call. Endpoint families wrap it and add their typed operations.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http_client::HttpClient;
use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

/// Shared plumbing for API clients.
#[derive(Debug, Clone)]
pub struct BaseClient {
    /// Client configuration.
    pub config: ClientConfig,
    /// Underlying HTTP transport.
    pub http_client: HttpClient,
}

impl BaseClient {
    /// Creates a base client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = HttpClient::new(config.http.clone())?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Joins the base URL with an operation path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Renders auth headers and merges any operation-specific extras.
    fn headers(&self, extra: Option<HeaderMap>) -> Result<Option<HeaderMap>> {
        let mut headers = match &self.config.credentials {
            Some(credentials) => credentials.headers()?,
            None => HeaderMap::new(),
        };

        if let Some(extra) = extra {
            headers.extend(extra);
        }

        if headers.is_empty() {
            return Ok(None);
        }
        Ok(Some(headers))
    }

    /// Issues one request against the API and returns the raw body text.
    ///
    /// Used for both JSON endpoints (callers decode the envelope) and
    /// text-returning endpoints (callers keep the body verbatim).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        extra_headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> Result<String> {
        let url = self.url(path);
        let headers = self.headers(extra_headers)?;
        debug!(path = %path, "API request");
        self.http_client.fetch(method, &url, headers, body).await
    }

    /// Issues one multipart POST request and returns the raw body text.
    pub async fn request_multipart(
        &self,
        path: &str,
        extra_headers: Option<HeaderMap>,
        form: Form,
    ) -> Result<String> {
        let url = self.url(path);
        let headers = self.headers(extra_headers)?;
        debug!(path = %path, "API multipart request");
        self.http_client.fetch_multipart(&url, headers, form).await
    }
}
