//! HTTP client abstraction layer
//!
//! Provides a unified HTTP request interface with support for:
//! - Timeout control per request
//! - Gzip compression/decompression
//! - Request and response logging with structured tracing
//! - Custom headers
//! - Proxy configuration
//! - Multipart file uploads
//!
//! Exactly one network call happens per `fetch` invocation. There is no
//! retry mechanism anywhere in this layer: transport failures surface to
//! the caller unchanged, and a cancelled or timed-out request is never
//! re-issued.
//!
//! # Observability
//!
//! This module uses the `tracing` crate for structured logging. Key events:
//! - HTTP request initiation with URL and method
//! - HTTP response status and body preview
//! - Error details with structured fields

use crate::config::ProxyConfig;
use crate::error::convert::truncate_message;
use crate::error::{ApiErrorDetails, ApiMessage, Error, NetworkError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, header::HeaderMap};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Whether to enable verbose logging
    pub verbose: bool,
    /// Default User-Agent header value
    pub user_agent: String,
    /// Optional proxy configuration
    pub proxy: Option<ProxyConfig>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            verbose: false,
            user_agent: "cfapi-rust/0.1".to_string(),
            proxy: None,
        }
    }
}

/// HTTP client wrapping `reqwest` with logging and proxy support.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Creates a new HTTP client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The proxy URL is invalid
    /// - The HTTP client cannot be built
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(&config.user_agent);

        if let Some(proxy_config) = &config.proxy {
            let mut proxy = reqwest::Proxy::all(&proxy_config.url).map_err(|e| {
                Error::from(NetworkError::ConnectionFailed(format!(
                    "Invalid proxy URL: {e}"
                )))
            })?;

            if let (Some(username), Some(password)) =
                (&proxy_config.username, &proxy_config.password)
            {
                proxy = proxy.basic_auth(username, password);
            }
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::from(NetworkError::ConnectionFailed(format!(
                "Failed to build HTTP client: {e}"
            )))
        })?;

        Ok(Self { client, config })
    }

    /// Executes a single HTTP request and returns the raw response body.
    ///
    /// The body is returned as text so callers can decode JSON envelopes or
    /// keep it verbatim for text-returning endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network communication fails or times out
    /// - The server returns a non-success status code
    #[instrument(
        name = "http_fetch",
        skip(self, headers, body),
        fields(method = %method, url = %url, has_body = body.is_some())
    )]
    pub async fn fetch(
        &self,
        method: Method,
        url: &str,
        headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> Result<String> {
        let mut request = self.client.request(method, url);

        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        if let Some(ref body) = body {
            request = request.json(body);
            if self.config.verbose {
                debug!(body = ?body, "HTTP request with body");
            }
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "HTTP request send failed");
            Error::from(e)
        })?;

        self.process_response(response).await
    }

    /// Executes a single multipart POST request and returns the raw response body.
    ///
    /// Used by file-upload operations. The form is built by the caller (see
    /// [`file_part`]); this method only performs the one network call.
    #[instrument(name = "http_fetch_multipart", skip(self, headers, form), fields(url = %url))]
    pub async fn fetch_multipart(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        form: Form,
    ) -> Result<String> {
        let mut request = self.client.post(url).multipart(form);

        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Multipart request send failed");
            Error::from(e)
        })?;

        self.process_response(response).await
    }

    /// Processes an HTTP response, mapping non-success statuses to errors.
    #[instrument(name = "http_process_response", skip(self, response), fields(status))]
    async fn process_response(&self, response: Response) -> Result<String> {
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        let body_text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            Error::from(e)
        })?;

        let body_preview: String = body_text.chars().take(200).collect();
        debug!(
            status = %status,
            body_length = body_text.len(),
            body_preview = %body_preview,
            "HTTP response received"
        );

        if !status.is_success() {
            let err = handle_http_error(status.as_u16(), &body_text);
            error!(
                status = status.as_u16(),
                error = %err,
                body_preview = %body_preview,
                "HTTP error response"
            );
            return Err(err);
        }

        Ok(body_text)
    }
}

/// Converts an HTTP error response into an [`Error`].
///
/// Error bodies that still carry the service envelope are surfaced as
/// [`Error::Api`] with their code/message pairs; anything else becomes an
/// opaque transport failure with a truncated body.
fn handle_http_error(status: u16, body: &str) -> Error {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        #[serde(default)]
        errors: Vec<ApiMessage>,
        #[serde(default)]
        messages: Vec<ApiMessage>,
    }

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if !envelope.errors.is_empty() {
            return Error::api(ApiErrorDetails {
                errors: envelope.errors,
                messages: envelope.messages,
            });
        }
    }

    Error::from(NetworkError::RequestFailed {
        status,
        message: truncate_message(body.to_string()),
    })
}

/// Reads a local file into a multipart form part named after the file.
///
/// # Errors
///
/// Returns [`Error::File`] when the file cannot be opened or read, keeping
/// local I/O failures distinct from transport errors.
pub async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::file(path, e))?;

    let file_name = path
        .file_name()
        .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());

    Ok(Part::bytes(bytes).file_name(file_name))
}

/// Builds the multipart form for a video file upload.
///
/// # Errors
///
/// Returns [`Error::File`] when the file cannot be read.
pub async fn file_upload_form(path: &Path) -> Result<Form> {
    let part = file_part(path).await?;
    Ok(Form::new().part("file", part))
}
