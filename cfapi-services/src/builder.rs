//! Builder pattern for constructing [`Cloudflare`] clients.

use crate::client::Cloudflare;
use cfapi_core::{ClientConfig, Credentials, ProxyConfig, Result};
use std::time::Duration;

/// Builder for creating [`Cloudflare`] client instances.
///
/// # Example
///
/// ```no_run
/// use cfapi_services::CloudflareBuilder;
/// use std::time::Duration;
///
/// let cf = CloudflareBuilder::new()
///     .api_token("your-api-token")
///     .timeout(Duration::from_secs(15))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudflareBuilder {
    config: ClientConfig,
}

impl CloudflareBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a scoped API token for authentication.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.config.credentials = Some(Credentials::ApiToken(token.into()));
        self
    }

    /// Sets a legacy API key and account email for authentication.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>, email: impl Into<String>) -> Self {
        self.config.credentials = Some(Credentials::ApiKey {
            key: key.into(),
            email: email.into(),
        });
        self
    }

    /// Overrides the API base URL. Mainly useful against a mock server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    /// Sets the User-Agent header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.http.user_agent = user_agent.into();
        self
    }

    /// Routes requests through a proxy.
    #[must_use]
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Enables verbose request/response logging.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.http.verbose = verbose;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built (for example,
    /// an invalid proxy URL).
    pub fn build(self) -> Result<Cloudflare> {
        Cloudflare::new(self.config)
    }
}
