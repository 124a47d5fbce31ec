//! Client configuration types.

use crate::auth::Credentials;
use crate::http_client::HttpConfig;

/// Default base URL for the Cloudflare v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy URL (e.g., "http://127.0.0.1:8080").
    pub url: String,
    /// Optional username for authentication.
    pub username: Option<String>,
    /// Optional password for authentication.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Create a new proxy configuration with just a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set credentials for the proxy.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Configuration for a Cloudflare API client.
///
/// Holds the base URL, optional credentials, and transport options. The
/// fluent builder lives with the client type in `cfapi-services`; this
/// struct is plain data.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL. Overridable for tests against a mock server.
    pub base_url: String,
    /// Optional credentials rendered into auth headers on every request.
    pub credentials: Option<Credentials>,
    /// HTTP transport options.
    pub http: HttpConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            http: HttpConfig::default(),
        }
    }
}
