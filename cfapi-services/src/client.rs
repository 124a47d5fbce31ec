//! The Cloudflare API client.

use crate::builder::CloudflareBuilder;
use cfapi_core::{BaseClient, ClientConfig, Result};

/// Client for the Cloudflare v4 API.
///
/// Holds only configuration and the HTTP transport; every operation is a
/// stateless round trip. The client is cheap to clone and safe to share
/// across tasks.
///
/// # Example
///
/// ```no_run
/// use cfapi_services::Cloudflare;
///
/// # async fn example() -> cfapi_core::Result<()> {
/// use cfapi_services::StreamListParameters;
///
/// let cf = Cloudflare::builder()
///     .api_token("your-api-token")
///     .build()?;
///
/// let videos = cf
///     .stream_list_videos(&StreamListParameters {
///         account_id: "01a7362d577a6c3019a474fd6f485823".into(),
///         ..Default::default()
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Cloudflare {
    /// Shared request plumbing.
    base: BaseClient,
}

impl Cloudflare {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(config)?,
        })
    }

    /// Returns a fluent builder.
    #[must_use]
    pub fn builder() -> CloudflareBuilder {
        CloudflareBuilder::new()
    }

    /// Access to the shared request plumbing.
    pub(crate) fn base(&self) -> &BaseClient {
        &self.base
    }
}
