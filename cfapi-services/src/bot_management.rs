//! Zone bot-management configuration.
//!
//! Two operations against `/zones/{zone}/bot_management`. The endpoint
//! family is mid-migration to API version 2.0.0, so every request carries a
//! fixed `Cloudflare-Version: 2.0.0` header. The header is injected at
//! request-build time and is not user-configurable; it goes away once the
//! migration completes upstream.

use crate::client::Cloudflare;
use cfapi_core::error::{RequestError, Result};
use cfapi_core::{envelope, ResultInfo};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Zone bot-management configuration.
///
/// Every field is optional: absence means "unspecified", not false/empty.
/// The same struct round-trips as the `result` payload of both operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BotManagement {
    /// Whether to serve the JavaScript detection challenge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_js: Option<bool>,
    /// Whether bot fight mode is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fight_mode: Option<bool>,
    /// Action for definitely-automated traffic (super bot fight mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_definitely_automated: Option<String>,
    /// Action for likely-automated traffic (super bot fight mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_likely_automated: Option<String>,
    /// Action for verified bots (super bot fight mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_verified_bots: Option<String>,
    /// Whether static resources are protected (super bot fight mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_static_resource_protection: Option<bool>,
    /// Whether WordPress-specific optimizations are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_wordpress: Option<bool>,
    /// Whether session scores are suppressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_session_score: Option<bool>,
    /// Whether the detection model auto-updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update_model: Option<bool>,
    /// Whether the zone is on the latest detection model. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using_latest_model: Option<bool>,
}

/// Parameters for [`Cloudflare::update_bot_management`].
///
/// Only explicitly set fields are serialized, so a partial update sends
/// exactly what the caller provided. Whether the server merges or
/// overwrites unset fields is the remote API's contract, not verified here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct UpdateBotManagementParams {
    /// Zone to update. Routing identifier, never serialized.
    #[serde(skip)]
    pub zone_id: String,
    /// See [`BotManagement::enable_js`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_js: Option<bool>,
    /// See [`BotManagement::fight_mode`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fight_mode: Option<bool>,
    /// See [`BotManagement::sbfm_definitely_automated`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_definitely_automated: Option<String>,
    /// See [`BotManagement::sbfm_likely_automated`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_likely_automated: Option<String>,
    /// See [`BotManagement::sbfm_verified_bots`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_verified_bots: Option<String>,
    /// See [`BotManagement::sbfm_static_resource_protection`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbfm_static_resource_protection: Option<bool>,
    /// See [`BotManagement::optimize_wordpress`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimize_wordpress: Option<bool>,
    /// See [`BotManagement::suppress_session_score`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_session_score: Option<bool>,
    /// See [`BotManagement::auto_update_model`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update_model: Option<bool>,
}

impl UpdateBotManagementParams {
    fn validate(&self) -> Result<()> {
        if self.zone_id.is_empty() {
            return Err(RequestError::MissingZoneId.into());
        }
        Ok(())
    }
}

/// Fixed API-version header for the bot-management family.
fn bot_v2_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("cloudflare-version"),
        HeaderValue::from_static("2.0.0"),
    );
    headers
}

impl Cloudflare {
    /// Fetches a zone's bot-management configuration.
    ///
    /// GET `/zones/{zone}/bot_management`.
    ///
    /// # Errors
    ///
    /// - [`RequestError::MissingZoneId`] when `zone_id` is empty (no I/O)
    /// - Transport, API, or decode errors from the round trip
    pub async fn get_bot_management(
        &self,
        zone_id: &str,
    ) -> Result<(BotManagement, ResultInfo)> {
        if zone_id.is_empty() {
            return Err(RequestError::MissingZoneId.into());
        }

        let path = format!("/zones/{zone_id}/bot_management");
        let body = self
            .base()
            .request(Method::GET, &path, Some(bot_v2_headers()), None)
            .await?;

        let env = envelope::decode::<BotManagement>(&body)?;
        let info = env.result_info();
        Ok((env.into_result()?, info))
    }

    /// Updates a zone's bot-management configuration.
    ///
    /// PUT `/zones/{zone}/bot_management`, sending only the fields set in
    /// `params`.
    ///
    /// # Errors
    ///
    /// - [`RequestError::MissingZoneId`] when the zone is unset (no I/O)
    /// - Transport, API, or decode errors from the round trip
    pub async fn update_bot_management(
        &self,
        params: &UpdateBotManagementParams,
    ) -> Result<BotManagement> {
        params.validate()?;

        let path = format!("/zones/{}/bot_management", params.zone_id);
        let body = serde_json::to_value(params)?;
        let response = self
            .base()
            .request(Method::PUT, &path, Some(bot_v2_headers()), Some(body))
            .await?;

        envelope::decode::<BotManagement>(&response)?.into_result()
    }
}
