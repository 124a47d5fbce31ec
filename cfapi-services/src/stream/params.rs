//! Parameter structs for Stream operations.
//!
//! Each struct carries its routing identifiers (never serialized) plus the
//! optional fields to send. `validate()` checks rules in a fixed
//! outer-to-inner order and returns the first violated sentinel, so a
//! caller with several mistakes always sees the outermost one first and no
//! network I/O ever happens on invalid input.

use cfapi_core::error::{RequestError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// Routing parameters for single-video operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamParameters {
    /// Account owning the video.
    pub account_id: String,
    /// Video to operate on.
    pub video_id: String,
}

impl StreamParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        if self.video_id.is_empty() {
            return Err(RequestError::MissingVideoId.into());
        }
        Ok(())
    }
}

/// Parameters for listing videos.
///
/// Everything except `account_id` becomes a query parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StreamListParameters {
    /// Account to list videos for.
    pub account_id: String,
    /// Only return videos created after this time.
    pub after: Option<DateTime<Utc>>,
    /// Only return videos created before this time.
    pub before: Option<DateTime<Utc>>,
    /// Filter by creator identifier.
    pub creator: Option<String>,
    /// Whether to include total counts in the response.
    pub include_counts: Option<bool>,
    /// Search by video name.
    pub search: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Sort ascending by creation time.
    pub asc: Option<bool>,
    /// Filter by processing status.
    pub status: Option<String>,
}

impl StreamListParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        Ok(())
    }

    /// Renders the query string, starting with `?`, or an empty string.
    pub(crate) fn query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(after) = &self.after {
            pairs.push(("after", after.to_rfc3339()));
        }
        if let Some(before) = &self.before {
            pairs.push(("before", before.to_rfc3339()));
        }
        if let Some(creator) = &self.creator {
            pairs.push(("creator", creator.clone()));
        }
        if let Some(include_counts) = self.include_counts {
            pairs.push(("include_counts", include_counts.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(asc) = self.asc {
            pairs.push(("asc", asc.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }

        if pairs.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// Reference to an existing watermark profile by UID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StreamWatermarkRef {
    /// Watermark profile UID.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

/// Parameters for copying a video from a remote URL.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreamUploadFromUrlParameters {
    /// Account to upload into. Never serialized.
    #[serde(skip)]
    pub account_id: String,
    /// Remote URL to fetch the video from.
    pub url: String,
    /// Creator identifier to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Thumbnail position as a fraction of the duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_timestamp_pct: Option<f64>,
    /// Origins allowed to display the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    /// Whether playback requires signed URLs.
    #[serde(rename = "requireSignedURLs", skip_serializing_if = "Option::is_none")]
    pub require_signed_urls: Option<bool>,
    /// Watermark profile to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<StreamWatermarkRef>,
    /// Free-form metadata to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
}

impl StreamUploadFromUrlParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        if self.url.is_empty() {
            return Err(RequestError::MissingUploadUrl.into());
        }
        Ok(())
    }
}

/// Parameters for uploading a local video file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamUploadFileParameters {
    /// Account to upload into.
    pub account_id: String,
    /// Optional identifier to assign to the video.
    pub video_id: String,
    /// Local file to upload.
    pub file_path: PathBuf,
}

impl StreamUploadFileParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        if self.file_path.as_os_str().is_empty() {
            return Err(RequestError::MissingFilePath.into());
        }
        Ok(())
    }
}

/// Parameters for creating a direct-upload URL.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreamCreateVideoParameters {
    /// Account to create the video in. Never serialized.
    #[serde(skip)]
    pub account_id: String,
    /// Maximum allowed duration in seconds. Required and non-zero.
    pub max_duration_seconds: u32,
    /// When the upload URL expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    /// Creator identifier to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Thumbnail position as a fraction of the duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_timestamp_pct: Option<f64>,
    /// Origins allowed to display the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    /// Whether playback requires signed URLs.
    #[serde(rename = "requireSignedURLs", skip_serializing_if = "Option::is_none")]
    pub require_signed_urls: Option<bool>,
    /// Watermark profile to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<StreamWatermarkRef>,
    /// Free-form metadata to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
}

impl StreamCreateVideoParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        if self.max_duration_seconds == 0 {
            return Err(RequestError::MissingMaxDuration.into());
        }
        Ok(())
    }
}

/// Parameters for associating an NFT with a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StreamVideoNftParameters {
    /// Account owning the video. Never serialized.
    #[serde(skip)]
    pub account_id: String,
    /// Video to associate. Never serialized.
    #[serde(skip)]
    pub video_id: String,
    /// Contract address.
    pub contract: String,
    /// Token number within the contract.
    pub token: u64,
}

impl StreamVideoNftParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        if self.video_id.is_empty() {
            return Err(RequestError::MissingVideoId.into());
        }
        Ok(())
    }
}

/// A playback access rule attached to a signed-URL token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StreamAccessRule {
    /// Rule type, e.g. `ip.geoip.country` or `any`.
    #[serde(rename = "type")]
    pub rule_type: String,
    /// Country codes the rule applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
    /// IP ranges the rule applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Vec<String>>,
    /// `allow` or `block`.
    pub action: String,
}

/// Parameters for creating a signed playback token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StreamSignedUrlParameters {
    /// Account owning the video. Never serialized.
    #[serde(skip)]
    pub account_id: String,
    /// Video to sign for. Never serialized.
    #[serde(skip)]
    pub video_id: String,
    /// Signing key identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Signing key in PEM format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pem: Option<String>,
    /// Expiry as a Unix timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not-before as a Unix timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Whether the token permits downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,
    /// Playback access rules.
    #[serde(rename = "accessRules", skip_serializing_if = "Option::is_none")]
    pub access_rules: Option<Vec<StreamAccessRule>>,
}

impl StreamSignedUrlParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(RequestError::MissingAccountId.into());
        }
        if self.video_id.is_empty() {
            return Err(RequestError::MissingVideoId.into());
        }
        Ok(())
    }
}
