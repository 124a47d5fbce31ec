//! Stream video resource types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A Stream video resource.
///
/// Mirrors the JSON shape returned under `result` by the Stream endpoints.
/// Timestamps are nullable on the wire and stay `Option` here; `meta` is a
/// free-form mapping with no schema assumed by this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamVideo {
    /// Origins allowed to display the video.
    pub allowed_origins: Vec<String>,
    /// When the video was created.
    pub created: Option<DateTime<Utc>>,
    /// Duration in seconds.
    pub duration: f64,
    /// Source dimensions.
    pub input: StreamVideoInput,
    /// Maximum allowed duration in seconds.
    pub max_duration_seconds: u32,
    /// Free-form caller-supplied metadata.
    pub meta: HashMap<String, Value>,
    /// When the video was last modified.
    pub modified: Option<DateTime<Utc>>,
    /// When the pending upload link expires.
    pub upload_expiry: Option<DateTime<Utc>>,
    /// Playback manifest URLs.
    pub playback: StreamVideoPlayback,
    /// Preview page URL.
    pub preview: String,
    /// Whether the video is ready to stream.
    pub ready_to_stream: bool,
    /// Whether playback requires signed URLs.
    #[serde(rename = "requireSignedURLs")]
    pub require_signed_urls: bool,
    /// Size in bytes.
    pub size: u64,
    /// Processing status.
    pub status: StreamVideoStatus,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Thumbnail position as a fraction of the duration.
    pub thumbnail_timestamp_pct: f64,
    /// Unique identifier.
    pub uid: String,
    /// Creator identifier.
    pub creator: String,
    /// Associated live input, if the video was recorded from one.
    pub live_input: String,
    /// When the upload completed.
    pub uploaded: Option<DateTime<Utc>>,
    /// Watermark applied to the video, if any.
    pub watermark: Option<StreamVideoWatermark>,
    /// Associated NFT, if any.
    pub nft: Option<StreamVideoNft>,
    /// When the video is scheduled for deletion, if at all.
    pub scheduled_deletion: Option<DateTime<Utc>>,
}

/// Source dimensions of an uploaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreamVideoInput {
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
}

/// Playback manifest URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreamVideoPlayback {
    /// HLS manifest URL.
    pub hls: String,
    /// DASH manifest URL.
    pub dash: String,
}

/// Processing status of a video.
///
/// `pct_complete` is a string on the wire, not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamVideoStatus {
    /// Processing state, e.g. `inprogress` or `ready`.
    pub state: String,
    /// Completion percentage as reported by the service.
    pub pct_complete: String,
    /// Machine-readable error code when processing failed.
    pub error_reason_code: String,
    /// Human-readable error description when processing failed.
    pub error_reason_text: String,
}

/// An image overlay applied to a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamVideoWatermark {
    /// Unique identifier.
    pub uid: String,
    /// Image size in bytes.
    pub size: u64,
    /// Image height in pixels.
    pub height: u32,
    /// Image width in pixels.
    pub width: u32,
    /// When the watermark profile was created.
    pub created: Option<DateTime<Utc>>,
    /// Where the image was originally fetched from.
    pub downloaded_from: String,
    /// Display name.
    pub name: String,
    /// Opacity as a fraction.
    pub opacity: f64,
    /// Padding as a fraction of the frame.
    pub padding: f64,
    /// Scale as a fraction of the frame.
    pub scale: f64,
    /// Overlay position, e.g. `center` or `upperRight`.
    pub position: String,
}

/// NFT association of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreamVideoNft {
    /// Contract address.
    pub contract: String,
    /// Token number within the contract.
    pub token: u64,
}

/// Result of creating a direct-upload URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StreamVideoCreate {
    /// One-time upload URL handed to the end user.
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
    /// Identifier reserved for the video.
    pub uid: String,
    /// Watermark that will be applied, if any.
    pub watermark: Option<StreamVideoWatermark>,
}

/// Payload of a signed-URL token response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreamSignedToken {
    /// The signed token.
    pub token: String,
}
