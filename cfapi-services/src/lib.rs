//! Endpoint-family implementations for the cfapi Cloudflare client.
//!
//! Each module maps one REST endpoint family onto typed operations of the
//! [`Cloudflare`] client: validate parameters, build the request, make one
//! transport call, decode the envelope.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bot_management;
pub mod builder;
mod client;
pub mod stream;

pub use bot_management::{BotManagement, UpdateBotManagementParams};
pub use builder::CloudflareBuilder;
pub use client::Cloudflare;
pub use stream::{
    StreamAccessRule, StreamCreateVideoParameters, StreamListParameters, StreamParameters,
    StreamSignedUrlParameters, StreamUploadFileParameters, StreamUploadFromUrlParameters,
    StreamVideo, StreamVideoCreate, StreamVideoInput, StreamVideoNft, StreamVideoNftParameters,
    StreamVideoPlayback, StreamVideoStatus, StreamVideoWatermark, StreamWatermarkRef,
};
