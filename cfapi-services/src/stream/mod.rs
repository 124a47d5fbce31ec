//! Stream video management.
//!
//! Account-scoped video CRUD, listing, uploads (remote-URL copy, multipart
//! file, direct-upload URL), embed-HTML retrieval, NFT association, and
//! signed playback tokens.

pub mod params;
mod rest;
pub mod types;

pub use params::{
    StreamAccessRule, StreamCreateVideoParameters, StreamListParameters, StreamParameters,
    StreamSignedUrlParameters, StreamUploadFileParameters, StreamUploadFromUrlParameters,
    StreamVideoNftParameters, StreamWatermarkRef,
};
pub use types::{
    StreamSignedToken, StreamVideo, StreamVideoCreate, StreamVideoInput, StreamVideoNft,
    StreamVideoPlayback, StreamVideoStatus, StreamVideoWatermark,
};
