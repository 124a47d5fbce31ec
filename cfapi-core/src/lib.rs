//! Core library for the cfapi Cloudflare client.
//!
//! Provides the transport wrapper, configuration, credentials, error
//! taxonomy, and response-envelope decoding shared by every endpoint
//! family. The mapping layer here is deliberately thin: validate
//! parameters, build one request, make one network call, decode one
//! response. There are no retries, no caching, and no shared mutable
//! state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod logging;

pub use auth::Credentials;
pub use client::BaseClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, ProxyConfig};
pub use envelope::{Envelope, ResultInfo};
pub use error::{
    ApiErrorDetails, ApiMessage, Error, NetworkError, ParseError, RequestError, Result,
};
pub use http_client::{HttpClient, HttpConfig};
