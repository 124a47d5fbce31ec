//! # cfapi
//!
//! A typed async Rust client for Cloudflare edge-platform APIs, currently
//! covering zone bot-management configuration and Stream video management.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio and reqwest
//! - **Type Safety**: Every endpoint maps to typed parameter and result structs
//! - **Stateless**: One validated request and one decoded response per call,
//!   with no retries, caching, or shared mutable state
//! - **Typed Errors**: Validation, transport, decode, and local-file failures
//!   stay pairwise distinguishable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfapi::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let cf = Cloudflare::builder().api_token("your-api-token").build()?;
//!
//!     let video = cf
//!         .stream_get_video(&StreamParameters {
//!             account_id: "01a7362d577a6c3019a474fd6f485823".into(),
//!             video_id: "ea95132c15732412d22c1476fa83f27a".into(),
//!         })
//!         .await?;
//!     println!("{} is {}", video.uid, video.status.state);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Re-export core types
pub use cfapi_core::{
    Credentials, Envelope, Error, NetworkError, ParseError, RequestError, Result, ResultInfo,
};

// Re-export service implementations
pub use cfapi_services::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use cfapi_core::{
        Credentials, Error, NetworkError, ParseError, RequestError, Result, ResultInfo,
    };
    pub use cfapi_services::*;
}
