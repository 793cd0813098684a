//! Emote Relay - a Lambda proxy that forwards emote triggers to a game server.
//!
//! This crate implements a single API Lambda that sits between a browser
//! widget and a third-party emote API:
//! 1. The handler validates the inbound GET request and its query parameters
//! 2. It issues one outbound GET to `{server}/join` with an 8-second bound
//! 3. The upstream outcome is relayed back as JSON with permissive CORS
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution, one invocation per relay
//! - reqwest for the outbound call
//! - Tokio for the async runtime and the timeout bound
//! - tracing for structured CloudWatch logs
//!
//! # Example
//!
//! ```
//! use emote_relay::core::models::EmoteParams;
//!
//! let params = EmoteParams {
//!     server: Some("http://emote.example".to_string()),
//!     tc: Some("TOKEN".to_string()),
//!     uid1: Some("111".to_string()),
//!     emote_id: Some("42".to_string()),
//!     ..EmoteParams::default()
//! };
//!
//! let request = params.validate()?;
//! assert_eq!(
//!     request.join_url(),
//!     "http://emote.example/join?tc=TOKEN&uid1=111&emote_id=42"
//! );
//! # Ok::<(), emote_relay::RelayError>(())
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod emote;
pub mod errors;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
