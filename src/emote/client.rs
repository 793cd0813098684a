//! Upstream emote API client.
//!
//! One GET per invocation against the caller-supplied server, bounded by an
//! 8-second timeout. No retries.

use once_cell::sync::Lazy;
use reqwest::Client;
use reqwest::header;
use std::time::Duration;
use tokio::time::timeout;

use crate::errors::RelayError;

/// User agent presented to the upstream emote API.
pub const BOT_USER_AGENT: &str = "NOVRA-X-Bot/1.0";

/// Bound on the outbound call, measured from just before the send.
pub const EMOTE_TIMEOUT: Duration = Duration::from_secs(8);

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(BOT_USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
});

/// Status and body text of a completed upstream call.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Sends the emote request upstream with the standard 8-second bound.
///
/// # Errors
///
/// Returns [`RelayError::Timeout`] if the upstream does not answer within
/// [`EMOTE_TIMEOUT`], or [`RelayError::HttpError`] for any other failure.
pub async fn send_emote(url: &str) -> Result<UpstreamResponse, RelayError> {
    fetch_with_timeout(url, EMOTE_TIMEOUT).await
}

/// Performs a single GET with an explicit timeout bound.
///
/// The bound covers the request up to the response headers; once those
/// arrive the timer is disarmed and the body is read in full. Upstream
/// error statuses are not failures here, the status is relayed as data.
pub async fn fetch_with_timeout(
    url: &str,
    bound: Duration,
) -> Result<UpstreamResponse, RelayError> {
    let response = timeout(
        bound,
        HTTP_CLIENT
            .get(url)
            .header(header::ACCEPT, "*/*")
            .header(header::CONNECTION, "keep-alive")
            .send(),
    )
    .await??;

    let status = response.status().as_u16();
    let body = response.text().await?;

    Ok(UpstreamResponse { status, body })
}
