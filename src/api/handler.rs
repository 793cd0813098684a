//! API Lambda handler for the emote relay.
//!
//! This module handles:
//! - CORS preflight short-circuit (`OPTIONS`)
//! - Method gating (`GET` only otherwise)
//! - Required-parameter validation
//! - The single timed upstream call and its response mapping

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::time::Instant;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::emote;
use crate::errors::RelayError;

pub use self::function_handler as handler;

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Lambda handler for the relay entrypoint.
///
/// Every outcome, including upstream failures, is returned as a proxy
/// response; this function only errs if response serialization itself is
/// impossible, which it is not.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let started = Instant::now();

    // ========================================================================
    // Method gate
    // ========================================================================

    let method = parsing::http_method(&event.payload).unwrap_or_default();

    if method == "OPTIONS" {
        return Ok(helpers::preflight_ok());
    }

    if method != "GET" {
        info!(method = %method, "Rejecting non-GET request");
        return Ok(helpers::error_response(
            &RelayError::MethodNotAllowed,
            elapsed_ms(started),
        ));
    }

    // ========================================================================
    // Parameter validation
    // ========================================================================

    let request = match parsing::query_params(&event.payload).validate() {
        Ok(request) => request,
        Err(e) => {
            info!("Rejecting request: {}", e);
            return Ok(helpers::error_response(&e, elapsed_ms(started)));
        }
    };

    // ========================================================================
    // Upstream relay
    // ========================================================================

    let url = request.join_url();
    info!(url = %url, "Relaying emote request upstream");

    match emote::send_emote(&url).await {
        Ok(upstream) => {
            let elapsed = elapsed_ms(started);
            info!(
                elapsed_ms = elapsed,
                status = upstream.status,
                "Upstream call completed"
            );
            Ok(helpers::relay_success(&upstream, elapsed))
        }
        Err(e) => {
            let elapsed = elapsed_ms(started);
            error!(elapsed_ms = elapsed, "Upstream call failed: {}", e);
            Ok(helpers::error_response(&e, elapsed))
        }
    }
}
