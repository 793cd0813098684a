//! Response builders for the relay handler.
//!
//! Every response is an API Gateway proxy object (`statusCode`, `headers`,
//! stringified `body`) and carries the CORS headers the widget relies on.

use serde_json::{Value, json};

use crate::core::models::REQUIRED_PARAMS;
use crate::emote::client::UpstreamResponse;
use crate::errors::RelayError;

// ============================================================================
// Headers
// ============================================================================

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "GET, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
        "Cache-Control": "no-cache",
    })
}

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with an empty body for the CORS preflight.
#[must_use]
pub fn preflight_ok() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": "",
    })
}

/// Returns a proxy response with the given status and JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    let mut headers = cors_headers();
    headers["Content-Type"] = Value::from("application/json");

    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string(),
    })
}

/// Returns the 200 envelope relaying a completed upstream call.
#[must_use]
pub fn relay_success(upstream: &UpstreamResponse, elapsed_ms: u64) -> Value {
    json_response(
        200,
        &json!({
            "success": true,
            "status": upstream.status,
            "elapsed": elapsed_ms,
            "message": "Emote sent successfully",
            "data": upstream.body,
        }),
    )
}

/// Maps a [`RelayError`] to its response shape.
#[must_use]
pub fn error_response(error: &RelayError, elapsed_ms: u64) -> Value {
    match error {
        RelayError::MethodNotAllowed => json_response(405, &json!({ "error": error.to_string() })),
        RelayError::MissingParams => json_response(
            400,
            &json!({
                "error": error.to_string(),
                "required": REQUIRED_PARAMS,
            }),
        ),
        RelayError::Timeout => json_response(
            504,
            &json!({
                "success": false,
                "error": error.to_string(),
                "elapsed": elapsed_ms,
            }),
        ),
        RelayError::HttpError(_) => json_response(
            500,
            &json!({
                "success": false,
                "error": error.to_string(),
                "elapsed": elapsed_ms,
            }),
        ),
    }
}
