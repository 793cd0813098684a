use serde_json::Value;

use crate::core::models::EmoteParams;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Extracts the HTTP method from an API Gateway proxy event.
///
/// Payload format 2.0 carries it under `requestContext.http.method`; 1.0
/// under a top-level `httpMethod`.
pub fn http_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Extracts the query parameters from an API Gateway proxy event.
///
/// An absent or `null` `queryStringParameters` yields the empty parameter
/// set, which fails validation downstream.
pub fn query_params(payload: &Value) -> EmoteParams {
    payload
        .get("queryStringParameters")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
