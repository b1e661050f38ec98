// src/logging_middleware.rs
//! Request logging: request ids, status and latency, bodies at debug level

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Bodies larger than this are passed through without being logged
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Tags every request with an `x-request-id` and logs it on the way out
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let started = Instant::now();
    let (mut parts, body) = request.into_parts();

    let request_id = parts
        .headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts
            .headers
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    let method = parts.method.clone();
    let uri = parts.uri.clone();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    log_body(&request_id, "📥 Request", &bytes);

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (mut parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    log_body(&request_id, "📤 Response", &bytes);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts
            .headers
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    let latency_ms = started.elapsed().as_millis() as u64;
    if parts.status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %parts.status,
            latency_ms = latency_ms,
            "Request failed"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %parts.status,
            latency_ms = latency_ms,
            "Request handled"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn log_body(request_id: &str, label: &str, bytes: &[u8]) {
    if bytes.is_empty() || bytes.len() > MAX_LOGGED_BODY {
        return;
    }

    if let Ok(body_str) = std::str::from_utf8(bytes) {
        // Try to parse as JSON for pretty printing
        let rendered = serde_json::from_str::<serde_json::Value>(body_str)
            .ok()
            .and_then(|json| serde_json::to_string_pretty(&json).ok())
            .unwrap_or_else(|| body_str.to_string());

        debug!(request_id = %request_id, body = %rendered, "{}", label);
    }
}
