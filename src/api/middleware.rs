//! Request middleware
//!
//! Two layers wrap the router:
//!
//! - **Request-id**: propagates an inbound `X-Request-Id` header or generates
//!   a timestamp-based one, stores it in request extensions for downstream
//!   consumers, and sets it on the response.
//! - **Logging**: emits exactly one line per request (correlation id, method,
//!   path, peer address, user agent) after the handler has produced its
//!   response.

use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Correlation header name
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request correlation id, stored in request extensions
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Generate a correlation id from the current time
///
/// Nanosecond-resolution timestamps distinguish requests well enough for log
/// correlation; uniqueness is best-effort, not guaranteed.
fn next_request_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

/// Assign or propagate the request correlation id
///
/// Uses the inbound `X-Request-Id` header when present and nonempty,
/// otherwise generates one. The id is attached to the request extensions and
/// echoed on the response header. Never fails.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(next_request_id);

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// One log line per request, captured at dispatch time
///
/// Emission happens in `Drop` so the line is written even if the downstream
/// handler unwinds, mirroring a deferred log statement.
struct RequestLog {
    request_id: String,
    method: String,
    path: String,
    remote: String,
    user_agent: String,
}

impl Drop for RequestLog {
    fn drop(&mut self) {
        info!(
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            remote = %self.remote,
            user_agent = %self.user_agent,
            "request"
        );
    }
}

/// Log every request after its handler completes
///
/// Records the correlation id (or the literal "unknown" when the request-id
/// layer did not run), method, path, peer address, and user agent. The
/// response passes through untouched.
pub async fn log_request(request: Request, next: Next) -> Response {
    let log = RequestLog {
        request_id: request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        remote: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.to_string())
            .unwrap_or_else(|| "-".to_string()),
        user_agent: request
            .headers()
            .get(axum::http::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    };

    let response = next.run(request).await;

    // Emit only after the handler has fully produced the response.
    drop(log);

    response
}
