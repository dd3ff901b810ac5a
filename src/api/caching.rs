//! Caching Middleware
//!
//! Memoizes assembled response bodies behind a key derived from the request
//! path. On a hit the stored body is returned immediately and the handler
//! never runs; on a miss the handler's output is buffered and stored, but
//! only when the handler succeeded. Error bodies are never cached.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::handlers::AppState;

// == Cache Key ==
/// Normalizes a request path into a cache key: lowercase with the trailing
/// slash stripped. Routes are purely path-parameterized, so the query string
/// is not part of the key.
pub fn cache_key(path: &str) -> String {
    let lowered = path.to_ascii_lowercase();
    let trimmed = lowered.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

// == Middleware ==
/// Per-request flow: look up the normalized path, short-circuit on a live
/// entry, otherwise run the handler and store its body iff the status is
/// 200 OK.
pub async fn cache_layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    // Only GET responses are memoized; anything else falls straight through
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let key = cache_key(req.uri().path());

    if let Some(body) = state.cache.write().await.get(&key) {
        debug!(key = %key, "cache hit");
        return cached_response(body);
    }
    debug!(key = %key, "cache miss");

    let response = next.run(req).await;

    // A failed handler propagates untouched; only full 200 bodies are stored
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "failed to buffer response body for caching");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match std::str::from_utf8(&bytes) {
        Ok(text) => state.cache.write().await.set(key, text.to_string()),
        Err(err) => warn!(key = %key, error = %err, "refusing to cache non-UTF-8 body"),
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Rebuilds a response from a stored JSON body.
fn cached_response(body: String) -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
