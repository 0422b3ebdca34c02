//! Public cache header middleware.

use axum::{
    body::Body,
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        Request,
    },
    middleware::Next,
    response::Response,
};

/// Cache headers middleware.
///
/// Adds `Cache-Control: public, max-age=<max_age_secs>` to every response
/// that does not already set a cache header.
pub async fn cache_headers(max_age_secs: u64, req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    if !headers.contains_key(CACHE_CONTROL) {
        if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={max_age_secs}")) {
            headers.insert(CACHE_CONTROL, value);
        }
    }

    response
}
