//! Request middleware
//!
//! Request-id tracing and HTTPS redirection.

use axum::{
    extract::{Request, State},
    http::{header, uri::Authority},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Redirect plain-HTTP requests to HTTPS on the port held in the state
pub async fn https_redirect_middleware(
    State(https_port): State<u16>,
    request: Request,
    next: Next,
) -> Response {
    match https_location(&request, https_port) {
        Some(location) => {
            tracing::debug!(location = %location, "Redirecting to HTTPS");
            Redirect::temporary(&location).into_response()
        }
        None => next.run(request).await,
    }
}

/// HTTPS URL a plain-HTTP request should be redirected to
///
/// Returns `None` when the request already arrived over HTTPS (directly or
/// through a proxy setting `X-Forwarded-Proto`) or carries no usable host.
pub fn https_location(request: &Request, https_port: u16) -> Option<String> {
    if is_https(request) {
        return None;
    }

    let authority = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.parse::<Authority>().ok())
        .or_else(|| request.uri().authority().cloned())?;
    let host = authority.host();
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or("/", |pq| pq.as_str());

    let location = if https_port == 443 {
        format!("https://{host}{path_and_query}")
    } else {
        format!("https://{host}:{https_port}{path_and_query}")
    };
    Some(location)
}

fn is_https(request: &Request) -> bool {
    if request.uri().scheme_str() == Some("https") {
        return true;
    }
    request
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}
