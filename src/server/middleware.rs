//! Request middleware: security headers, request logging, panic recovery.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use futures::FutureExt;

use super::{remote_addr, AppState, RequestInfo};
use crate::ui;

/// Headers set on every response
pub const COMMON_HEADERS: &[(&str, &str)] = &[
    (
        "content-security-policy",
        "default-src 'self';script-src 'self' 'wasm-unsafe-eval';frame-ancestors 'none';",
    ),
    ("referrer-policy", "origin-when-cross-origin"),
    (
        "strict-transport-security",
        "max-age=63072000; includeSubDomains; preload",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "deny"),
];

pub async fn common_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for (name, value) in COMMON_HEADERS {
        headers.insert(*name, HeaderValue::from_static(*value));
    }
    response
}

/// Log each request, except static asset fetches
pub async fn log_request(req: Request, next: Next) -> Response {
    let uri = req.uri().to_string();
    if !uri.contains("static") {
        let ip = remote_addr(&req)
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "-".to_string());
        tracing::info!(
            ip = %ip,
            proto = ?req.version(),
            method = %req.method(),
            uri = %uri,
            "Received request"
        );
    }
    next.run(req).await
}

/// Turn a panicking handler into the 500 page instead of a dropped connection.
pub async fn recover_panic(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let info = RequestInfo::capture(&req);
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            let mut response = ui::server_error_response(&state, &info, &message);
            response
                .headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
            response
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
