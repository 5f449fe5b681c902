//! Response headers for the browser loading the page.
//!
//! The page pulls scripts from a CDN and may embed an `Authorization` header, so script
//! sources are left alone and the rest is locked down:
//! - no caching (the page can carry credentials)
//! - no MIME sniffing
//! - no framing
//! - no Referer, so the endpoint URL is not leaked to the CDN
//!
//! Headers a handler already set win.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const HEADERS: [(&str, &str); 4] = [
    ("cache-control", "no-store"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "no-referrer"),
];

pub fn apply(router: Router) -> Router {
    HEADERS.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}
