//! Conditional GET for single-page responses.
//!
//! A page's `updated_at` is its version: every page update and every block
//! replace moves it. The ETag is derived from the page id and that version,
//! so a stale tag never matches after a write.

use axum::http::header::{ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sitecms_db::models::page::Page;

/// Weak entity tag for a page version.
pub fn page_etag(page: &Page) -> String {
    format!(
        "W/\"page-{}-{}\"",
        page.id,
        page.updated_at.timestamp_micros()
    )
}

/// Whether the request's `If-None-Match` header matches `etag`.
///
/// Accepts `*`, a single tag or a comma-separated list. Weak comparison:
/// the `W/` prefix is ignored on both sides.
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers.get(IF_NONE_MATCH).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let wanted = strip_weak(etag);
    value
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || strip_weak(tag) == wanted)
}

fn strip_weak(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}

/// Respond with `body` and the page's ETag, or `304 Not Modified` when the
/// client already holds this version.
pub fn conditional_json<T: Serialize>(headers: &HeaderMap, page: &Page, body: T) -> Response {
    let etag = page_etag(page);
    if if_none_match(headers, &etag) {
        return (StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response();
    }
    ([(ETAG, etag)], Json(body)).into_response()
}
