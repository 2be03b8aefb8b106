//! Request handling.
//!
//! # Responsibilities
//! - Extract routing-relevant information (host, method, path, accept)
//! - Percent-decode the path before it reaches the engine
//!
//! # Design Decisions
//! - Host comes from the Host header, then the URI authority (HTTP/2)
//! - A missing Accept header is an empty string, which never negotiates
//! - Undecodable paths are passed through verbatim; normalization still applies

use std::borrow::Cow;

use axum::http::{header, HeaderMap, Method, Uri};

use crate::routing::matcher::host_name;

/// Header carrying the request ID (set by the tower-http request-id layers).
pub const X_REQUEST_ID: &str = "x-request-id";

/// The parts of an HTTP request the mock engine looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub host: String,
    pub method: String,
    pub path: String,
    pub accept: String,
}

impl MockRequest {
    pub fn from_parts(method: &Method, uri: &Uri, headers: &HeaderMap) -> Self {
        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| uri.authority().map(|a| a.as_str()))
            .map(host_name)
            .unwrap_or_default()
            .to_string();

        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Self {
            host,
            method: method.as_str().to_string(),
            path: decode_path(uri.path()).into_owned(),
            accept,
        }
    }
}

/// Request ID for log correlation, or `"unknown"`.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

fn decode_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
