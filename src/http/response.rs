//! Response construction.
//!
//! # Responsibilities
//! - Turn a `ResponseDescriptor` into an HTTP response
//! - Map engine errors to 500
//!
//! # Design Decisions
//! - Domain headers are applied first; `Content-Type` is only added when the
//!   domain did not set one itself
//! - `text/*` media types without a charset get `; charset=utf-8`
//! - A 404 has an empty body

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::mock::{ResolveError, ResponseDescriptor};

impl IntoResponse for ResponseDescriptor {
    fn into_response(self) -> Response {
        let body = self.body.map(Body::from).unwrap_or_else(Body::empty);
        let mut response = Response::new(body);
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        headers.extend(self.headers);

        if !headers.contains_key(header::CONTENT_TYPE) {
            match HeaderValue::from_str(&content_type_value(&self.media_type)) {
                Ok(value) => {
                    headers.insert(header::CONTENT_TYPE, value);
                }
                Err(_) => {
                    tracing::warn!(media_type = %self.media_type, "Media type is not a valid header value");
                }
            }
        }

        response
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Failed to serve mock file");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read mock data").into_response()
    }
}

/// Content-Type header value for a media type.
pub fn content_type_value(media_type: &str) -> String {
    let is_text = media_type
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("text/"));

    if is_text && !media_type.to_ascii_lowercase().contains("charset") {
        format!("{media_type}; charset=utf-8")
    } else {
        media_type.to_string()
    }
}
