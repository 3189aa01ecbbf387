//! Transport-neutral responses produced by handlers and gates.

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::error::RouteError;

/// A response body plus status and headers.
///
/// The router never writes to a connection; the transport adapter turns a
/// `Reply` into whatever its wire type is.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Reply {
    /// `200 OK` with a plain-text body.
    pub fn text(body: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        Self {
            status: StatusCode::OK,
            headers,
            body: body.into(),
        }
    }

    /// `200 OK` with a JSON body.
    pub fn json(value: &serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Self {
            status: StatusCode::OK,
            headers,
            body: value.to_string(),
        }
    }

    /// Empty body with the given status.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    /// The default fallback when no route matches and no handler is set.
    pub fn not_found() -> Self {
        Self::text("404 Not Found").with_status(StatusCode::NOT_FOUND)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl From<RouteError> for Reply {
    fn from(err: RouteError) -> Self {
        Reply::text(err.to_string()).with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
