//! Per-request input to the router.

/// The method and path of one request, as handed over by the transport.
///
/// The path is expected to be free of query string, script name and base
/// path already; it is normalized again inside [`Router::run`].
///
/// [`Router::run`]: crate::routing::Router::run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: String,
    path: String,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
