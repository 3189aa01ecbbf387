//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract the routing path: drop query string, script name and base path
//! - Build the `RequestContext` handed to the router
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Mount stripping happens here, not in the router core

use axum::http::{HeaderValue, Method, Request, Uri};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::config::MountConfig;
use crate::routing::RequestContext;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 for every request lacking an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Turn an incoming method and URI into the router's input.
pub fn request_context(method: &Method, uri: &Uri, mount: &MountConfig) -> RequestContext {
    RequestContext::new(method.as_str(), strip_mount(uri.path(), mount))
}

/// Remove every `/<script_name>` occurrence, then a leading base path.
///
/// The base path is removed as a plain string prefix.
pub fn strip_mount(path: &str, mount: &MountConfig) -> String {
    let mut path = match mount.script_name.as_deref() {
        Some(script) if !script.is_empty() => path.replace(&format!("/{script}"), ""),
        _ => path.to_string(),
    };

    let base = mount.base_path.trim_end_matches('/');
    if !base.is_empty() {
        if let Some(rest) = path.strip_prefix(base) {
            path = rest.to_string();
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(base: &str, script: Option<&str>) -> MountConfig {
        MountConfig {
            base_path: base.to_string(),
            script_name: script.map(str::to_string),
        }
    }

    #[test]
    fn test_query_dropped() {
        let uri: Uri = "/users/42?expand=true".parse().unwrap();
        let ctx = request_context(&Method::GET, &uri, &MountConfig::default());
        assert_eq!(ctx.method(), "GET");
        assert_eq!(ctx.path(), "/users/42");
    }

    #[test]
    fn test_script_name_removed() {
        let m = mount("/", Some("index.php"));
        assert_eq!(strip_mount("/index.php/users/1", &m), "/users/1");
        assert_eq!(strip_mount("/index.php", &m), "");
        assert_eq!(strip_mount("/users/1", &m), "/users/1");
    }

    #[test]
    fn test_base_path_removed() {
        let m = mount("/app/", Some("index.php"));
        assert_eq!(strip_mount("/app/index.php/users", &m), "/users");
        assert_eq!(strip_mount("/app", &m), "");
        assert_eq!(strip_mount("/other/users", &m), "/other/users");
    }

    #[test]
    fn test_nothing_to_strip() {
        let m = mount("/", None);
        assert_eq!(strip_mount("/index.php/x", &m), "/index.php/x");
    }

    #[test]
    fn test_uuid_request_id() {
        let req = Request::new(());
        let id = UuidRequestId.make_request_id(&req).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }
}
