//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn a validated `RouterConfig` into a `Router`
//! - Register static routes in file order
//! - Install the maintenance gate and the not-found override
//!
//! # Design Decisions
//! - The same function builds the initial router and every reloaded one
//! - Status codes are validated beforehand; invalid ones fall back quietly

use std::sync::Arc;

use axum::http::StatusCode;

use crate::config::{RouteConfig, RouterConfig};
use crate::routing::{Flow, Handler, Reply, RequestContext, RouteParams, Router, ANY_METHODS};

/// Handler for a configured route: fixed status, body with `{name}` filled in.
#[derive(Debug, Clone)]
pub struct StaticResponder {
    status: StatusCode,
    body: String,
}

impl StaticResponder {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Fill `{name}` tokens in a single pass over the body.
    ///
    /// Substituted values are never rescanned; unknown tokens stay as written.
    pub fn render(&self, params: &RouteParams) -> String {
        let mut out = String::with_capacity(self.body.len());
        let mut rest = self.body.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let token = &rest[open..];
            match token.find('}').and_then(|close| {
                params.get(&token[1..close]).map(|value| (close, value))
            }) {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &token[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = &token[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl Handler for StaticResponder {
    fn call(&self, _req: &RequestContext, params: &RouteParams) -> Reply {
        Reply::text(self.render(params)).with_status(self.status)
    }
}

/// Methods a route entry registers under, `ANY` expanded.
pub fn expand_methods(route: &RouteConfig) -> Vec<String> {
    let mut methods = Vec::new();
    for method in &route.methods {
        if method.eq_ignore_ascii_case("ANY") {
            methods.extend(ANY_METHODS.iter().map(|m| m.to_string()));
        } else {
            methods.push(method.to_ascii_uppercase());
        }
    }
    methods
}

/// Build a router from configuration.
pub fn build_router(config: &RouterConfig) -> Router {
    let mut router = Router::new();

    for route in &config.routes {
        let status = StatusCode::from_u16(route.status).unwrap_or(StatusCode::OK);
        let responder = Arc::new(StaticResponder::new(status, route.body.clone()));
        let methods = expand_methods(route);
        let methods: Vec<&str> = methods.iter().map(String::as_str).collect();

        router.add_for(&methods, &route.path, responder);
        tracing::debug!(
            name = route.name.as_deref().unwrap_or("-"),
            path = %route.path,
            methods = ?methods,
            "Registered static route"
        );
    }

    if config.maintenance.enabled {
        let message = config.maintenance.message.clone();
        router.add_middleware(move |_| {
            Flow::halt_with(Reply::text(message.clone()).with_status(StatusCode::SERVICE_UNAVAILABLE))
        });
        tracing::warn!("Maintenance mode enabled, all matched routes answer 503");
    }

    if let Some(not_found) = &config.not_found {
        let status = StatusCode::from_u16(not_found.status).unwrap_or(StatusCode::NOT_FOUND);
        let body = not_found.body.clone();
        router.set_not_found_handler(move |_| Reply::text(body.clone()).with_status(status));
    }

    tracing::info!(routes = router.routes().len(), "Router built");
    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MaintenanceConfig, NotFoundConfig};
    use crate::routing::Dispatch;

    fn route(methods: &[&str], path: &str, body: &str) -> RouteConfig {
        RouteConfig {
            name: None,
            methods: methods.iter().map(|m| m.to_string()).collect(),
            path: path.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_params() {
        let responder = StaticResponder::new(StatusCode::OK, "user {id} post {postId} {id}");
        let mut params = RouteParams::new();
        params.bind("id", "42");
        params.bind("postId", "7");
        assert_eq!(responder.render(&params), "user 42 post 7 42");
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let responder = StaticResponder::new(StatusCode::OK, "{id}/{postId} {missing} {{id}");
        let mut params = RouteParams::new();
        params.bind("id", "{postId}");
        params.bind("postId", "7");
        assert_eq!(responder.render(&params), "{postId}/7 {missing} {{postId}");
    }

    #[test]
    fn test_expand_any() {
        let methods = expand_methods(&route(&["any", "head"], "/", ""));
        assert_eq!(methods.len(), 7);
        assert_eq!(methods.last().map(String::as_str), Some("HEAD"));
    }

    #[test]
    fn test_build_router_from_config() {
        let mut config = RouterConfig::default();
        config.routes.push(route(&["GET"], "/users/{id}", "user {id}"));
        config.routes.push(route(&["ANY"], "/ping", "pong"));
        config.not_found = Some(NotFoundConfig {
            status: 410,
            body: "gone".into(),
        });

        let router = build_router(&config);
        match router.run(&RequestContext::new("GET", "/users/5")) {
            Dispatch::Handled(reply) => assert_eq!(reply.body, "user 5"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            router.run(&RequestContext::new("PATCH", "/ping")),
            Dispatch::Handled(_)
        ));
        match router.run(&RequestContext::new("POST", "/users/5")) {
            Dispatch::NotFound(reply) => {
                assert_eq!(reply.status, StatusCode::GONE);
                assert_eq!(reply.body, "gone");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_maintenance_gate() {
        let mut config = RouterConfig::default();
        config.routes.push(route(&["GET"], "/", "home"));
        config.maintenance = MaintenanceConfig {
            enabled: true,
            message: "later".into(),
        };

        let router = build_router(&config);
        match router.run(&RequestContext::new("GET", "/")) {
            Dispatch::Halted(Some(reply)) => {
                assert_eq!(reply.status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(reply.body, "later");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
