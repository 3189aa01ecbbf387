//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Own the route table, the middleware chain and the not-found handler
//! - Offer the registration API (`add`, per-verb shortcuts, `any`)
//! - Dispatch one request: normalize, match, gate, invoke or fall back
//!
//! # Design Decisions
//! - Registration takes `&mut self`, dispatch takes `&self`; once built the
//!   router is shared read-only (typically behind `Arc`)
//! - No global state; any number of routers can coexist
//! - Dispatch returns an explicit outcome instead of writing to a transport

use std::fmt;
use std::sync::Arc;

use crate::routing::context::RequestContext;
use crate::routing::handler::{BoxedHandler, NotFoundHandler};
use crate::routing::matcher::{match_route, RouteMatch};
use crate::routing::middleware::{Flow, Middleware, MiddlewareChain};
use crate::routing::normalize::normalize;
use crate::routing::params::RouteParams;
use crate::routing::reply::Reply;
use crate::routing::table::RouteTable;

/// Verbs registered by [`Router::any`].
pub const ANY_METHODS: [&str; 6] = ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"];

/// Outcome of one dispatch.
#[derive(Debug, Clone)]
pub enum Dispatch {
    /// A route matched and its handler ran.
    Handled(Reply),
    /// A gate stopped the request; the core produced nothing of its own.
    Halted(Option<Reply>),
    /// No route matched; this is the not-found handler's or default reply.
    NotFound(Reply),
}

impl Dispatch {
    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Dispatch::Handled(_) => "handled",
            Dispatch::Halted(_) => "halted",
            Dispatch::NotFound(_) => "not_found",
        }
    }
}

/// The routing aggregate.
#[derive(Default)]
pub struct Router {
    table: RouteTable,
    middleware: MiddlewareChain,
    not_found: Option<NotFoundHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` and `path`.
    ///
    /// The method is uppercased and the path normalized. Registering the
    /// same pair twice replaces the earlier handler.
    pub fn add<H>(&mut self, method: &str, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add_handler(method, path, Arc::new(handler))
    }

    /// Register an already shared handler.
    pub fn add_handler(&mut self, method: &str, path: &str, handler: BoxedHandler) -> &mut Self {
        self.table.register(method, path, handler);
        self
    }

    pub fn get<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add("GET", path, handler)
    }

    pub fn post<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add("POST", path, handler)
    }

    pub fn put<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add("PUT", path, handler)
    }

    pub fn delete<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add("DELETE", path, handler)
    }

    pub fn patch<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add("PATCH", path, handler)
    }

    pub fn options<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add("OPTIONS", path, handler)
    }

    /// Register the same handler for GET and POST.
    pub fn post_get<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add_for(&["GET", "POST"], path, Arc::new(handler))
    }

    /// Register the same handler for every verb in [`ANY_METHODS`].
    pub fn any<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync + 'static,
    {
        self.add_for(&ANY_METHODS, path, Arc::new(handler))
    }

    /// Register one shared handler under several methods.
    pub fn add_for(&mut self, methods: &[&str], path: &str, handler: BoxedHandler) -> &mut Self {
        for method in methods {
            self.table.register(method, path, handler.clone());
        }
        self
    }

    /// Append a global gate.
    pub fn add_middleware<G>(&mut self, gate: G) -> &mut Self
    where
        G: Fn(&RequestContext) -> Flow + Send + Sync + 'static,
    {
        self.add_middleware_gate(Arc::new(gate))
    }

    pub fn add_middleware_gate(&mut self, gate: Arc<dyn Middleware>) -> &mut Self {
        self.middleware.push(gate);
        self
    }

    pub fn set_not_found_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&RequestContext) -> Reply + Send + Sync + 'static,
    {
        self.not_found = Some(Arc::new(handler));
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Find the route a request would hit, without running anything.
    pub fn resolve(&self, method: &str, path: &str) -> Option<RouteMatch<'_>> {
        match_route(self.table.lookup(method), &normalize(path))
    }

    /// Dispatch one request.
    pub fn run(&self, req: &RequestContext) -> Dispatch {
        let path = normalize(req.path());

        let Some(matched) = match_route(self.table.lookup(req.method()), &path) else {
            tracing::debug!(method = %req.method(), path = %path, "No route matched");
            let reply = match &self.not_found {
                Some(handler) => handler(req),
                None => Reply::not_found(),
            };
            return Dispatch::NotFound(reply);
        };

        tracing::debug!(
            method = %req.method(),
            path = %path,
            route = %matched.route.template(),
            params = matched.params.len(),
            "Route matched"
        );

        if let Flow::Halt(reply) = self.middleware.run(req) {
            return Dispatch::Halted(reply);
        }

        Dispatch::Handled(matched.route.handler().call(req, &matched.params))
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table)
            .field("middleware", &self.middleware.len())
            .field("not_found", &self.not_found.is_some())
            .finish()
    }
}
