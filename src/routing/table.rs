//! Route storage.
//!
//! # Design Decisions
//! - Per-method routes live in a `Vec` so iteration is registration order
//! - A side index keyed by normalized template makes re-registration O(1)
//! - Re-registering a key replaces the handler in place; the route keeps
//!   its original position

use std::collections::HashMap;
use std::fmt;

use crate::routing::handler::BoxedHandler;
use crate::routing::template::PathTemplate;

/// A registered route.
#[derive(Clone)]
pub struct Route {
    method: String,
    template: PathTemplate,
    handler: BoxedHandler,
}

impl Route {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn handler(&self) -> &BoxedHandler {
        &self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("template", &self.template.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
struct MethodRoutes {
    routes: Vec<Route>,
    index: HashMap<String, usize>,
}

/// method → ordered (template → handler).
#[derive(Default)]
pub struct RouteTable {
    methods: HashMap<String, MethodRoutes>,
    // Method keys in first-registration order, for stable listings.
    method_order: Vec<String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` under the uppercased method and normalized path.
    pub fn register(&mut self, method: &str, path: &str, handler: BoxedHandler) {
        let method = method.to_ascii_uppercase();
        let template = PathTemplate::compile(path);

        if !self.methods.contains_key(&method) {
            self.method_order.push(method.clone());
        }
        let entry = self.methods.entry(method.clone()).or_default();

        match entry.index.get(template.as_str()) {
            Some(&pos) => {
                tracing::debug!(method = %method, path = %template, "Replacing existing route");
                entry.routes[pos].handler = handler;
            }
            None => {
                entry
                    .index
                    .insert(template.as_str().to_string(), entry.routes.len());
                entry.routes.push(Route {
                    method,
                    template,
                    handler,
                });
            }
        }
    }

    /// Routes for `method` in registration order; empty if none exist.
    pub fn lookup(&self, method: &str) -> &[Route] {
        self.methods
            .get(&method.to_ascii_uppercase())
            .map(|m| m.routes.as_slice())
            .unwrap_or(&[])
    }

    /// Methods that have at least one route, first-registered first.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.method_order.iter().map(String::as_str)
    }

    /// Every route, grouped by method.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.methods().flat_map(move |m| self.lookup(m).iter())
    }

    pub fn len(&self) -> usize {
        self.methods.values().map(|m| m.routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
