//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (build phase):
//!     add(method, path, handler)
//!     → normalize.rs (canonical path)
//!     → template.rs (split into literal / {param} segments)
//!     → table.rs (method → ordered templates)
//!
//! Dispatch (serving phase):
//!     RequestContext (method, path)
//!     → normalize.rs
//!     → table.rs (routes for method, registration order)
//!     → matcher.rs (first match, bound params)
//!     → middleware.rs (global gates, may halt)
//!     → handler, or not-found fallback
//! ```
//!
//! # Design Decisions
//! - Templates compiled at registration, immutable at runtime
//! - No regex in the hot path
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by registration)

pub mod context;
pub mod handler;
pub mod matcher;
pub mod middleware;
pub mod normalize;
pub mod params;
pub mod reply;
pub mod router;
pub mod table;
pub mod template;

pub use context::RequestContext;
pub use handler::{BoxedHandler, Handler, NotFoundHandler};
pub use matcher::{match_route, RouteMatch};
pub use middleware::{Flow, Middleware, MiddlewareChain};
pub use normalize::normalize;
pub use params::RouteParams;
pub use reply::Reply;
pub use router::{Dispatch, Router, ANY_METHODS};
pub use table::{Route, RouteTable};
pub use template::{PathTemplate, Segment};
