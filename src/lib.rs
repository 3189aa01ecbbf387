//! Minimal HTTP request router.
//!
//! Maps a (method, path) pair to a registered handler, binds `{name}` path
//! segments, and runs global middleware gates before the handler.
//!
//! ```
//! use path_router::routing::{Dispatch, Reply, RequestContext, Router};
//!
//! let mut router = Router::new();
//! router.get("/users/{id}", |_, params| {
//!     Reply::text(format!("user {}", params.get("id").unwrap_or_default()))
//! });
//!
//! match router.run(&RequestContext::new("GET", "/users//42/")) {
//!     Dispatch::Handled(reply) => assert_eq!(reply.body, "user 42"),
//!     other => panic!("{other:?}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use error::{ConfigError, RouteError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Dispatch, Reply, RequestContext, RouteParams, Router};
