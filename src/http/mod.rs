//! HTTP transport adapter.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → request.rs (strip query / script name / base path → RequestContext)
//!     → routing::Router::run
//!     → response.rs (Dispatch → HTTP response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_context, strip_mount, UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, RouterHandle};
