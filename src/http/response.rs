//! Conversion of router outcomes into HTTP responses.
//!
//! # Design Decisions
//! - `Reply` headers are applied after the body so they override defaults
//! - A halt without a reply is sent as an empty `200 OK`; the core wrote
//!   nothing and the gate chose not to either

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::routing::{Dispatch, Reply};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

impl IntoResponse for Dispatch {
    fn into_response(self) -> Response {
        match self {
            Dispatch::Handled(reply) | Dispatch::NotFound(reply) => reply.into_response(),
            Dispatch::Halted(Some(reply)) => reply.into_response(),
            Dispatch::Halted(None) => StatusCode::OK.into_response(),
        }
    }
}
