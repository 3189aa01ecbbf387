//! Handler abstraction.

use std::sync::Arc;

use crate::routing::context::RequestContext;
use crate::routing::params::RouteParams;
use crate::routing::reply::Reply;

/// Something that turns a matched request into a reply.
///
/// Parameters arrive in template order; the router does not check how many
/// a handler expects. Handlers that need a fixed count can use
/// [`RouteParams::exactly`].
pub trait Handler: Send + Sync {
    fn call(&self, req: &RequestContext, params: &RouteParams) -> Reply;
}

impl<F> Handler for F
where
    F: Fn(&RequestContext, &RouteParams) -> Reply + Send + Sync,
{
    fn call(&self, req: &RequestContext, params: &RouteParams) -> Reply {
        self(req, params)
    }
}

/// Shared handler reference. One handler can back several methods.
pub type BoxedHandler = Arc<dyn Handler>;

/// Fallback invoked when nothing matches.
pub type NotFoundHandler = Arc<dyn Fn(&RequestContext) -> Reply + Send + Sync>;
