//! Global middleware gates.
//!
//! Gates run in registration order before every matched handler. A gate
//! that returns [`Flow::Halt`] ends the dispatch: neither the handler nor
//! the not-found fallback runs.

use std::sync::Arc;

use crate::routing::context::RequestContext;
use crate::routing::reply::Reply;

/// Decision returned by a gate.
#[derive(Debug, Clone)]
pub enum Flow {
    Continue,
    /// Stop here. The reply, if any, is what the gate wants sent.
    Halt(Option<Reply>),
}

impl Flow {
    pub fn halt_with(reply: Reply) -> Self {
        Flow::Halt(Some(reply))
    }
}

impl From<bool> for Flow {
    fn from(proceed: bool) -> Self {
        if proceed {
            Flow::Continue
        } else {
            Flow::Halt(None)
        }
    }
}

impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Flow::Continue
    }
}

pub trait Middleware: Send + Sync {
    fn check(&self, req: &RequestContext) -> Flow;
}

impl<F> Middleware for F
where
    F: Fn(&RequestContext) -> Flow + Send + Sync,
{
    fn check(&self, req: &RequestContext) -> Flow {
        self(req)
    }
}

/// Ordered, append-only list of gates.
#[derive(Default, Clone)]
pub struct MiddlewareChain {
    gates: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gate: Arc<dyn Middleware>) {
        self.gates.push(gate);
    }

    /// Run every gate until one halts.
    pub fn run(&self, req: &RequestContext) -> Flow {
        for (position, gate) in self.gates.iter().enumerate() {
            if let Flow::Halt(reply) = gate.check(req) {
                tracing::trace!(position, path = %req.path(), "Middleware halted dispatch");
                return Flow::Halt(reply);
            }
        }
        Flow::Continue
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_chain_continues() {
        let chain = MiddlewareChain::new();
        assert!(matches!(chain.run(&RequestContext::new("GET", "/")), Flow::Continue));
    }

    #[test]
    fn test_halt_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut chain = MiddlewareChain::new();

        let c = calls.clone();
        chain.push(Arc::new(move |_: &RequestContext| {
            c.fetch_add(1, Ordering::SeqCst);
            Flow::from(())
        }));
        chain.push(Arc::new(|_: &RequestContext| Flow::from(false)));
        let c = calls.clone();
        chain.push(Arc::new(move |_: &RequestContext| {
            c.fetch_add(1, Ordering::SeqCst);
            Flow::Continue
        }));

        let flow = chain.run(&RequestContext::new("GET", "/"));
        assert!(matches!(flow, Flow::Halt(None)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_halt_carries_reply() {
        let mut chain = MiddlewareChain::new();
        chain.push(Arc::new(|_: &RequestContext| {
            Flow::halt_with(Reply::text("denied"))
        }));
        match chain.run(&RequestContext::new("GET", "/")) {
            Flow::Halt(Some(reply)) => assert_eq!(reply.body, "denied"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_true_continues() {
        assert!(matches!(Flow::from(true), Flow::Continue));
    }
}
