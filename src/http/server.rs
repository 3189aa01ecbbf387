//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum service that forwards every request to the router
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and shut down gracefully
//! - Let a new router be swapped in while serving

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{MountConfig, RouterConfig};
use crate::http::request::{request_context, UuidRequestId};
use crate::observability::metrics;
use crate::routing::Router as PathRouter;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ArcSwap<PathRouter>>,
    pub mount: MountConfig,
}

/// Replaces the live router without restarting the server.
#[derive(Clone)]
pub struct RouterHandle {
    router: Arc<ArcSwap<PathRouter>>,
}

impl RouterHandle {
    /// In-flight dispatches finish on the router they started with.
    pub fn replace(&self, router: PathRouter) {
        self.router.store(Arc::new(router));
        tracing::info!("Router replaced");
    }

    pub fn current(&self) -> Arc<PathRouter> {
        self.router.load_full()
    }
}

/// HTTP front end for a [`PathRouter`].
pub struct HttpServer {
    app: Router,
    handle: RouterHandle,
}

impl HttpServer {
    /// Create a new HTTP server serving `router`.
    pub fn new(config: &RouterConfig, router: PathRouter) -> Self {
        let shared = Arc::new(ArcSwap::from_pointee(router));
        let state = AppState {
            router: shared.clone(),
            mount: config.mount.clone(),
        };

        Self {
            app: Self::build_app(config, state),
            handle: RouterHandle { router: shared },
        }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    pub fn handle(&self) -> RouterHandle {
        self.handle.clone()
    }

    /// Serve until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: every method, every path.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let ctx = request_context(request.method(), request.uri(), &state.mount);

    let router = state.router.load();
    let dispatch = router.run(&ctx);

    tracing::debug!(
        method = %ctx.method(),
        path = %ctx.path(),
        outcome = dispatch.outcome(),
        "Dispatched"
    );
    metrics::record_dispatch(ctx.method(), dispatch.outcome(), start);

    dispatch.into_response()
}
