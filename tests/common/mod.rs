//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use path_router::config::RouterConfig;
use path_router::http::RouterHandle;
use path_router::{HttpServer, Router, Shutdown};

/// Handler invocation counter.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct Counter(Arc<AtomicUsize>);

#[allow(dead_code)]
impl Counter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Start `router` behind the HTTP adapter on `addr`.
///
/// Returns the shutdown coordinator and a handle for swapping routers.
#[allow(dead_code)]
pub async fn start_server(
    addr: SocketAddr,
    config: &RouterConfig,
    router: Router,
) -> (Shutdown, RouterHandle) {
    let server = HttpServer::new(config, router);
    let handle = server.handle();
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (shutdown, handle)
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
