//! Shared utilities for integration tests.

use std::net::SocketAddr;

use autoops_responder::config::ResponderConfig;
use autoops_responder::http::HttpServer;
use autoops_responder::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Spawn a responder on an ephemeral port, returning its address and the
/// shutdown handle. Callers trigger the handle when done.
pub async fn start_responder(config: ResponderConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Client without connection pooling or proxying, for test stability.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
