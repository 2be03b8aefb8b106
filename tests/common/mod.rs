//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use showmock::{build_registry, HttpServer, MockConfig, Shutdown};

/// Directory with the checked-in mock domains.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data")
}

/// Config pointing at the fixtures, listening on an ephemeral port.
pub fn fixture_config() -> MockConfig {
    let mut config = MockConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.mock.data_dir = fixture_dir();
    config
}

/// Build the server for `config` without binding a socket.
pub fn build_server(config: MockConfig) -> HttpServer {
    let registry = Arc::new(build_registry(&config).expect("fixture registry"));
    HttpServer::new(&config, registry)
}

/// A server running in the background until the handle is triggered or dropped.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a mock server on an ephemeral port.
pub async fn start_server(config: MockConfig) -> RunningServer {
    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = build_server(config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run_until(listener, rx).await;
    });

    RunningServer { addr, shutdown }
}

/// HTTP client that never reuses connections or goes through a proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
