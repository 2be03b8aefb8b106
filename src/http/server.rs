//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all mock handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch requests to the domain registry

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::MockConfig;
use crate::http::request::{request_id, MockRequest};
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routing::DomainRegistry;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<DomainRegistry>,
    pub methods: Arc<HashSet<Method>>,
    allow: HeaderValue,
}

impl AppState {
    pub fn new(registry: Arc<DomainRegistry>, methods: impl IntoIterator<Item = Method>) -> Self {
        let mut allowed: Vec<Method> = Vec::new();
        for method in methods {
            if !allowed.contains(&method) {
                allowed.push(method);
            }
        }
        let allow = allowed
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            registry,
            methods: Arc::new(allowed.into_iter().collect()),
            allow: HeaderValue::from_str(&allow).unwrap_or_else(|_| HeaderValue::from_static("GET")),
        }
    }
}

/// HTTP server for the mock responder.
pub struct HttpServer {
    router: Router,
    registry: Arc<DomainRegistry>,
}

impl HttpServer {
    /// Create a new HTTP server serving the given registry.
    pub fn new(config: &MockConfig, registry: Arc<DomainRegistry>) -> Self {
        let state = AppState::new(registry.clone(), served_methods(&config.mock.methods));

        let router = Self::build_router(config, state);
        Self { router, registry }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &MockConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(mock_handler))
            .route("/", any(mock_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The configured router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C / SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.serve(listener, shutdown_signal()).await
    }

    /// Run the server until `shutdown` is triggered (or its handle is dropped).
    pub async fn run_until(
        self,
        listener: TcpListener,
        shutdown: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        self.serve(listener, Shutdown::wait(shutdown)).await
    }

    async fn serve<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            domains = self.registry.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Configured method names as HTTP methods. Names are matched case-insensitively,
/// so `get` serves `GET`.
pub fn served_methods(names: &[String]) -> Vec<Method> {
    names
        .iter()
        .filter_map(|name| Method::from_bytes(name.to_ascii_uppercase().as_bytes()).ok())
        .collect()
}

/// Catch-all handler: host → domain → file.
async fn mock_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers).to_string();

    if !state.methods.contains(&method) {
        tracing::debug!(request_id = %request_id, method = %method, "Method not served");
        metrics::record_request(method.as_str(), 405, "none", start_time);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, state.allow.clone())],
        )
            .into_response();
    }

    let req = MockRequest::from_parts(&method, &uri, &headers);
    let registry = state.registry.clone();

    let resolved = tokio::task::spawn_blocking(move || {
        let domain = registry.resolve(&req.host);
        tracing::debug!(
            request_id = %request_id,
            host = %req.host,
            domain = %domain.name(),
            method = %req.method,
            path = %req.path,
            "Resolving request"
        );
        let result = domain.resolve(&req.method, &req.path, &req.accept);
        let label = if domain.is_empty() { "(empty)" } else { domain.name() };
        (label.to_string(), result)
    })
    .await;

    let (domain, result) = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!(error = %e, "Resolver task failed");
            metrics::record_request(method.as_str(), 500, "none", start_time);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let response = match result {
        Ok(descriptor) => descriptor.into_response(),
        Err(e) => e.into_response(),
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), &domain, start_time);
    response
}
