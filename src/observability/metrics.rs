//! Metrics collection and exposition.
//!
//! # Metrics
//! - `showmock_requests_total` (counter): requests by method, status, domain
//! - `showmock_request_duration_seconds` (histogram): latency by method, domain
//!
//! Without an installed recorder the macros are no-ops.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, domain: &str, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();

    ::metrics::counter!(
        "showmock_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "domain" => domain.to_string()
    )
    .increment(1);

    ::metrics::histogram!(
        "showmock_request_duration_seconds",
        "method" => method.to_string(),
        "domain" => domain.to_string()
    )
    .record(elapsed);
}
