//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Bind address may name a host (`localhost:8000`); it is resolved at bind time
//! - Check that configured methods are valid HTTP tokens
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MockConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system
//! - The data directory itself is checked when the registry is built

use std::net::SocketAddr;

use axum::http::Method;
use thiserror::Error;

use crate::config::schema::MockConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("default content type must not be empty")]
    EmptyContentType,

    #[error("accepted media types must not contain empty entries")]
    EmptyMediaType,

    #[error("invalid HTTP method {0:?}")]
    Method(String),

    #[error("at least one HTTP method must be served")]
    NoMethods,

    #[error("request timeout must be greater than zero")]
    RequestTimeout,
}

/// Check the configuration, collecting every problem.
pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_bind_address(&config.listener.bind_address) {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.mock.default_content_type.trim().is_empty() {
        errors.push(ValidationError::EmptyContentType);
    }

    if config.mock.accepted_media_types.iter().any(|m| m.trim().is_empty()) {
        errors.push(ValidationError::EmptyMediaType);
    }

    if config.mock.methods.is_empty() {
        errors.push(ValidationError::NoMethods);
    }
    for method in &config.mock.methods {
        if Method::from_bytes(method.as_bytes()).is_err() {
            errors.push(ValidationError::Method(method.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `ip:port` or `host:port` with a non-empty host and a numeric port.
fn is_bind_address(addr: &str) -> bool {
    if addr.parse::<SocketAddr>().is_ok() {
        return true;
    }

    match addr.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty()
                && !host.contains(':')
                && !host.chars().any(char::is_whitespace)
                && port.parse::<u16>().is_ok()
        }
        None => false,
    }
}
