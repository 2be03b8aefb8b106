//! Multi-tenant HTTP mock responder.
//!
//! Serves static response bodies from a directory tree, selected by virtual
//! host, HTTP method and URL path.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod mock;
pub mod observability;
pub mod routing;

pub use config::MockConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use mock::{Domain, MediaConfig, ResponseDescriptor};
pub use routing::DomainRegistry;

use std::sync::Arc;

/// Build the domain registry described by `config`.
pub fn build_registry(config: &MockConfig) -> Result<DomainRegistry, routing::RegistryError> {
    let media = Arc::new(MediaConfig::new(
        config.mock.default_content_type.clone(),
        &config.mock.accepted_media_types,
    ));

    DomainRegistry::build(&config.mock.data_dir, Some(&config.mock.default_host), media)
}
