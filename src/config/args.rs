//! Command line and environment overrides.
//!
//! Every flag is optional; only flags that were given (or whose environment
//! variable is set) replace the value from the config file or the defaults.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::loader::{read_config, ConfigError};
use crate::config::schema::MockConfig;
use crate::config::validation::validate_config;

#[derive(Debug, Parser)]
#[command(name = "showmock")]
#[command(about = "Serve static mock responses per virtual host", long_about = None)]
pub struct Args {
    /// Directory containing one subdirectory per mock domain
    #[arg(env = "DATA_DIR")]
    pub data: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "SHOWMOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on (host:port)
    #[arg(short, long, env = "BIND")]
    pub bind: Option<String>,

    /// Content type used when nothing else decides
    #[arg(short = 'c', long, env = "DEFAULT_CONTENT_TYPE")]
    pub content_type: Option<String>,

    /// Domain serving requests for unknown hosts
    #[arg(short, long, env = "DEFAULT_HOST")]
    pub default_host: Option<String>,

    /// Accept header values echoed back as content type (repeatable)
    #[arg(short, long, env = "ACCEPT_CONTENT_TYPES", value_delimiter = ',')]
    pub accept: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Expose Prometheus metrics on this address
    #[arg(long, env = "METRICS_ADDRESS")]
    pub metrics_address: Option<String>,
}

impl Args {
    /// Build the effective configuration: defaults, then the config file, then
    /// these overrides. The result is validated.
    pub fn into_config(self) -> Result<MockConfig, ConfigError> {
        let base = match self.config.as_deref() {
            Some(path) => read_config(path)?,
            None => MockConfig::default(),
        };

        let config = self.apply(base);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Layer the given flags over `config`.
    pub fn apply(self, mut config: MockConfig) -> MockConfig {
        if let Some(data) = self.data {
            config.mock.data_dir = data;
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(content_type) = self.content_type {
            config.mock.default_content_type = content_type;
        }
        if let Some(default_host) = self.default_host {
            config.mock.default_host = default_host;
        }
        if !self.accept.is_empty() {
            config.mock.accepted_media_types = self.accept;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if let Some(address) = self.metrics_address {
            config.observability.metrics_enabled = true;
            config.observability.metrics_address = address;
        }
        config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}
