//! Host → domain lookup.
//!
//! # Responsibilities
//! - Scan the data directory once and load every domain
//! - Look up the domain for a request host
//! - Fall back to the default domain (never a lookup error)
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact host lookup via HashMap, then a case-folded index on miss
//! - Names differing only by case: the first in sorted order owns the folded key
//! - Unknown hosts get the default domain, or the empty domain if none is configured

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::mock::{Domain, MediaConfig, MetadataError};
use crate::routing::matcher::host_key;

/// Fatal errors while building the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("data path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to list data path {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load domain {domain}: {source}")]
    Domain {
        domain: String,
        #[source]
        source: MetadataError,
    },
}

/// All mock domains of the process.
#[derive(Debug)]
pub struct DomainRegistry {
    domains: HashMap<String, Arc<Domain>>,
    folded: HashMap<String, Arc<Domain>>,
    default_domain: Arc<Domain>,
}

impl DomainRegistry {
    /// Build the registry from the immediate subdirectories of `data_dir`.
    pub fn build(
        data_dir: &Path,
        default_host: Option<&str>,
        media: Arc<MediaConfig>,
    ) -> Result<Self, RegistryError> {
        if !data_dir.is_dir() {
            return Err(RegistryError::NotADirectory(data_dir.to_path_buf()));
        }

        tracing::info!(data_dir = %data_dir.display(), "Lookup data");

        let read_dir_err = |source| RegistryError::ReadDir {
            path: data_dir.to_path_buf(),
            source,
        };

        let mut dirs = Vec::new();
        for entry in fs::read_dir(data_dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        let mut domains = HashMap::with_capacity(dirs.len());
        let mut folded = HashMap::with_capacity(dirs.len());
        for (i, dir) in dirs.into_iter().enumerate() {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let domain = Domain::load(dir, media.clone())
                .map_err(|source| RegistryError::Domain { domain: name, source })?;
            tracing::info!(
                index = i,
                domain = %domain.name(),
                method_free = domain.metadata().method_free,
                "Mock domain loaded"
            );
            let domain = Arc::new(domain);
            folded
                .entry(host_key(domain.name()))
                .or_insert_with(|| domain.clone());
            domains.insert(domain.name().to_string(), domain);
        }

        let default_domain = match default_host.filter(|h| !h.is_empty()).and_then(|h| domains.get(h)) {
            Some(domain) => {
                tracing::info!(domain = %domain.name(), "Mock default domain");
                domain.clone()
            }
            None => {
                tracing::info!("Mock default is empty domain");
                Arc::new(Domain::empty(media))
            }
        };

        Ok(Self {
            domains,
            folded,
            default_domain,
        })
    }

    /// Domain serving `host`, falling back to the default domain.
    pub fn resolve(&self, host: &str) -> &Arc<Domain> {
        if let Some(domain) = self.domains.get(host) {
            return domain;
        }

        self.folded
            .get(&host_key(host))
            .unwrap_or(&self.default_domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Names of all loaded domains, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.domains.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
