//! A single mock domain (virtual host).
//!
//! # Responsibilities
//! - Own one directory tree and its `_meta.yml`
//! - Map (method, path) to a file inside that tree
//! - Produce a response descriptor (status, media type, headers, body)
//!
//! # Layout
//! ```text
//! <domain>/_meta.yml
//! <domain>/<METHOD>/<path...>     default layout
//! <domain>/<path...>              method_free: true
//! <domain>/.../_index             served for directory paths
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};

use crate::mock::error::{MetadataError, ResolveError};
use crate::mock::metadata::{DomainMetadata, META_FILE};
use crate::mock::negotiate::MediaConfig;
use crate::mock::path::normalize;

/// File served when a request resolves to a directory.
pub const INDEX_FILE: &str = "_index";

/// Outcome of resolving one request against a domain.
#[derive(Debug, Clone)]
pub struct ResponseDescriptor {
    pub status: StatusCode,
    pub media_type: String,
    pub headers: HeaderMap,
    /// Present iff `status` is 200.
    pub body: Option<Vec<u8>>,
}

impl ResponseDescriptor {
    fn found(media_type: &str, headers: &HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            media_type: media_type.to_string(),
            headers: headers.clone(),
            body: Some(body),
        }
    }

    fn not_found(media_type: &str, headers: &HeaderMap) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            media_type: media_type.to_string(),
            headers: headers.clone(),
            body: None,
        }
    }
}

/// One virtual host backed by a directory.
#[derive(Debug)]
pub struct Domain {
    name: String,
    /// `None` for the synthetic empty domain.
    root_dir: Option<PathBuf>,
    metadata: DomainMetadata,
    media: Arc<MediaConfig>,
}

impl Domain {
    /// Load a domain from its directory. The name is the directory's basename.
    pub fn load(root_dir: impl Into<PathBuf>, media: Arc<MediaConfig>) -> Result<Self, MetadataError> {
        let root_dir = root_dir.into();
        let name = root_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let metadata = DomainMetadata::load(&root_dir.join(META_FILE))?;

        Ok(Self {
            name,
            root_dir: Some(root_dir),
            metadata,
            media,
        })
    }

    /// A domain without backing files. Every request resolves to 404.
    pub fn empty(media: Arc<MediaConfig>) -> Self {
        Self {
            name: String::new(),
            root_dir: None,
            metadata: DomainMetadata::default(),
            media,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &DomainMetadata {
        &self.metadata
    }

    pub fn is_empty(&self) -> bool {
        self.root_dir.is_none()
    }

    /// Resolve a request to a response descriptor.
    ///
    /// Performs one existence check and, on a hit, one full read. A missing file
    /// is a 404 descriptor; a failing read is a [`ResolveError`].
    pub fn resolve(
        &self,
        method: &str,
        path: &str,
        accept: &str,
    ) -> Result<ResponseDescriptor, ResolveError> {
        let rel_path = normalize(path);
        let media_type = self
            .media
            .choose(accept, self.metadata.content_type.as_deref());
        let headers = &self.metadata.headers;

        let Some(root) = self.root_dir.as_deref() else {
            tracing::debug!(method, path = %rel_path, "Empty domain, no mock data");
            return Ok(ResponseDescriptor::not_found(media_type, headers));
        };

        let file = match self.candidate_path(root, method, &rel_path) {
            Some(candidate) => with_index(candidate),
            None => {
                tracing::debug!(method, domain = %self.name, "Method is not a usable directory name");
                return Ok(ResponseDescriptor::not_found(media_type, headers));
            }
        };

        tracing::debug!(
            method,
            domain = %self.name,
            path = %rel_path,
            file = %file.display(),
            "Search"
        );

        if !file.is_file() {
            return Ok(ResponseDescriptor::not_found(media_type, headers));
        }

        let body = fs::read(&file).map_err(|source| ResolveError::Read {
            path: file.clone(),
            source,
        })?;

        Ok(ResponseDescriptor::found(media_type, headers, body))
    }

    /// Candidate file before index substitution. `None` when the method cannot
    /// be used as a single directory name.
    fn candidate_path(&self, root: &Path, method: &str, rel_path: &str) -> Option<PathBuf> {
        if self.metadata.method_free {
            return Some(root.join(rel_path));
        }

        if !is_plain_segment(method) {
            return None;
        }

        let as_given = root.join(method);
        let method_dir = if as_given.is_dir() {
            as_given
        } else {
            root.join(method.to_ascii_lowercase())
        };

        Some(method_dir.join(rel_path))
    }
}

/// Substitute the index file when `candidate` is a directory.
pub fn with_index(candidate: PathBuf) -> PathBuf {
    if candidate.is_dir() {
        candidate.join(INDEX_FILE)
    } else {
        candidate
    }
}

fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !segment.contains('/')
}
