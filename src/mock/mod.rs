//! Mock resolution engine.
//!
//! # Data Flow
//! ```text
//! (method, path, accept) for one domain
//!     → path.rs (lexical normalization, root is a hard floor)
//!     → domain.rs (candidate file: [method/]path, directory → _index)
//!     → negotiate.rs (Accept > _meta.yml content-type > default)
//!     → ResponseDescriptor (200 + body, or 404 without body)
//!
//! Domain construction (at startup):
//!     <data>/<domain>/_meta.yml
//!     → metadata.rs (parse & validate once)
//!     → Domain (immutable)
//! ```
//!
//! # Design Decisions
//! - Everything here is synchronous and free of shared mutable state
//! - No content cache: fixtures can change on disk while serving
//! - A read failure after a successful existence check is an error, not a 404

pub mod domain;
pub mod error;
pub mod metadata;
pub mod negotiate;
pub mod path;

pub use domain::{Domain, ResponseDescriptor, INDEX_FILE};
pub use error::{MetadataError, ResolveError};
pub use metadata::{DomainMetadata, META_FILE};
pub use negotiate::MediaConfig;
pub use path::normalize;
