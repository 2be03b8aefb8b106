//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (Host header)
//!     → matcher.rs (strip port, case-insensitive compare)
//!     → router.rs (host → domain lookup)
//!     → Return: matched Domain or the default domain
//!
//! Registry Build (at startup):
//!     <data_dir>/*/
//!     → Load one Domain per subdirectory
//!     → Pick default domain (configured host or empty domain)
//!     → Freeze as immutable DomainRegistry
//! ```
//!
//! # Design Decisions
//! - Domains loaded at startup, immutable at runtime
//! - Deterministic: same host always maps to the same domain
//! - No "unknown host" failure mode

pub mod matcher;
pub mod router;

pub use router::{DomainRegistry, RegistryError};
