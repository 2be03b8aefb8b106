//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, access log)
//!     → request.rs (extract host, method, path, accept)
//!     → [routing layer picks the domain]
//!     → [mock engine resolves the file]
//!     → response.rs (status, headers, content type, body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MockRequest, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
