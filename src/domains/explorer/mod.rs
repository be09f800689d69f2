//! Explorer domain module.
//!
//! Everything that talks to the upstream Blockscout v2 REST API lives here.
//!
//! ## Architecture
//!
//! - `client.rs` - HTTP client wrapping one `reqwest` connection pool
//! - `endpoint.rs` - Path templates, query parameters and bound arguments
//! - `handle.rs` - Lazily created, shared client with explicit shutdown
//! - `error.rs` - Explorer-specific error types

mod client;
pub mod endpoint;
mod error;
mod handle;

pub use client::{ExplorerClient, parse_base_url};
pub use endpoint::{Arguments, Endpoint, QueryParam, interpolate};
pub use error::ExplorerError;
pub use handle::ExplorerHandle;
