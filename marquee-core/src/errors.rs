//! Error types for catalog access.

use thiserror::Error;

/// Errors surfaced by catalog providers.
///
/// These never escape `Resolver::resolve`; the resolver converts them
/// into an apologetic reply at its boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure talking to the catalog.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Catalog answered with a non-success HTTP status.
    #[error("Catalog returned HTTP {status}")]
    Status {
        /// HTTP status code returned by the catalog
        status: u16,
    },

    /// Response body could not be decoded.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}
