//! Marquee Core - Intent resolution for chat-style media discovery
//!
//! Turns a free-text message ("Telugu horror movies", "movies like
//! Inception") into a structured catalog query, runs exactly one
//! discovery strategy, and shapes the outcome into a short reply with
//! at most five normalized result items. The pipeline never surfaces
//! an error to its caller; every path ends in a well-formed reply.

pub mod catalog;
pub mod concepts;
pub mod errors;
pub mod intent;
pub mod normalize;
pub mod resolver;
pub mod tables;
pub mod types;

// Re-export main types for convenient access
pub use catalog::{CatalogClient, TmdbCatalog, TmdbConfig};
pub use errors::CatalogError;
pub use resolver::Resolver;
pub use types::{DiscoveryQuery, MediaType, ResolverReply, ResultItem};
