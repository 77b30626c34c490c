//! Catalog client abstraction and providers.
//!
//! The resolver talks to the external movie/TV catalog exclusively
//! through [`CatalogClient`], so strategies can be exercised against a
//! scripted mock and the live TMDB provider interchangeably.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::types::{CatalogRecord, DiscoveryQuery, KeywordRecord, MediaType, TrendingWindow};

pub mod mock;
pub mod tmdb;

pub use tmdb::{TmdbCatalog, TmdbConfig};

/// Interface to the external movie/TV catalog.
///
/// Implementations must tolerate concurrent independent invocations;
/// the resolver holds no mutable state of its own. Timeouts and
/// retries, if any, are the implementation's concern, not the
/// resolver's.
#[async_trait]
pub trait CatalogClient: Send + Sync + std::fmt::Debug {
    /// Type-restricted text search.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be sent
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Parse` - Response body could not be decoded
    async fn search(
        &self,
        media_type: MediaType,
        query: &str,
    ) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Filtered, sorted library listing.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be sent
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Parse` - Response body could not be decoded
    async fn discover(&self, query: &DiscoveryQuery) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Trending feed for the given window.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be sent
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Parse` - Response body could not be decoded
    async fn trending(
        &self,
        media_type: MediaType,
        window: TrendingWindow,
    ) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Recommendations anchored on a catalog record.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be sent
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Parse` - Response body could not be decoded
    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Vec<CatalogRecord>, CatalogError>;

    /// Resolve free text against the catalog's keyword index.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be sent
    /// - `CatalogError::Status` - Catalog answered with a non-success status
    /// - `CatalogError::Parse` - Response body could not be decoded
    async fn keyword_search(&self, query: &str) -> Result<Vec<KeywordRecord>, CatalogError>;
}
