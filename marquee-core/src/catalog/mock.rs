//! Scripted catalog provider for tests.
//!
//! Returns canned records per endpoint and logs every call so tests
//! can assert the exact queries a strategy constructed.

use std::sync::Mutex;

use async_trait::async_trait;

use super::CatalogClient;
use crate::errors::CatalogError;
use crate::types::{CatalogRecord, DiscoveryQuery, KeywordRecord, MediaType, TrendingWindow};

/// One call issued against the mock catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCall {
    /// Text search call.
    Search {
        /// Requested catalog.
        media_type: MediaType,
        /// Search text.
        query: String,
    },
    /// Discover call with the full query as constructed.
    Discover(DiscoveryQuery),
    /// Trending feed call.
    Trending {
        /// Requested catalog.
        media_type: MediaType,
        /// Requested window.
        window: TrendingWindow,
    },
    /// Recommendations call.
    Recommendations {
        /// Requested catalog.
        media_type: MediaType,
        /// Anchor record id.
        id: u64,
    },
    /// Keyword index lookup.
    KeywordSearch {
        /// Lookup text.
        query: String,
    },
}

/// Scripted catalog returning canned records and logging every call.
#[derive(Debug, Default)]
pub struct MockCatalog {
    /// Records returned from `search`.
    pub search_results: Vec<CatalogRecord>,
    /// Records returned from `discover`.
    pub discover_results: Vec<CatalogRecord>,
    /// Records returned from `trending`.
    pub trending_results: Vec<CatalogRecord>,
    /// Records returned from `recommendations`.
    pub recommendation_results: Vec<CatalogRecord>,
    /// Records returned from `keyword_search`.
    pub keyword_results: Vec<KeywordRecord>,
    /// When set, every call fails with a network error.
    pub fail_all: bool,
    /// Keyword queries that fail individually while others succeed.
    pub fail_keyword_queries: Vec<String>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl MockCatalog {
    /// Create a mock returning empty results everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the records returned from `search`.
    pub fn with_search_results(mut self, records: Vec<CatalogRecord>) -> Self {
        self.search_results = records;
        self
    }

    /// Script the records returned from `discover`.
    pub fn with_discover_results(mut self, records: Vec<CatalogRecord>) -> Self {
        self.discover_results = records;
        self
    }

    /// Script the records returned from `trending`.
    pub fn with_trending_results(mut self, records: Vec<CatalogRecord>) -> Self {
        self.trending_results = records;
        self
    }

    /// Script the records returned from `recommendations`.
    pub fn with_recommendation_results(mut self, records: Vec<CatalogRecord>) -> Self {
        self.recommendation_results = records;
        self
    }

    /// Script the records returned from `keyword_search`.
    pub fn with_keyword_results(mut self, records: Vec<KeywordRecord>) -> Self {
        self.keyword_results = records;
        self
    }

    /// Make every call fail with a network error.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Make one keyword query fail while others succeed.
    pub fn with_failing_keyword_query(mut self, query: &str) -> Self {
        self.fail_keyword_queries.push(query.to_string());
        self
    }

    /// Snapshot of the calls issued so far, in order.
    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, call: CatalogCall) -> Result<(), CatalogError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(call);
        if self.fail_all {
            Err(CatalogError::Network {
                reason: "mock failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn search(
        &self,
        media_type: MediaType,
        query: &str,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.record(CatalogCall::Search {
            media_type,
            query: query.to_string(),
        })?;
        Ok(self.search_results.clone())
    }

    async fn discover(&self, query: &DiscoveryQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.record(CatalogCall::Discover(query.clone()))?;
        Ok(self.discover_results.clone())
    }

    async fn trending(
        &self,
        media_type: MediaType,
        window: TrendingWindow,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.record(CatalogCall::Trending { media_type, window })?;
        Ok(self.trending_results.clone())
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        self.record(CatalogCall::Recommendations { media_type, id })?;
        Ok(self.recommendation_results.clone())
    }

    async fn keyword_search(&self, query: &str) -> Result<Vec<KeywordRecord>, CatalogError> {
        self.record(CatalogCall::KeywordSearch {
            query: query.to_string(),
        })?;
        if self.fail_keyword_queries.iter().any(|q| q == query) {
            return Err(CatalogError::Network {
                reason: format!("mock keyword failure for '{query}'"),
            });
        }
        Ok(self.keyword_results.clone())
    }
}

/// Build a movie-shaped catalog record for tests.
pub fn movie_record(id: u64, title: &str, release_date: &str, rating: f64) -> CatalogRecord {
    CatalogRecord {
        id,
        title: Some(title.to_string()),
        release_date: Some(release_date.to_string()),
        vote_average: Some(rating),
        poster_path: Some(format!("/poster-{id}.jpg")),
        ..CatalogRecord::default()
    }
}

/// Build a TV-shaped catalog record for tests.
pub fn tv_record(id: u64, name: &str, first_air_date: &str, rating: f64) -> CatalogRecord {
    CatalogRecord {
        id,
        name: Some(name.to_string()),
        first_air_date: Some(first_air_date.to_string()),
        vote_average: Some(rating),
        poster_path: Some(format!("/poster-{id}.jpg")),
        ..CatalogRecord::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortKey;

    #[tokio::test]
    async fn mock_logs_calls_in_order() {
        let mock = MockCatalog::new();
        mock.search(MediaType::Movie, "inception").await.unwrap();
        mock.trending(MediaType::Tv, TrendingWindow::Week)
            .await
            .unwrap();

        assert_eq!(
            mock.calls(),
            vec![
                CatalogCall::Search {
                    media_type: MediaType::Movie,
                    query: "inception".to_string(),
                },
                CatalogCall::Trending {
                    media_type: MediaType::Tv,
                    window: TrendingWindow::Week,
                },
            ]
        );
    }

    #[tokio::test]
    async fn fail_all_rejects_every_call() {
        let mock = MockCatalog::new().failing();
        let query = DiscoveryQuery::new(MediaType::Movie, SortKey::Popularity);
        assert!(mock.discover(&query).await.is_err());
        // The call is still logged.
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn keyword_failures_are_per_query() {
        let mock = MockCatalog::new()
            .with_keyword_results(vec![KeywordRecord {
                id: 9882,
                name: "space".to_string(),
            }])
            .with_failing_keyword_query("heist");

        assert!(mock.keyword_search("space").await.is_ok());
        assert!(mock.keyword_search("heist").await.is_err());
    }
}
