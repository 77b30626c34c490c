//! Live TMDB catalog provider.

use async_trait::async_trait;
use serde::Deserialize;

use super::CatalogClient;
use crate::errors::CatalogError;
use crate::types::{CatalogRecord, DiscoveryQuery, KeywordRecord, MediaType, TrendingWindow};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Configuration for the TMDB provider.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API base URL, overridable for proxies and tests.
    pub base_url: String,
    /// TMDB API key, sent as a query parameter.
    pub api_key: String,
}

impl TmdbConfig {
    /// Build configuration with an explicit API key.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Build configuration from the `TMDB_API_KEY` environment
    /// variable, `None` when it is unset.
    pub fn from_env() -> Option<Self> {
        std::env::var("TMDB_API_KEY").ok().map(Self::with_api_key)
    }
}

/// TMDB catalog client.
///
/// A thin mapping from [`CatalogClient`] operations to TMDB REST
/// endpoints. No retries or timeouts here; callers own those policies.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    client: reqwest::Client,
    config: TmdbConfig,
}

/// Paged response wrapper used by every listing endpoint.
#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    results: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct KeywordPage {
    #[serde(default)]
    results: Vec<KeywordRecord>,
}

impl TmdbCatalog {
    /// Create a TMDB client from configuration.
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                reason: format!("request to {path} failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| CatalogError::Parse {
            reason: format!("JSON decoding failed for {path}: {e}"),
        })
    }

    async fn fetch_records(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        let page: RecordPage = self.fetch(path, params).await?;
        Ok(page.results)
    }

    /// Translate a discovery query into TMDB discover parameters.
    fn discover_params(query: &DiscoveryQuery) -> Vec<(String, String)> {
        let mut params = vec![(
            "sort_by".to_string(),
            query.sort_by.as_param().to_string(),
        )];

        if !query.genre_ids.is_empty() {
            let ids = query
                .genre_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("with_genres".to_string(), ids));
        }
        if let Some(language) = &query.language {
            params.push(("with_original_language".to_string(), language.clone()));
        }
        if let Some(count) = query.min_vote_count {
            params.push(("vote_count.gte".to_string(), count.to_string()));
        }
        if let Some(average) = query.min_vote_average {
            params.push(("vote_average.gte".to_string(), average.to_string()));
        }
        if !query.keyword_ids.is_empty() {
            // Pipe-separated means "any of these keywords".
            let ids = query
                .keyword_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join("|");
            params.push(("with_keywords".to_string(), ids));
        }

        params
    }
}

#[async_trait]
impl CatalogClient for TmdbCatalog {
    async fn search(
        &self,
        media_type: MediaType,
        query: &str,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        let path = format!("/search/{}", media_type.as_path());
        self.fetch_records(&path, &[("query".to_string(), query.to_string())])
            .await
    }

    async fn discover(&self, query: &DiscoveryQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        let path = format!("/discover/{}", query.media_type.as_path());
        self.fetch_records(&path, &Self::discover_params(query)).await
    }

    async fn trending(
        &self,
        media_type: MediaType,
        window: TrendingWindow,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        let path = format!("/trending/{}/{}", media_type.as_path(), window.as_path());
        self.fetch_records(&path, &[]).await
    }

    async fn recommendations(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> Result<Vec<CatalogRecord>, CatalogError> {
        let path = format!("/{}/{id}/recommendations", media_type.as_path());
        self.fetch_records(&path, &[]).await
    }

    async fn keyword_search(&self, query: &str) -> Result<Vec<KeywordRecord>, CatalogError> {
        let page: KeywordPage = self
            .fetch(
                "/search/keyword",
                &[("query".to_string(), query.to_string())],
            )
            .await?;
        Ok(page.results)
    }
}
