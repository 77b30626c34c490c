//! Strategy routing, discovery strategies, and reply construction.
//!
//! `Resolver::resolve` is the single entry point the chat UI calls. It
//! classifies the message, runs exactly one discovery strategy, and
//! always terminates in a well-formed [`ResolverReply`]: upstream
//! failures, empty results, and unrecognized input all map to
//! explanatory text with zero items instead of an error.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::catalog::CatalogClient;
use crate::concepts::{self, ConceptEntry};
use crate::errors::CatalogError;
use crate::intent::{self, Classification, ExtractedEntities, ParsedIntent};
use crate::normalize;
use crate::types::{
    CatalogRecord, DiscoveryQuery, MediaType, ResolverReply, ResultItem, SortKey, TrendingWindow,
};

/// Maximum items handed to the UI per reply.
const MAX_RESULTS: usize = 5;

/// Fan-out cap for keyword-fallback lookups.
const MAX_KEYWORD_LOOKUPS: usize = 2;

/// Minimum vote average for concept-driven discovery.
const CONCEPT_MIN_RATING: f32 = 6.0;

/// Minimum vote count for top-rated discovery.
const TOP_RATED_MIN_VOTES: u32 = 200;

const TROUBLE_TEXT: &str =
    "I had trouble finding recommendations right now. Please try again in a moment.";

const NO_MATCHES_TEXT: &str =
    "I couldn't find matches for that. Try a genre, a language, or a title you like.";

const HELP_TEXT: &str = "I can help you discover movies and shows. Try \"Telugu horror movies\", \
                         \"movies like Inception\", or \"trending\".";

/// Resolves free-text chat messages into catalog queries and replies.
///
/// Holds only a shared catalog handle, so concurrent independent
/// invocations are safe.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<dyn CatalogClient>,
}

impl Resolver {
    /// Create a resolver over the given catalog client.
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Resolve one message into a reply.
    ///
    /// Never fails: any catalog error is converted into a fixed
    /// apologetic reply at this boundary and logged, not surfaced.
    pub async fn resolve(&self, message: &str) -> ResolverReply {
        let classification = intent::classify(message);
        debug!(
            intent = ?classification.intent,
            media_type = ?classification.media_type,
            "classified message"
        );

        match self.dispatch(&classification).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "catalog call failed, returning fallback reply");
                ResolverReply::text_only(TROUBLE_TEXT)
            }
        }
    }

    /// Run the single strategy selected by the classification.
    async fn dispatch(
        &self,
        classification: &Classification,
    ) -> Result<ResolverReply, CatalogError> {
        match &classification.intent {
            ParsedIntent::SimilarTo { title } => {
                self.similar_to(title, classification.media_type).await
            }
            ParsedIntent::Trending => self.trending(classification).await,
            ParsedIntent::TopRated => self.top_rated(classification).await,
            ParsedIntent::Discover => self.discover(classification).await,
            ParsedIntent::KeywordFallback { residual } => {
                self.keyword_fallback(residual, classification).await
            }
            ParsedIntent::Unresolved => Ok(ResolverReply::text_only(HELP_TEXT)),
        }
    }

    /// Route a "like X" request: curated concept when the title is
    /// known, live search-plus-recommendations otherwise.
    async fn similar_to(
        &self,
        title: &str,
        target: MediaType,
    ) -> Result<ResolverReply, CatalogError> {
        let normalized = normalize::normalize_title(title);
        if let Some(concept) = concepts::concept_for(&normalized) {
            debug!(title, "similarity request hit the concept table");
            return self.concept_discover(title, &normalized, concept, target).await;
        }
        self.catalog_similarity(title, target).await
    }

    /// Concept Strategy: discover by the curated genre ids, then drop
    /// any result that would echo the source title back.
    async fn concept_discover(
        &self,
        raw: &str,
        normalized: &str,
        concept: &ConceptEntry,
        target: MediaType,
    ) -> Result<ResolverReply, CatalogError> {
        let media_type = match target {
            MediaType::Neutral => concept.media_type,
            other => other,
        };

        let query = DiscoveryQuery::new(media_type, SortKey::Popularity)
            .with_genres(concept.genre_ids)
            .with_min_vote_average(CONCEPT_MIN_RATING);
        let records = self.catalog.discover(&query).await?;

        let items: Vec<ResultItem> = records
            .iter()
            .take(MAX_RESULTS)
            .map(|record| ResultItem::from_record(record, media_type))
            .filter(|item| normalize::normalize_title(&item.title) != normalized)
            .collect();

        Ok(ResolverReply {
            text: format!(
                "Since you liked {raw}, here are some {}:",
                concept.description
            ),
            items,
        })
    }

    /// Title-Similarity Strategy: anchor on the top search hit and pull
    /// its recommendations.
    async fn catalog_similarity(
        &self,
        title: &str,
        target: MediaType,
    ) -> Result<ResolverReply, CatalogError> {
        let media_type = target.resolved();

        let hits = self.catalog.search(media_type, title).await?;
        let Some(anchor) = hits.first() else {
            return Ok(ResolverReply::text_only(format!(
                "I couldn't find \"{title}\" as a {}. Try another title?",
                media_type.as_path()
            )));
        };

        let records = self.catalog.recommendations(media_type, anchor.id).await?;
        Ok(ResolverReply {
            text: format!("Here are some titles similar to \"{title}\":"),
            items: normalize_results(&records, media_type),
        })
    }

    /// Trending Strategy. The upstream trending feed cannot filter by
    /// language, so a language request redirects to discover.
    async fn trending(
        &self,
        classification: &Classification,
    ) -> Result<ResolverReply, CatalogError> {
        let media_type = classification.media_type.resolved();

        if classification.entities.language.is_some() {
            let query =
                discover_query(media_type, &classification.entities, SortKey::Popularity);
            let records = self.catalog.discover(&query).await?;
            return Ok(ResolverReply {
                text: "Here's what's popular right now:".to_string(),
                items: normalize_results(&records, media_type),
            });
        }

        let records = self
            .catalog
            .trending(media_type, TrendingWindow::Week)
            .await?;
        Ok(ResolverReply {
            text: "Here's what's trending this week:".to_string(),
            items: normalize_results(&records, media_type),
        })
    }

    /// Top-Rated Strategy: discover sorted by vote average, floored by
    /// a vote-count filter so obscure titles don't dominate.
    async fn top_rated(
        &self,
        classification: &Classification,
    ) -> Result<ResolverReply, CatalogError> {
        let media_type = classification.media_type.resolved();
        let query = discover_query(media_type, &classification.entities, SortKey::VoteAverage)
            .with_min_vote_count(TOP_RATED_MIN_VOTES);

        let records = self.catalog.discover(&query).await?;
        if records.is_empty() {
            return Ok(ResolverReply::text_only(NO_MATCHES_TEXT));
        }
        Ok(ResolverReply {
            text: "Here are some top-rated picks:".to_string(),
            items: normalize_results(&records, media_type),
        })
    }

    /// Discover Strategy over extracted genres and language.
    async fn discover(
        &self,
        classification: &Classification,
    ) -> Result<ResolverReply, CatalogError> {
        let media_type = classification.media_type.resolved();
        let query = discover_query(media_type, &classification.entities, SortKey::Popularity);

        let records = self.catalog.discover(&query).await?;
        if records.is_empty() {
            return Ok(ResolverReply::text_only(NO_MATCHES_TEXT));
        }
        Ok(ResolverReply {
            text: "Here's what I found:".to_string(),
            items: normalize_results(&records, media_type),
        })
    }

    /// Keyword Fallback Strategy: resolve free text against the
    /// catalog's keyword index, then discover over whatever resolved.
    ///
    /// Lookups run concurrently, capped at two; a failed lookup is
    /// logged and contributes nothing without affecting the others.
    async fn keyword_fallback(
        &self,
        residual: &str,
        classification: &Classification,
    ) -> Result<ResolverReply, CatalogError> {
        let media_type = classification.media_type.resolved();

        let terms: Vec<&str> = residual
            .split_whitespace()
            .filter(|word| word.len() > 2)
            .take(MAX_KEYWORD_LOOKUPS)
            .collect();

        let lookups = terms.iter().map(|term| self.catalog.keyword_search(term));
        let mut keyword_ids = Vec::new();
        for outcome in join_all(lookups).await {
            match outcome {
                Ok(records) => {
                    if let Some(first) = records.first() {
                        keyword_ids.push(first.id);
                    }
                }
                Err(error) => warn!(%error, "keyword lookup failed, skipping term"),
            }
        }

        if keyword_ids.is_empty() && classification.entities.genre_ids.is_empty() {
            return Ok(ResolverReply::text_only(NO_MATCHES_TEXT));
        }

        let mut query =
            discover_query(media_type, &classification.entities, SortKey::Popularity);
        query.keyword_ids = keyword_ids;

        let records = self.catalog.discover(&query).await?;
        if records.is_empty() {
            return Ok(ResolverReply::text_only(NO_MATCHES_TEXT));
        }
        Ok(ResolverReply {
            text: format!("Here's what I found for \"{residual}\":"),
            items: normalize_results(&records, media_type),
        })
    }
}

/// Build a discover query from extracted entities.
fn discover_query(
    media_type: MediaType,
    entities: &ExtractedEntities,
    sort_by: SortKey,
) -> DiscoveryQuery {
    DiscoveryQuery::new(media_type, sort_by)
        .with_genres(&entities.genre_ids)
        .with_language(entities.language.clone())
}

/// Project catalog records into at most [`MAX_RESULTS`] UI items.
///
/// Order is whatever the catalog returned; no local re-sorting beyond
/// the sort key already sent upstream.
fn normalize_results(records: &[CatalogRecord], media_type: MediaType) -> Vec<ResultItem> {
    records
        .iter()
        .take(MAX_RESULTS)
        .map(|record| ResultItem::from_record(record, media_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::{movie_record, MockCatalog};

    #[tokio::test]
    async fn unresolved_message_gets_help_without_catalog_calls() {
        let catalog = Arc::new(MockCatalog::new());
        let resolver = Resolver::new(catalog.clone());

        let reply = resolver.resolve("hi").await;
        assert_eq!(reply.text, HELP_TEXT);
        assert!(reply.items.is_empty());
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_message_gets_help() {
        let resolver = Resolver::new(Arc::new(MockCatalog::new()));
        let reply = resolver.resolve("").await;
        assert_eq!(reply.text, HELP_TEXT);
        assert!(reply.items.is_empty());
    }

    #[test]
    fn normalize_results_caps_at_five() {
        let records: Vec<CatalogRecord> = (1..=8)
            .map(|id| movie_record(id, &format!("Movie {id}"), "2020-01-01", 7.0))
            .collect();
        let items = normalize_results(&records, MediaType::Movie);
        assert_eq!(items.len(), MAX_RESULTS);
        assert_eq!(items[0].id, 1);
    }
}
