//! End-to-end pipeline tests over a scripted catalog.
//!
//! Each test feeds one chat message through `Resolver::resolve` and
//! asserts both the reply shape and the exact catalog calls the
//! selected strategy constructed.

use std::sync::Arc;

use marquee_core::catalog::mock::{CatalogCall, MockCatalog, movie_record, tv_record};
use marquee_core::types::{CatalogRecord, KeywordRecord, SortKey, TrendingWindow};
use marquee_core::{DiscoveryQuery, MediaType, Resolver};

fn resolver_with(mock: MockCatalog) -> (Arc<MockCatalog>, Resolver) {
    let catalog = Arc::new(mock);
    let resolver = Resolver::new(catalog.clone());
    (catalog, resolver)
}

fn five_movies() -> Vec<CatalogRecord> {
    (1..=5)
        .map(|id| movie_record(id, &format!("Movie {id}"), "2021-03-01", 7.2))
        .collect()
}

#[tokio::test]
async fn telugu_horror_movies_builds_popularity_discover() {
    let (catalog, resolver) =
        resolver_with(MockCatalog::new().with_discover_results(five_movies()));

    let reply = resolver.resolve("Telugu horror movies").await;

    let expected = DiscoveryQuery::new(MediaType::Movie, SortKey::Popularity)
        .with_genres(&[27])
        .with_language(Some("te".to_string()));
    assert_eq!(catalog.calls(), vec![CatalogCall::Discover(expected)]);
    assert_eq!(reply.items.len(), 5);
}

#[tokio::test]
async fn language_without_genre_yields_empty_genre_set() {
    let (catalog, resolver) =
        resolver_with(MockCatalog::new().with_discover_results(five_movies()));

    resolver.resolve("malayalam movies").await;

    let calls = catalog.calls();
    let CatalogCall::Discover(query) = &calls[0] else {
        panic!("expected a discover call, got {calls:?}");
    };
    assert!(query.genre_ids.is_empty());
    assert_eq!(query.language.as_deref(), Some("ml"));
}

#[tokio::test]
async fn movies_like_inception_uses_concept_and_excludes_source() {
    let mut records = vec![movie_record(27205, "Inception", "2010-07-15", 8.4)];
    records.extend((1..=5).map(|id| movie_record(id, &format!("Pick {id}"), "2015-01-01", 7.5)));

    let (catalog, resolver) = resolver_with(MockCatalog::new().with_discover_results(records));

    let reply = resolver.resolve("Movies like Inception").await;

    let expected = DiscoveryQuery::new(MediaType::Movie, SortKey::Popularity)
        .with_genres(&[878, 28, 53])
        .with_min_vote_average(6.0);
    assert_eq!(catalog.calls(), vec![CatalogCall::Discover(expected)]);

    // First five are taken, then the echoed source title is dropped.
    assert_eq!(reply.items.len(), 4);
    assert!(reply.items.iter().all(|item| item.title != "Inception"));
    assert!(reply.text.contains("inception"));
}

#[tokio::test]
async fn neutral_similarity_adopts_concept_media_type() {
    let (catalog, resolver) = resolver_with(
        MockCatalog::new().with_discover_results(vec![tv_record(101, "Dark", "2017-12-01", 8.2)]),
    );

    let reply = resolver.resolve("anything like stranger things").await;

    let calls = catalog.calls();
    let CatalogCall::Discover(query) = &calls[0] else {
        panic!("expected a discover call, got {calls:?}");
    };
    assert_eq!(query.media_type, MediaType::Tv);
    assert_eq!(query.genre_ids, vec![10765, 9648, 18]);
    assert_eq!(reply.items[0].media_type, MediaType::Tv);
}

#[tokio::test]
async fn unknown_similar_title_searches_then_recommends() {
    let (catalog, resolver) = resolver_with(
        MockCatalog::new()
            .with_search_results(vec![movie_record(42, "Zorblax", "2019-06-01", 6.1)])
            .with_recommendation_results(
                (1..=6)
                    .map(|id| movie_record(id, &format!("Rec {id}"), "2020-01-01", 6.8))
                    .collect(),
            ),
    );

    let reply = resolver.resolve("movies like zorblax").await;

    assert_eq!(
        catalog.calls(),
        vec![
            CatalogCall::Search {
                media_type: MediaType::Movie,
                query: "zorblax".to_string(),
            },
            CatalogCall::Recommendations {
                media_type: MediaType::Movie,
                id: 42,
            },
        ]
    );
    assert_eq!(reply.items.len(), 5);
}

#[tokio::test]
async fn tv_similarity_results_are_tagged_tv() {
    let (_, resolver) = resolver_with(
        MockCatalog::new()
            .with_search_results(vec![tv_record(7, "Cosmic Detective", "2022-02-02", 7.7)])
            .with_recommendation_results(vec![tv_record(8, "Star Sleuth", "2023-03-03", 7.1)]),
    );

    let reply = resolver.resolve("shows like cosmic detective").await;

    assert!(!reply.items.is_empty());
    assert!(
        reply
            .items
            .iter()
            .all(|item| item.media_type == MediaType::Tv)
    );
}

#[tokio::test]
async fn similar_title_not_found_names_query_and_type() {
    let (catalog, resolver) = resolver_with(MockCatalog::new());

    let reply = resolver.resolve("movies like zorblax").await;

    assert!(reply.text.contains("zorblax"));
    assert!(reply.text.contains("movie"));
    assert!(reply.items.is_empty());
    // No recommendations call after an empty search.
    assert_eq!(catalog.calls().len(), 1);
}

#[tokio::test]
async fn best_tv_shows_is_top_rated_discover() {
    let (catalog, resolver) = resolver_with(
        MockCatalog::new().with_discover_results(vec![tv_record(1, "The Wire", "2002-06-02", 8.6)]),
    );

    resolver.resolve("best tv shows").await;

    let expected =
        DiscoveryQuery::new(MediaType::Tv, SortKey::VoteAverage).with_min_vote_count(200);
    assert_eq!(catalog.calls(), vec![CatalogCall::Discover(expected)]);
}

#[tokio::test]
async fn bare_trending_resolves_to_movie_weekly_feed() {
    let (catalog, resolver) =
        resolver_with(MockCatalog::new().with_trending_results(five_movies()));

    let reply = resolver.resolve("trending").await;

    assert_eq!(
        catalog.calls(),
        vec![CatalogCall::Trending {
            media_type: MediaType::Movie,
            window: TrendingWindow::Week,
        }]
    );
    assert_eq!(reply.items.len(), 5);
}

#[tokio::test]
async fn trending_with_language_redirects_to_discover() {
    let (catalog, resolver) =
        resolver_with(MockCatalog::new().with_discover_results(five_movies()));

    resolver.resolve("popular korean movies").await;

    let expected = DiscoveryQuery::new(MediaType::Movie, SortKey::Popularity)
        .with_language(Some("ko".to_string()));
    assert_eq!(catalog.calls(), vec![CatalogCall::Discover(expected)]);
}

#[tokio::test]
async fn keyword_fallback_issues_two_parallel_lookups() {
    let (catalog, resolver) = resolver_with(
        MockCatalog::new()
            .with_keyword_results(vec![KeywordRecord {
                id: 9882,
                name: "space".to_string(),
            }])
            .with_discover_results(five_movies()),
    );

    let reply = resolver.resolve("space heist").await;

    let calls = catalog.calls();
    assert_eq!(
        &calls[..2],
        &[
            CatalogCall::KeywordSearch {
                query: "space".to_string(),
            },
            CatalogCall::KeywordSearch {
                query: "heist".to_string(),
            },
        ]
    );
    let CatalogCall::Discover(query) = &calls[2] else {
        panic!("expected a discover call, got {calls:?}");
    };
    assert_eq!(query.keyword_ids, vec![9882, 9882]);
    assert!(!reply.items.is_empty());
}

#[tokio::test]
async fn keyword_fallback_caps_fanout_at_two() {
    let (catalog, resolver) = resolver_with(
        MockCatalog::new()
            .with_keyword_results(vec![KeywordRecord {
                id: 1,
                name: "k".to_string(),
            }])
            .with_discover_results(five_movies()),
    );

    resolver.resolve("deep space mining colony").await;

    let lookups = catalog
        .calls()
        .iter()
        .filter(|call| matches!(call, CatalogCall::KeywordSearch { .. }))
        .count();
    assert_eq!(lookups, 2);
}

#[tokio::test]
async fn keyword_fallback_tolerates_individual_lookup_failure() {
    let (catalog, resolver) = resolver_with(
        MockCatalog::new()
            .with_keyword_results(vec![KeywordRecord {
                id: 7,
                name: "heist".to_string(),
            }])
            .with_failing_keyword_query("space")
            .with_discover_results(five_movies()),
    );

    let reply = resolver.resolve("space heist").await;

    let calls = catalog.calls();
    let CatalogCall::Discover(query) = calls.last().unwrap() else {
        panic!("expected a discover call, got {calls:?}");
    };
    assert_eq!(query.keyword_ids, vec![7]);
    assert!(!reply.items.is_empty());
}

#[tokio::test]
async fn keyword_fallback_without_ids_or_genres_reports_no_matches() {
    let (catalog, resolver) = resolver_with(MockCatalog::new());

    let reply = resolver.resolve("space heist").await;

    assert!(reply.text.contains("couldn't find matches"));
    assert!(reply.items.is_empty());
    // Two keyword lookups, but no discover call.
    assert_eq!(catalog.calls().len(), 2);
}

#[tokio::test]
async fn empty_discover_results_report_no_matches() {
    let (_, resolver) = resolver_with(MockCatalog::new());

    let reply = resolver.resolve("horror movies").await;

    assert!(reply.text.contains("couldn't find matches"));
    assert!(reply.items.is_empty());
}

#[tokio::test]
async fn upstream_failure_yields_apologetic_reply() {
    let (_, resolver) = resolver_with(MockCatalog::new().failing());

    let reply = resolver.resolve("Telugu horror movies").await;

    assert!(reply.text.contains("had trouble"));
    assert!(reply.items.is_empty());
}

#[tokio::test]
async fn short_residual_gets_help_and_no_catalog_traffic() {
    let (catalog, resolver) = resolver_with(MockCatalog::new());

    let reply = resolver.resolve("hi").await;

    assert!(reply.text.contains("Try"));
    assert!(reply.items.is_empty());
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn resolving_twice_constructs_identical_queries() {
    let (catalog, resolver) =
        resolver_with(MockCatalog::new().with_discover_results(five_movies()));

    resolver.resolve("Telugu horror movies").await;
    resolver.resolve("Telugu horror movies").await;

    let calls = catalog.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn results_never_exceed_five() {
    let (_, resolver) = resolver_with(
        MockCatalog::new().with_discover_results(
            (1..=9)
                .map(|id| movie_record(id, &format!("Movie {id}"), "2020-01-01", 7.0))
                .collect(),
        ),
    );

    let reply = resolver.resolve("action movies").await;
    assert_eq!(reply.items.len(), 5);
}
