//! Data types shared across the resolution pipeline.

use serde::{Deserialize, Serialize};

/// Media classification for a user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature film catalog.
    Movie,
    /// Television catalog.
    Tv,
    /// No type keyword was present. Collapses to `Movie` at the point a
    /// strategy is invoked, never persisted past that.
    Neutral,
}

impl MediaType {
    /// Path segment used by the catalog API ("movie" or "tv").
    pub fn as_path(self) -> &'static str {
        match self {
            MediaType::Tv => "tv",
            _ => "movie",
        }
    }

    /// Collapse `Neutral` to `Movie` for strategy dispatch.
    pub fn resolved(self) -> MediaType {
        match self {
            MediaType::Neutral => MediaType::Movie,
            other => other,
        }
    }
}

/// Time window for the catalog's trending feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    /// Trending today.
    Day,
    /// Trending this week.
    Week,
}

impl TrendingWindow {
    /// Path segment used by the catalog API.
    pub fn as_path(self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

/// Sort order requested from the catalog's discover endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most popular first.
    Popularity,
    /// Highest rated first.
    VoteAverage,
}

impl SortKey {
    /// Parameter value understood by the catalog.
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity.desc",
            SortKey::VoteAverage => "vote_average.desc",
        }
    }
}

/// Structured filter set sent to the catalog's discover endpoint.
///
/// Built fresh per request; identical input always produces an
/// identical query.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryQuery {
    /// Catalog to query.
    pub media_type: MediaType,
    /// Genre filter, de-duplicated with first-seen order preserved.
    pub genre_ids: Vec<u32>,
    /// Two-letter original-language code filter.
    pub language: Option<String>,
    /// Requested sort order.
    pub sort_by: SortKey,
    /// Minimum vote count filter.
    pub min_vote_count: Option<u32>,
    /// Minimum vote average filter.
    pub min_vote_average: Option<f32>,
    /// Keyword id filter from the catalog's keyword index.
    pub keyword_ids: Vec<u64>,
}

impl DiscoveryQuery {
    /// Create a query with no filters beyond type and sort order.
    pub fn new(media_type: MediaType, sort_by: SortKey) -> Self {
        Self {
            media_type,
            genre_ids: Vec::new(),
            language: None,
            sort_by,
            min_vote_count: None,
            min_vote_average: None,
            keyword_ids: Vec::new(),
        }
    }

    /// Set the genre filter, dropping duplicate ids while keeping the
    /// first-seen order.
    pub fn with_genres(mut self, ids: &[u32]) -> Self {
        let mut deduped = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(id) {
                deduped.push(*id);
            }
        }
        self.genre_ids = deduped;
        self
    }

    /// Set the original-language filter.
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Set the minimum vote count filter.
    pub fn with_min_vote_count(mut self, count: u32) -> Self {
        self.min_vote_count = Some(count);
        self
    }

    /// Set the minimum vote average filter.
    pub fn with_min_vote_average(mut self, average: f32) -> Self {
        self.min_vote_average = Some(average);
        self
    }
}

/// Raw record returned by the catalog.
///
/// Covers both the movie shape (`title`/`release_date`) and the TV
/// shape (`name`/`first_air_date`); absent fields deserialize to
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Catalog identifier.
    pub id: u64,
    /// Movie title, absent on TV records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// TV show name, absent on movie records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Movie release date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// TV first-air date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    /// Vote average on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    /// Relative poster image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

impl CatalogRecord {
    /// Title of the record regardless of shape, empty when both title
    /// fields are absent.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Date of the record regardless of shape.
    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
    }
}

/// Keyword record from the catalog's keyword index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Keyword identifier usable as a discover filter.
    pub id: u64,
    /// Human-readable keyword.
    pub name: String,
}

/// Normalized projection of a catalog record handed to the UI.
///
/// Always a fresh value; catalog responses are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Catalog identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Relative poster image path.
    pub poster_path: Option<String>,
    /// Vote average rounded to one decimal, absent when the catalog
    /// carried none.
    pub rating: Option<f64>,
    /// Four-digit release year, empty when unknown.
    pub year: String,
    /// Media type so the UI can route to the correct detail page.
    pub media_type: MediaType,
}

impl ResultItem {
    /// Project a catalog record into a UI item.
    pub fn from_record(record: &CatalogRecord, media_type: MediaType) -> Self {
        let rating = record.vote_average.map(|v| (v * 10.0).round() / 10.0);
        let year = record
            .date()
            .map(|d| d.chars().take(4).collect())
            .unwrap_or_default();

        Self {
            id: record.id,
            title: record.display_title().to_string(),
            poster_path: record.poster_path.clone(),
            rating,
            year,
            media_type,
        }
    }

    /// Display label for the rating, `"N/A"` when absent.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{rating:.1}"),
            None => "N/A".to_string(),
        }
    }
}

/// Reply returned to the chat UI: short text plus at most five items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverReply {
    /// Natural-language reply text.
    pub text: String,
    /// Ranked result items, capped at five.
    pub items: Vec<ResultItem>,
}

impl ResolverReply {
    /// Reply with text only, no items.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_resolves_neutral_to_movie() {
        assert_eq!(MediaType::Neutral.resolved(), MediaType::Movie);
        assert_eq!(MediaType::Tv.resolved(), MediaType::Tv);
        assert_eq!(MediaType::Movie.resolved(), MediaType::Movie);
    }

    #[test]
    fn discovery_query_dedupes_genres_in_order() {
        let query = DiscoveryQuery::new(MediaType::Movie, SortKey::Popularity)
            .with_genres(&[28, 878, 28, 53, 878]);
        assert_eq!(query.genre_ids, vec![28, 878, 53]);
    }

    #[test]
    fn result_item_projects_movie_shape() {
        let record = CatalogRecord {
            id: 27205,
            title: Some("Inception".to_string()),
            release_date: Some("2010-07-15".to_string()),
            vote_average: Some(8.367),
            poster_path: Some("/inception.jpg".to_string()),
            ..CatalogRecord::default()
        };

        let item = ResultItem::from_record(&record, MediaType::Movie);
        assert_eq!(item.title, "Inception");
        assert_eq!(item.year, "2010");
        assert_eq!(item.rating, Some(8.4));
        assert_eq!(item.rating_label(), "8.4");
    }

    #[test]
    fn result_item_projects_tv_shape() {
        let record = CatalogRecord {
            id: 1396,
            name: Some("Breaking Bad".to_string()),
            first_air_date: Some("2008-01-20".to_string()),
            ..CatalogRecord::default()
        };

        let item = ResultItem::from_record(&record, MediaType::Tv);
        assert_eq!(item.title, "Breaking Bad");
        assert_eq!(item.year, "2008");
        assert_eq!(item.media_type, MediaType::Tv);
        assert_eq!(item.rating, None);
        assert_eq!(item.rating_label(), "N/A");
    }

    #[test]
    fn result_item_defaults_year_to_empty() {
        let record = CatalogRecord {
            id: 1,
            title: Some("Untitled".to_string()),
            ..CatalogRecord::default()
        };

        let item = ResultItem::from_record(&record, MediaType::Movie);
        assert_eq!(item.year, "");
    }
}
