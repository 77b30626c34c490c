//! Message classification: media type, similarity patterns, entities.
//!
//! Pure functions over lower-cased text. No catalog access happens
//! here, which keeps classification deterministic and cheap to test:
//! the same message always yields the same `Classification`.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize;
use crate::tables;
use crate::types::MediaType;

// Small fixed rule set, not a grammar.
static SIMILARITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:like|similar to)\s+(.+)").unwrap());

/// Coarse request intent read from keyword presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseIntent {
    /// Trending/popular/hot keywords present.
    Trending,
    /// Top/best/rated/good keywords present.
    TopRated,
}

/// Entities extracted from a non-similarity message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedEntities {
    /// Genre ids in table order; every key found in the text
    /// contributes, duplicates included.
    pub genre_ids: Vec<u32>,
    /// Two-letter language code. When several language keywords appear
    /// the one declared last in the table wins; see `tables::LANGUAGES`.
    pub language: Option<String>,
    /// Coarse intent; top-rated overwrites trending when both fire.
    pub intent: Option<CoarseIntent>,
}

/// Fully classified message. Exactly one variant is active per message.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedIntent {
    /// "like X" / "similar to X" request carrying the raw candidate
    /// title (trailing filler words already stripped).
    SimilarTo {
        /// Raw candidate title as typed, filler removed.
        title: String,
    },
    /// Trending request.
    Trending,
    /// Top-rated request.
    TopRated,
    /// Structured discover request (genres, language, or TV default).
    Discover,
    /// Free-text fallback over the catalog keyword index.
    KeywordFallback {
        /// Lower-cased text with media words stripped.
        residual: String,
    },
    /// Nothing recognizable; answered with a help reply.
    Unresolved,
}

/// Everything the strategy router needs to pick and run a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Selected intent variant.
    pub intent: ParsedIntent,
    /// Media type detected once per message and threaded through every
    /// later stage.
    pub media_type: MediaType,
    /// Extracted entities; empty for similarity requests.
    pub entities: ExtractedEntities,
}

/// Classify the message as movie, tv, or neutral.
///
/// Runs exactly once per message; the result is never recomputed after
/// similarity detection consumes part of the string.
pub fn detect_media_type(text: &str) -> MediaType {
    if tables::TV_WORDS.iter().any(|word| text.contains(word)) {
        return MediaType::Tv;
    }
    if text.contains("movie") || text.contains("film") {
        MediaType::Movie
    } else {
        MediaType::Neutral
    }
}

/// Extract the candidate title from a "like X" / "similar to X" phrase.
///
/// Returns the raw query with trailing media words stripped, or `None`
/// when the pattern is absent or nothing remains after stripping.
pub fn detect_similarity(text: &str) -> Option<String> {
    let captures = SIMILARITY_RE.captures(text)?;
    let raw = normalize::strip_trailing_media_words(captures.get(1)?.as_str());
    if raw.is_empty() { None } else { Some(raw) }
}

/// Scan lower-cased text for genre, language, and coarse intent
/// keywords.
///
/// Genre ids come from the table matching the media type (the movie
/// table also serves neutral messages). Matching is literal substring
/// containment; no dedup pass runs at this stage.
pub fn extract_entities(text: &str, media_type: MediaType) -> ExtractedEntities {
    let genre_table = match media_type.resolved() {
        MediaType::Tv => tables::TV_GENRES,
        _ => tables::MOVIE_GENRES,
    };

    let mut entities = ExtractedEntities::default();

    for (key, id) in genre_table {
        if text.contains(key) {
            entities.genre_ids.push(*id);
        }
    }

    for (key, code) in tables::LANGUAGES {
        if text.contains(key) {
            entities.language = Some((*code).to_string());
        }
    }

    if tables::TRENDING_WORDS.iter().any(|word| text.contains(word)) {
        entities.intent = Some(CoarseIntent::Trending);
    }
    if tables::TOP_RATED_WORDS.iter().any(|word| text.contains(word)) {
        entities.intent = Some(CoarseIntent::TopRated);
    }

    entities
}

/// Classify a raw message into the intent the router dispatches on.
///
/// Deterministic: identical input yields an identical classification.
pub fn classify(message: &str) -> Classification {
    let text = message.to_lowercase();
    let media_type = detect_media_type(&text);

    if let Some(title) = detect_similarity(&text) {
        return Classification {
            intent: ParsedIntent::SimilarTo { title },
            media_type,
            entities: ExtractedEntities::default(),
        };
    }

    let entities = extract_entities(&text, media_type);
    let intent = match entities.intent {
        Some(CoarseIntent::Trending) => ParsedIntent::Trending,
        Some(CoarseIntent::TopRated) => ParsedIntent::TopRated,
        None if !entities.genre_ids.is_empty()
            || entities.language.is_some()
            || media_type == MediaType::Tv =>
        {
            ParsedIntent::Discover
        }
        None => {
            let residual = normalize::strip_media_words(&text);
            if residual.len() > 2 {
                ParsedIntent::KeywordFallback { residual }
            } else {
                ParsedIntent::Unresolved
            }
        }
    };

    Classification {
        intent,
        media_type,
        entities,
    }
}
