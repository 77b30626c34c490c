//! Curated concept table backing "similar to" requests.
//!
//! Each entry maps a well-known title to its canonical catalog id,
//! representative genre ids, and a short blurb woven into reply text.
//! Curated matches produce better "similar to" listings than a live
//! recommendation call, so the resolver consults this table first.

use crate::types::MediaType;

/// Hand-authored record for a well-known title.
#[derive(Debug, Clone, Copy)]
pub struct ConceptEntry {
    /// Canonical catalog id of the source title.
    pub canonical_id: u64,
    /// Catalog the title belongs to.
    pub media_type: MediaType,
    /// Representative genre ids, most relevant first.
    pub genre_ids: &'static [u32],
    /// Descriptive keyword expression. Metadata only, never sent
    /// upstream.
    pub keywords: &'static str,
    /// Short description used in the reply text.
    pub description: &'static str,
}

/// Concept table keyed by normalized title.
///
/// Keys must already be in normalized form (lower-case, ASCII
/// alphanumerics and spaces); `keys_are_normalized` guards this.
pub const CONCEPTS: &[(&str, ConceptEntry)] = &[
    (
        "inception",
        ConceptEntry {
            canonical_id: 27205,
            media_type: MediaType::Movie,
            genre_ids: &[878, 28, 53],
            keywords: "dream|heist|subconscious",
            description: "mind-bending sci-fi thrillers",
        },
    ),
    (
        "interstellar",
        ConceptEntry {
            canonical_id: 157336,
            media_type: MediaType::Movie,
            genre_ids: &[878, 18, 12],
            keywords: "space|wormhole|time dilation",
            description: "epic space-faring science fiction",
        },
    ),
    (
        "the matrix",
        ConceptEntry {
            canonical_id: 603,
            media_type: MediaType::Movie,
            genre_ids: &[28, 878],
            keywords: "simulation|dystopia|cyberpunk",
            description: "reality-questioning cyberpunk action",
        },
    ),
    (
        "the dark knight",
        ConceptEntry {
            canonical_id: 155,
            media_type: MediaType::Movie,
            genre_ids: &[28, 80, 18],
            keywords: "vigilante|crime|anti-hero",
            description: "gritty crime-driven superhero films",
        },
    ),
    (
        "parasite",
        ConceptEntry {
            canonical_id: 496243,
            media_type: MediaType::Movie,
            genre_ids: &[35, 53, 18],
            keywords: "class divide|dark comedy",
            description: "sharp social-satire thrillers",
        },
    ),
    (
        "get out",
        ConceptEntry {
            canonical_id: 419430,
            media_type: MediaType::Movie,
            genre_ids: &[9648, 53, 27],
            keywords: "social horror|paranoia",
            description: "unsettling social-commentary horror",
        },
    ),
    (
        "john wick",
        ConceptEntry {
            canonical_id: 245891,
            media_type: MediaType::Movie,
            genre_ids: &[28, 53, 80],
            keywords: "assassin|revenge|gun fu",
            description: "stylish revenge-driven action",
        },
    ),
    (
        "harry potter",
        ConceptEntry {
            canonical_id: 671,
            media_type: MediaType::Movie,
            genre_ids: &[14, 12],
            keywords: "magic|wizard|school",
            description: "whimsical fantasy adventures",
        },
    ),
    (
        "titanic",
        ConceptEntry {
            canonical_id: 597,
            media_type: MediaType::Movie,
            genre_ids: &[18, 10749],
            keywords: "romance|tragedy|period",
            description: "sweeping romantic dramas",
        },
    ),
    (
        "stranger things",
        ConceptEntry {
            canonical_id: 66732,
            media_type: MediaType::Tv,
            genre_ids: &[10765, 9648, 18],
            keywords: "supernatural|small town|80s",
            description: "nostalgic supernatural mysteries",
        },
    ),
    (
        "breaking bad",
        ConceptEntry {
            canonical_id: 1396,
            media_type: MediaType::Tv,
            genre_ids: &[18, 80],
            keywords: "antihero|drugs|descent",
            description: "slow-burn crime dramas",
        },
    ),
    (
        "the office",
        ConceptEntry {
            canonical_id: 2316,
            media_type: MediaType::Tv,
            genre_ids: &[35],
            keywords: "mockumentary|workplace",
            description: "workplace comedies",
        },
    ),
    (
        "black mirror",
        ConceptEntry {
            canonical_id: 42009,
            media_type: MediaType::Tv,
            genre_ids: &[10765, 18, 9648],
            keywords: "technology|anthology|dystopia",
            description: "dark near-future anthologies",
        },
    ),
    (
        "game of thrones",
        ConceptEntry {
            canonical_id: 1399,
            media_type: MediaType::Tv,
            genre_ids: &[10765, 18, 10759],
            keywords: "political intrigue|epic fantasy",
            description: "sprawling fantasy epics",
        },
    ),
    (
        "money heist",
        ConceptEntry {
            canonical_id: 71446,
            media_type: MediaType::Tv,
            genre_ids: &[80, 18],
            keywords: "heist|hostage|mastermind",
            description: "high-stakes heist thrillers",
        },
    ),
];

/// Look up a normalized title in the concept table.
pub fn concept_for(normalized_title: &str) -> Option<&'static ConceptEntry> {
    CONCEPTS
        .iter()
        .find(|(key, _)| *key == normalized_title)
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_title;

    #[test]
    fn keys_are_normalized() {
        for (key, _) in CONCEPTS {
            assert_eq!(*key, normalize_title(key), "key {key} is not normalized");
        }
    }

    #[test]
    fn lookup_hits_known_title() {
        let entry = concept_for("inception").expect("inception is curated");
        assert_eq!(entry.canonical_id, 27205);
        assert_eq!(entry.media_type, MediaType::Movie);
        assert_eq!(entry.genre_ids, &[878, 28, 53]);
    }

    #[test]
    fn lookup_misses_unknown_title() {
        assert!(concept_for("some obscure title").is_none());
    }

    #[test]
    fn every_entry_has_genres_and_description() {
        for (key, entry) in CONCEPTS {
            assert!(!entry.genre_ids.is_empty(), "{key} has no genres");
            assert!(!entry.description.is_empty(), "{key} has no description");
        }
    }
}
