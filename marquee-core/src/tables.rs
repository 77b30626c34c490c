//! Static keyword lookup tables.
//!
//! Declaration order is load-bearing. The entity extractor walks these
//! slices front to back; for languages every hit overwrites the
//! previous one, so when two language keywords appear in a message the
//! key declared last here wins. That overwrite behavior is kept for
//! compatibility with the existing widget, not chosen as policy.

/// Movie genre keywords mapped to catalog genre ids.
pub const MOVIE_GENRES: &[(&str, u32)] = &[
    ("action", 28),
    ("adventure", 12),
    ("animation", 16),
    ("anime", 16),
    ("comedy", 35),
    ("crime", 80),
    ("documentary", 99),
    ("drama", 18),
    ("family", 10751),
    ("fantasy", 14),
    ("history", 36),
    ("horror", 27),
    ("music", 10402),
    ("mystery", 9648),
    ("romance", 10749),
    ("romantic", 10749),
    ("science fiction", 878),
    ("sci-fi", 878),
    ("scifi", 878),
    ("thriller", 53),
    ("war", 10752),
    ("western", 37),
];

/// TV genre keywords mapped to catalog genre ids.
///
/// Several keys shared with the movie table ("scifi", "war", "action")
/// map to different ids here; the two catalogs use distinct taxonomies.
pub const TV_GENRES: &[(&str, u32)] = &[
    ("action", 10759),
    ("adventure", 10759),
    ("animation", 16),
    ("anime", 16),
    ("comedy", 35),
    ("crime", 80),
    ("documentary", 99),
    ("drama", 18),
    ("family", 10751),
    ("fantasy", 10765),
    ("kids", 10762),
    ("mystery", 9648),
    ("news", 10763),
    ("reality", 10764),
    ("science fiction", 10765),
    ("sci-fi", 10765),
    ("scifi", 10765),
    ("soap", 10766),
    ("talk", 10767),
    ("war", 10768),
    ("politics", 10768),
    ("western", 37),
];

/// Language keywords mapped to two-letter original-language codes.
///
/// Iterated in declaration order; the last key found in the text wins.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("english", "en"),
    ("hindi", "hi"),
    ("telugu", "te"),
    ("tamil", "ta"),
    ("malayalam", "ml"),
    ("kannada", "kn"),
    ("bengali", "bn"),
    ("marathi", "mr"),
    ("punjabi", "pa"),
    ("korean", "ko"),
    ("japanese", "ja"),
    ("chinese", "zh"),
    ("mandarin", "zh"),
    ("french", "fr"),
    ("spanish", "es"),
    ("german", "de"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("russian", "ru"),
    ("turkish", "tr"),
];

/// Filler words stripped from similarity captures and from the
/// residual text used by the keyword fallback. Plural forms come first
/// so stripping the singular never leaves a dangling "s".
pub const MEDIA_WORDS: &[&str] = &[
    "movies", "movie", "shows", "show", "series", "films", "film",
];

/// Keywords that classify a message as targeting the TV catalog.
pub const TV_WORDS: &[&str] = &["tv", "series", "show"];

/// Keywords signalling a trending request.
pub const TRENDING_WORDS: &[&str] = &["trending", "popular", "hot"];

/// Keywords signalling a top-rated request. Checked after the trending
/// keywords, so a message containing both resolves to top-rated.
pub const TOP_RATED_WORDS: &[&str] = &["top", "best", "rated", "good"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_keys_use_distinct_ids_per_catalog() {
        let movie_scifi = MOVIE_GENRES.iter().find(|(k, _)| *k == "scifi").unwrap().1;
        let tv_scifi = TV_GENRES.iter().find(|(k, _)| *k == "scifi").unwrap().1;
        assert_ne!(movie_scifi, tv_scifi);

        let movie_war = MOVIE_GENRES.iter().find(|(k, _)| *k == "war").unwrap().1;
        let tv_war = TV_GENRES.iter().find(|(k, _)| *k == "war").unwrap().1;
        assert_ne!(movie_war, tv_war);
    }

    #[test]
    fn language_keys_are_unique() {
        for (i, (key, _)) in LANGUAGES.iter().enumerate() {
            assert!(
                LANGUAGES.iter().skip(i + 1).all(|(other, _)| other != key),
                "duplicate language key {key}"
            );
        }
    }

    #[test]
    fn media_words_strip_plurals_before_singulars() {
        let movies = MEDIA_WORDS.iter().position(|w| *w == "movies").unwrap();
        let movie = MEDIA_WORDS.iter().position(|w| *w == "movie").unwrap();
        assert!(movies < movie);
    }
}
