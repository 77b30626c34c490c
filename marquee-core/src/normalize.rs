//! Text normalization helpers.

use crate::tables;

/// Produce a comparison key for a title: lower-case, ASCII
/// alphanumerics and spaces only, runs of whitespace collapsed, trimmed.
///
/// Applied both to user-extracted candidate titles and to
/// catalog-returned titles so the two can be compared for equality.
/// Empty input yields an empty string, which every caller treats as
/// "no match".
pub fn normalize_title(input: &str) -> String {
    let lowered = input.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-case the text and strip media filler words plus the "tv"
/// marker, leaving the residue that drives the keyword fallback.
///
/// Removal is literal substring replacement, matching how the widget
/// has always behaved.
pub fn strip_media_words(text: &str) -> String {
    let mut out = text.to_lowercase();
    for word in tables::MEDIA_WORDS {
        out = out.replace(word, " ");
    }
    out = out.replace("tv", " ");

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip any trailing media filler words from a similarity capture
/// ("inception movie" becomes "inception").
pub fn strip_trailing_media_words(capture: &str) -> String {
    let mut out = capture.trim().to_string();
    loop {
        let before = out.len();
        for word in tables::MEDIA_WORDS {
            if let Some(stripped) = out.strip_suffix(word) {
                out = stripped.trim_end().to_string();
            }
        }
        if out.len() == before {
            break;
        }
    }
    out
}
