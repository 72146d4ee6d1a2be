//! Repair of PDF-extraction artifacts in raw article text.
//!
//! PDF-to-text conversion frequently splits accented characters into a base
//! letter plus a combining mark with stray spacing ("Zu¨ rich", "de´ partement")
//! and leaves ligatures unexpanded. These artifacts break both heading
//! detection and downstream tagging, so they are repaired before section
//! location.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Ordered artifact → replacement table.
///
/// Entries with trailing/leading spaces must come before their bare
/// counterparts: the alternation built from this table prefers earlier
/// entries at the same position.
pub const EXTRACTION_ARTIFACTS: &[(&str, &str)] = &[
    ("u¨ ", "ü"),
    ("a¨ ", "ä"),
    ("o¨ ", "ö"),
    ("o ¨", "ö"),
    ("o´ ", "ó"),
    ("aˆ ", "â"),
    ("oˆ ", "ô"),
    ("u¨", "ü"),
    ("a¨", "ä"),
    ("o¨", "ö"),
    ("a´", "á"),
    ("e´", "é"),
    ("o´", "ó"),
    ("aˆ", "â"),
    ("oˆ", "ô"),
    ("i´", "í"),
    ("ı´", "í"),
    ("a`", "à"),
    ("o`", "ò"),
    ("i`", "ì"),
    ("u`", "ù"),
    ("e`", "è"),
    ("ﬂ", "fl"),
    ("a˜", "ã"),
    ("¨ı", "i"),
    ("ó n ", "ón "),
    ("U´ ", "Ú"),
];

static ARTIFACT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn artifact_pattern() -> &'static Regex {
    ARTIFACT_PATTERN.get_or_init(|| {
        let alternation = EXTRACTION_ARTIFACTS
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("escaped artifact table compiles")
    })
}

/// Replace every known extraction artifact in `text`.
///
/// Returns a borrowed `Cow` when the text contains no artifacts, which is
/// the common case for clean input.
pub fn repair_extraction_artifacts(text: &str) -> Cow<'_, str> {
    artifact_pattern().replace_all(text, |caps: &regex::Captures| {
        let found = &caps[0];
        EXTRACTION_ARTIFACTS
            .iter()
            .find(|(from, _)| *from == found)
            .map(|(_, to)| *to)
            .unwrap_or(found)
            .to_string()
    })
}
