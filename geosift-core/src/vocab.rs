//! Vocabulary tables and pattern sources.
//!
//! Every table here is an immutable module-level constant shared by
//! reference. Callers that need additional words extend the compiled rule
//! structs ([`crate::chunk::FilterConfig`], [`crate::section::HeadingRules`])
//! instead of mutating these.

/// Cardinal and intercardinal direction words glued onto chunk runs.
pub const CARDINAL_DIRECTIONS: &[&str] = &[
    "east",
    "west",
    "south",
    "north",
    "eastern",
    "western",
    "southern",
    "northern",
    "central",
    "northeast",
    "northwest",
    "southeast",
    "southwest",
    "northeastern",
    "northwestern",
    "southeastern",
    "southwestern",
];

/// Spatial prepositions that often sit inside a multi-word place reference.
pub const SPATIAL_PREPOSITIONS: &[&str] = &["along", "near", "at"];

/// Geographic feature-type words ("X county", "Y river").
pub const FEATURE_TYPES: &[&str] = &[
    "region", "regions", "county", "counties", "park", "parks", "coast", "coasts", "town", "city",
    "state", "states", "river", "rivers",
];

/// Short prepositions kept inside an open run regardless of toggles
/// ("Isle of Wight", "Stratford upon Avon").
pub const RUN_PREPOSITIONS: &[&str] = &["in", "the", "upon", "of"];

/// Institutional vocabulary that force-keeps a chunk: these words strongly
/// imply a real, geocodable place reference. Localized spellings included
/// because affiliations are frequently non-English.
pub const KEEP_WORDS: &[&str] = &[
    "hospital",
    "hospitals",
    "hopital",
    "hôpital",
    "clinic",
    "clinics",
    "clinique",
    "university",
    "universities",
    "universite",
    "universität",
    "centre",
    "centres",
    "centro",
    "center",
    "centers",
    "college",
    "colleges",
    "department",
    "departments",
    "departamento",
    "departement",
    "institution",
    "institutions",
    "institute",
    "institutes",
    "institut",
    "instituto",
];

/// Company-identifying suffixes that force-discard a chunk.
pub const DISCARD_WORDS: &[&str] = &["gmbh", "inc", "inc."];

/// Heading candidates must open with an optional numeral/period prefix
/// followed by a capital letter.
pub const INITIAL_CAPITAL_PATTERN: &str = r"^[0-9.]*[ \t]{0,2}[A-Z]";

/// Default methods vocabulary for raw article text, matched against the
/// lower-cased first line of a paragraph. Tuned to biomedical and
/// ecological corpora.
pub const METHODS_TEXT_PATTERN: &str = r"^[0-9.]*[ \t]{0,2}(the )?(material|method|(experimental procedure)|sample|tumor|tumour|patient|specimen|subject|population|human)";

/// Default methods vocabulary for structured-document section titles.
///
/// Broader than [`METHODS_TEXT_PATTERN`]: titles carry document structure
/// already, so this also recognizes study-area/location headings and short
/// compound headings ("Apple orchards", "Breast tumor samples"). Kept as a
/// separate constant rather than unified with the raw-text pattern.
pub const METHODS_HEADING_PATTERN: &str = r"^[0-9.]*[ \t]{0,2}(the )?(material|method|(experimental procedure)|location|region|study[ \t]{0,2}(area|site|region)|(\w+[ \t]{0,2}){0,2}(orchard|location|tumor|tumour|patient|sample|specimen|subject|population|human))";

/// Author-initials pattern ("J.K.", "A.B.C."), full-match on a chunk's
/// first word.
pub const INITIALS_PATTERN: &str = r"^[A-Z][.]([A-Z][.]?){1,2}$";

/// Two-letter all-caps abbreviation at the start of a word, usually a US
/// state ("Seattle , WA").
pub const STATE_ABBREVIATION_PATTERN: &str = r"^[A-Z][A-Z]\b";

/// Whether a lower-cased word is a cardinal/intercardinal direction.
pub fn is_cardinal_direction(word_lower: &str) -> bool {
    CARDINAL_DIRECTIONS.contains(&word_lower)
}

/// Whether a lower-cased word is a spatial preposition.
pub fn is_spatial_preposition(word_lower: &str) -> bool {
    SPATIAL_PREPOSITIONS.contains(&word_lower)
}

/// Whether a lower-cased word is a geographic feature type.
pub fn is_feature_type(word_lower: &str) -> bool {
    FEATURE_TYPES.contains(&word_lower)
}

/// Whether a lower-cased word is a run-internal preposition.
pub fn is_run_preposition(word_lower: &str) -> bool {
    RUN_PREPOSITIONS.contains(&word_lower)
}
