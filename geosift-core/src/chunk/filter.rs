//! Heuristic filter for candidate chunks.
//!
//! The extractor is deliberately greedy, so this filter carries the
//! judgment: citation fragments, author initials, and company identifiers
//! are discarded; institutional vocabulary force-keeps a chunk; the rest
//! must contain a location tag and survive parenthetical disambiguation.
//! The cascade is encoded as an ordered table of named rules evaluated
//! first-match-wins, one pass per chunk, so the priority order stays
//! auditable and each rule is testable on its own.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::Chunk;
use crate::token::{EntityTag, TaggedToken};
use crate::vocab;

/// Sentences at or below this many tokens are too short to score.
const MIN_SENTENCE_TOKENS: usize = 4;

/// Caller extensions to the built-in keep/discard vocabularies.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Additional force-keep words (compared lower-cased)
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_keep_words: Vec<String>,
    /// Additional force-discard words (compared lower-cased)
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_discard_words: Vec<String>,
}

/// Filters extractor output down to plausible place-name candidates.
#[derive(Debug, Clone)]
pub struct ChunkFilter {
    keep_words: HashSet<String>,
    discard_words: HashSet<String>,
}

impl Default for ChunkFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

impl ChunkFilter {
    /// Build a filter from the default vocabularies plus caller extensions.
    pub fn new(config: &FilterConfig) -> Self {
        let mut keep_words: HashSet<String> =
            vocab::KEEP_WORDS.iter().map(|w| w.to_string()).collect();
        keep_words.extend(config.extra_keep_words.iter().map(|w| w.to_lowercase()));

        let mut discard_words: HashSet<String> =
            vocab::DISCARD_WORDS.iter().map(|w| w.to_string()).collect();
        discard_words.extend(config.extra_discard_words.iter().map(|w| w.to_lowercase()));

        Self {
            keep_words,
            discard_words,
        }
    }

    /// Return the chunks judged to be genuine place-name candidates.
    ///
    /// A true subset operation: output preserves the relative order of the
    /// input list, each survivor is a copy, and nothing is ever added.
    pub fn filter(&self, sentence: &[TaggedToken], chunks: &[Chunk]) -> Vec<Chunk> {
        if sentence.len() < MIN_SENTENCE_TOKENS {
            log::debug!("sentence too short, discarding all chunks");
            return Vec::new();
        }
        chunks
            .iter()
            .filter(|chunk| self.keeps(sentence, chunk))
            .cloned()
            .collect()
    }

    fn keeps(&self, sentence: &[TaggedToken], chunk: &Chunk) -> bool {
        for rule in RULES {
            if let Some(verdict) = (rule.applies)(self, sentence, chunk) {
                log::debug!("rule {}: {:?} \"{}\"", rule.name, verdict, chunk.text());
                return verdict == Verdict::Keep;
            }
        }
        // The tail rule always yields a verdict; this is defensive only
        // for an empty rule table.
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Keep,
    Discard,
}

/// A named first-match-wins rule. `None` defers to the next rule.
struct Rule {
    name: &'static str,
    applies: fn(&ChunkFilter, &[TaggedToken], &Chunk) -> Option<Verdict>,
}

const RULES: &[Rule] = &[
    Rule {
        name: "reference-fragment",
        applies: reference_fragment,
    },
    Rule {
        name: "author-initials",
        applies: author_initials,
    },
    Rule {
        name: "discard-word",
        applies: discard_word,
    },
    Rule {
        name: "keep-word",
        applies: keep_word,
    },
    Rule {
        name: "location-required",
        applies: location_required,
    },
    Rule {
        name: "parenthetical",
        applies: parenthetical,
    },
    Rule {
        name: "helsinki-declaration",
        applies: helsinki_declaration,
    },
    Rule {
        name: "location-default",
        applies: location_default,
    },
];

/// Chunks ending in "et" are citation fragments the extractor kept on
/// purpose ("Virtanen et al.").
fn reference_fragment(_: &ChunkFilter, _: &[TaggedToken], chunk: &Chunk) -> Option<Verdict> {
    (chunk.last().word == "et").then_some(Verdict::Discard)
}

/// A first word like "J.K." is an author-initial false positive.
fn author_initials(_: &ChunkFilter, _: &[TaggedToken], chunk: &Chunk) -> Option<Verdict> {
    initials_pattern()
        .is_match(&chunk.first().word)
        .then_some(Verdict::Discard)
}

fn discard_word(filter: &ChunkFilter, _: &[TaggedToken], chunk: &Chunk) -> Option<Verdict> {
    chunk
        .tokens()
        .iter()
        .any(|t| filter.discard_words.contains(&t.word_lower()))
        .then_some(Verdict::Discard)
}

/// Institutional vocabulary strongly implies a real place reference.
fn keep_word(filter: &ChunkFilter, _: &[TaggedToken], chunk: &Chunk) -> Option<Verdict> {
    chunk
        .tokens()
        .iter()
        .any(|t| filter.keep_words.contains(&t.word_lower()))
        .then_some(Verdict::Keep)
}

fn location_required(_: &ChunkFilter, _: &[TaggedToken], chunk: &Chunk) -> Option<Verdict> {
    (!chunk.contains_tag(EntityTag::Location)).then_some(Verdict::Discard)
}

/// Parenthetical disambiguation for location-bearing chunks.
fn parenthetical(_: &ChunkFilter, _: &[TaggedToken], chunk: &Chunk) -> Option<Verdict> {
    if chunk.contains_word(")") {
        if !chunk.contains_word("(") {
            return Some(Verdict::Discard);
        }
        if chunk.contains_tag(EntityTag::Organization) {
            // An organization name in a parenthesized chunk is usually a
            // company address. Membership test only: whether the
            // organization token actually sits between the parentheses is
            // not verified.
            return Some(Verdict::Discard);
        }
        return Some(Verdict::Keep);
    }
    if let Some(open) = chunk.position_of_word("(") {
        // Opening parenthesis never closed: keep only a location named
        // before the aside, not inside it.
        let location = chunk.position_of_tag(EntityTag::Location);
        return match location {
            Some(pos) if pos < open => Some(Verdict::Keep),
            _ => Some(Verdict::Discard),
        };
    }
    None
}

/// "Declaration of Helsinki" is ethics boilerplate, not a place. The
/// context window comes from the original sentence, not the chunk.
fn helsinki_declaration(
    _: &ChunkFilter,
    sentence: &[TaggedToken],
    chunk: &Chunk,
) -> Option<Verdict> {
    if !chunk.contains_word("helsinki") {
        return None;
    }
    let occurrence = sentence
        .iter()
        .position(|t| t.word.eq_ignore_ascii_case("helsinki"));
    let Some(i) = occurrence else {
        // Tagger and sentence disagree; fall back to keeping the mention
        return Some(Verdict::Keep);
    };
    let window = &sentence[i.saturating_sub(2)..(i + 2).min(sentence.len())];
    let boilerplate = window
        .iter()
        .any(|t| t.word_lower() == "declaration");
    Some(if boilerplate {
        Verdict::Discard
    } else {
        Verdict::Keep
    })
}

fn location_default(_: &ChunkFilter, _: &[TaggedToken], _: &Chunk) -> Option<Verdict> {
    Some(Verdict::Keep)
}

fn initials_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(vocab::INITIALS_PATTERN).expect("initials pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::extractor::ChunkExtractor;
    use crate::token::EntityTag::{Location, Organization, Other, Person};

    fn sentence(tokens: &[(&str, EntityTag)]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|(w, t)| TaggedToken::new(*w, *t))
            .collect()
    }

    fn chunk(tokens: &[(&str, EntityTag)]) -> Chunk {
        Chunk::new(sentence(tokens))
    }

    /// A sentence long enough to pass the length precondition.
    fn padded_sentence(tokens: &[(&str, EntityTag)]) -> Vec<TaggedToken> {
        let mut s = sentence(tokens);
        while s.len() < MIN_SENTENCE_TOKENS {
            s.push(TaggedToken::new(".", Other));
        }
        s
    }

    #[test]
    fn test_short_sentence_filters_to_nothing() {
        let s = sentence(&[("Paris", Location), (".", Other)]);
        let chunks = vec![chunk(&[("Paris", Location)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_empty_chunk_list_filters_to_nothing() {
        let s = padded_sentence(&[("a", Other), ("b", Other), ("c", Other), ("d", Other)]);
        assert!(ChunkFilter::default().filter(&s, &[]).is_empty());
    }

    #[test]
    fn test_reference_fragment_discarded() {
        let s = padded_sentence(&[
            ("Virtanen", Person),
            ("et", Other),
            ("al.", Other),
            ("reported", Other),
        ]);
        let chunks = vec![chunk(&[("Virtanen", Person), ("et", Other)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_author_initials_discarded() {
        let s = padded_sentence(&[
            ("J.K.", Organization),
            ("Seattle", Location),
            ("wrote", Other),
            ("this", Other),
        ]);
        let chunks = vec![chunk(&[("J.K.", Organization), ("Seattle", Location)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_company_identifier_discarded() {
        let s = padded_sentence(&[
            ("Qiagen", Organization),
            ("GmbH", Other),
            ("Hilden", Location),
            ("supplied", Other),
            ("kits", Other),
        ]);
        let chunks = vec![chunk(&[
            ("Qiagen", Organization),
            ("GmbH", Other),
            ("Hilden", Location),
        ])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_keep_word_overrides_missing_location() {
        let s = padded_sentence(&[
            ("the", Other),
            ("University", Organization),
            ("of", Other),
            ("Oulu", Organization),
        ]);
        let chunks = vec![chunk(&[
            ("University", Organization),
            ("of", Other),
            ("Oulu", Organization),
        ])];
        let kept = ChunkFilter::default().filter(&s, &chunks);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_location_required_for_plain_chunks() {
        let s = padded_sentence(&[
            ("Smith", Person),
            ("visited", Other),
            ("again", Other),
            ("today", Other),
        ]);
        let chunks = vec![chunk(&[("Smith", Person)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_bare_location_kept() {
        let s = padded_sentence(&[
            ("Paris", Location),
            ("General", Other),
            ("Hospital", Other),
            (".", Other),
        ]);
        let chunks = vec![chunk(&[("Paris", Location)])];
        let kept = ChunkFilter::default().filter(&s, &chunks);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text(), "Paris");
    }

    #[test]
    fn test_closing_without_opening_parenthesis_discarded() {
        let s = padded_sentence(&[
            ("Turku", Location),
            (")", Other),
            ("and", Other),
            ("onwards", Other),
        ]);
        let chunks = vec![chunk(&[("Turku", Location), (")", Other)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_balanced_parentheses_with_organization_discarded() {
        let s = padded_sentence(&[
            ("(", Other),
            ("Promega", Organization),
            (",", Other),
            ("Madison", Location),
            (")", Other),
        ]);
        let chunks = vec![chunk(&[
            ("(", Other),
            ("Promega", Organization),
            (",", Other),
            ("Madison", Location),
            (")", Other),
        ])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_balanced_parentheses_without_organization_kept() {
        let s = padded_sentence(&[
            ("(", Other),
            ("Madison", Location),
            (",", Other),
            ("WI", Other),
            (")", Other),
        ]);
        let chunks = vec![chunk(&[
            ("(", Other),
            ("Madison", Location),
            (",", Other),
            ("WI", Other),
            (")", Other),
        ])];
        assert_eq!(ChunkFilter::default().filter(&s, &chunks).len(), 1);
    }

    #[test]
    fn test_unclosed_parenthesis_location_before_kept() {
        let s = padded_sentence(&[
            ("Madison", Location),
            ("(", Other),
            ("USA", Location),
            ("and", Other),
        ]);
        let chunks = vec![chunk(&[("Madison", Location), ("(", Other)])];
        assert_eq!(ChunkFilter::default().filter(&s, &chunks).len(), 1);
    }

    #[test]
    fn test_unclosed_parenthesis_location_after_discarded() {
        let s = padded_sentence(&[
            ("see", Other),
            ("(", Other),
            ("Madison", Location),
            ("for", Other),
        ]);
        let chunks = vec![chunk(&[("(", Other), ("Madison", Location)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_helsinki_declaration_discarded() {
        let s = padded_sentence(&[
            ("the", Other),
            ("Declaration", Other),
            ("of", Other),
            ("Helsinki", Location),
            ("was", Other),
            ("followed", Other),
        ]);
        let chunks = vec![chunk(&[("Helsinki", Location)])];
        assert!(ChunkFilter::default().filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_helsinki_as_place_kept() {
        let s = padded_sentence(&[
            ("a", Other),
            ("clinic", Other),
            ("in", Other),
            ("Helsinki", Location),
            ("enrolled", Other),
            ("patients", Other),
        ]);
        let chunks = vec![chunk(&[("Helsinki", Location)])];
        assert_eq!(ChunkFilter::default().filter(&s, &chunks).len(), 1);
    }

    #[test]
    fn test_helsinki_at_sentence_start_does_not_panic() {
        let s = padded_sentence(&[
            ("Helsinki", Location),
            ("was", Other),
            ("the", Other),
            ("site", Other),
        ]);
        let chunks = vec![chunk(&[("Helsinki", Location)])];
        assert_eq!(ChunkFilter::default().filter(&s, &chunks).len(), 1);
    }

    #[test]
    fn test_extra_discard_words_respected() {
        let filter = ChunkFilter::new(&FilterConfig {
            extra_discard_words: vec!["Ltd".into()],
            ..FilterConfig::default()
        });
        let s = padded_sentence(&[
            ("Oxoid", Organization),
            ("Ltd", Other),
            ("Basingstoke", Location),
            ("supplied", Other),
        ]);
        let chunks = vec![chunk(&[
            ("Oxoid", Organization),
            ("Ltd", Other),
            ("Basingstoke", Location),
        ])];
        assert!(filter.filter(&s, &chunks).is_empty());
    }

    #[test]
    fn test_extra_keep_words_respected() {
        let filter = ChunkFilter::new(&FilterConfig {
            extra_keep_words: vec!["museum".into()],
            ..FilterConfig::default()
        });
        let s = padded_sentence(&[
            ("the", Other),
            ("Natural", Organization),
            ("History", Organization),
            ("Museum", Organization),
        ]);
        let chunks = vec![chunk(&[
            ("Natural", Organization),
            ("History", Organization),
            ("Museum", Organization),
        ])];
        assert_eq!(filter.filter(&s, &chunks).len(), 1);
    }

    #[test]
    fn test_output_is_ordered_subset() {
        let s = padded_sentence(&[
            ("Turku", Location),
            ("and", Other),
            ("Smith", Person),
            ("and", Other),
            ("Oulu", Location),
            (".", Other),
        ]);
        let chunks = vec![
            chunk(&[("Turku", Location)]),
            chunk(&[("Smith", Person)]),
            chunk(&[("Oulu", Location)]),
        ];
        let kept = ChunkFilter::default().filter(&s, &chunks);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].text(), "Turku");
        assert_eq!(kept[1].text(), "Oulu");
    }

    #[test]
    fn test_filter_composes_with_extractor() {
        let s = sentence(&[
            ("Samples", Other),
            ("came", Other),
            ("from", Other),
            ("northern", Other),
            ("Finland", Location),
            ("and", Other),
            ("Virtanen", Person),
            ("et", Other),
            ("al.", Other),
        ]);
        let chunks = ChunkExtractor::default().extract(&s);
        assert_eq!(chunks.len(), 2);

        let kept = ChunkFilter::default().filter(&s, &chunks);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text(), "northern Finland");
    }
}
