//! Token chunker: assembles maximal runs of adjacent tokens belonging to
//! one candidate place-name mention.
//!
//! The machine has two states. `Idle` waits for an entity-tagged token;
//! `InRun` holds the open run and decides, token by token, which non-entity
//! tokens may be glued on. Everything else closes the run. Deliberate
//! quirk: a literal `et` is glued on so that reference fragments ("Virtanen
//! et al.") survive to the filter, which recognizes and rejects them there
//! instead of silently truncating them here.

use std::sync::OnceLock;

use regex::Regex;

use super::Chunk;
use crate::token::TaggedToken;
use crate::vocab;

/// Gluing toggles for the chunker. All default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkerConfig {
    /// Glue cardinal/intercardinal direction words ("northern Finland")
    pub cardinal_directions: bool,
    /// Glue the spatial prepositions along/near/at
    pub spatial_prepositions: bool,
    /// Glue geographic feature-type words ("Vantaa river")
    pub feature_types: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            cardinal_directions: true,
            spatial_prepositions: true,
            feature_types: true,
        }
    }
}

/// Chunker state between tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkerState {
    /// No run in progress
    Idle,
    /// Collecting tokens into an open run
    InRun(Vec<TaggedToken>),
}

/// One transition of the chunking machine.
///
/// Consumes the current state and one token (with the previous sentence
/// token for retroactive gluing at run start) and returns the next state
/// plus a chunk if this token closed a non-empty run. Exposed so each
/// transition rule is unit-testable in isolation.
pub fn step(
    state: ChunkerState,
    token: &TaggedToken,
    previous: Option<&TaggedToken>,
    config: &ChunkerConfig,
) -> (ChunkerState, Option<Chunk>) {
    match state {
        ChunkerState::InRun(mut run) => {
            if token.tag.is_entity() || glues_onto_run(token, config) {
                run.push(token.clone());
                (ChunkerState::InRun(run), None)
            } else {
                // Close of run. The closing token is not consumed, so it
                // remains available as "previous" for the next run start.
                let chunk = if run.is_empty() {
                    None
                } else {
                    Some(Chunk::new(run))
                };
                (ChunkerState::Idle, chunk)
            }
        }
        ChunkerState::Idle => {
            if token.tag.is_entity() {
                let mut run = Vec::new();
                // Retroactively pull in an opening parenthesis or (when
                // enabled) a cardinal direction just before the entity.
                // "previous" is never a token already consumed by an
                // earlier run: consumed tokens either extended that run or
                // closed it unconsumed.
                if let Some(prev) = previous {
                    if prev.word == "(" {
                        run.push(prev.clone());
                    }
                    if config.cardinal_directions
                        && vocab::is_cardinal_direction(&prev.word_lower())
                    {
                        run.push(prev.clone());
                    }
                }
                run.push(token.clone());
                (ChunkerState::InRun(run), None)
            } else {
                (ChunkerState::Idle, None)
            }
        }
    }
}

/// Non-entity glue rules for an open run, in priority order.
fn glues_onto_run(token: &TaggedToken, config: &ChunkerConfig) -> bool {
    let word = token.word.as_str();
    // Commas, parentheses, possessive markers
    if matches!(word.chars().next(), Some(',' | '(' | ')')) || word.starts_with("'s") {
        return true;
    }
    // Two-letter all-caps abbreviations, usually US states
    if state_abbreviation().is_match(word) {
        return true;
    }
    let lower = token.word_lower();
    // Prepositions that occur inside placenames
    if vocab::is_run_preposition(&lower) {
        return true;
    }
    if config.cardinal_directions && vocab::is_cardinal_direction(&lower) {
        return true;
    }
    if config.spatial_prepositions && vocab::is_spatial_preposition(&lower) {
        return true;
    }
    if config.feature_types && vocab::is_feature_type(&lower) {
        return true;
    }
    // Reference fragments stay intact for the filter to reject
    word == "et"
}

fn state_abbreviation() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(vocab::STATE_ABBREVIATION_PATTERN).expect("abbreviation pattern compiles")
    })
}

/// Extracts candidate chunks from tagged sentences.
#[derive(Debug, Clone, Default)]
pub struct ChunkExtractor {
    config: ChunkerConfig,
}

impl ChunkExtractor {
    /// Create an extractor with explicit gluing toggles.
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// The extractor's gluing toggles.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Extract all chunks from one tagged sentence, in sentence order.
    ///
    /// Each token is consumed by at most one run, so chunk token positions
    /// form a strictly increasing subsequence of the sentence.
    pub fn extract(&self, sentence: &[TaggedToken]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut state = ChunkerState::Idle;
        let mut previous: Option<&TaggedToken> = None;

        for token in sentence {
            let (next, emitted) = step(state, token, previous, &self.config);
            if let Some(chunk) = emitted {
                chunks.push(chunk);
            }
            state = next;
            previous = Some(token);
        }

        // A run still open after the last token (titles, sentence-final
        // placenames) is emitted as-is.
        if let ChunkerState::InRun(run) = state {
            if !run.is_empty() {
                chunks.push(Chunk::new(run));
            }
        }
        chunks
    }
}
