//! Candidate place-name chunks: assembly and filtering.

pub mod extractor;
pub mod filter;

pub use extractor::{ChunkExtractor, ChunkerConfig, ChunkerState};
pub use filter::{ChunkFilter, FilterConfig};

use crate::token::{EntityTag, TaggedToken};
use std::fmt;

/// A contiguous candidate place-name span assembled from one sentence.
///
/// Invariants: non-empty, contains at least one entity-tagged token (the
/// token that triggered the run), and never spans sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chunk {
    tokens: Vec<TaggedToken>,
}

impl Chunk {
    /// Build a chunk from the tokens of a completed run.
    pub(crate) fn new(tokens: Vec<TaggedToken>) -> Self {
        debug_assert!(!tokens.is_empty(), "a chunk is never empty");
        Self { tokens }
    }

    /// The chunk's tokens in sentence order.
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for extractor output; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token of the chunk.
    pub fn first(&self) -> &TaggedToken {
        &self.tokens[0]
    }

    /// Last token of the chunk.
    pub fn last(&self) -> &TaggedToken {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Whether any token carries the given tag.
    pub fn contains_tag(&self, tag: EntityTag) -> bool {
        self.tokens.iter().any(|t| t.tag == tag)
    }

    /// Position of the first token with the given tag.
    pub fn position_of_tag(&self, tag: EntityTag) -> Option<usize> {
        self.tokens.iter().position(|t| t.tag == tag)
    }

    /// Whether any token's lower-cased word equals `word_lower`.
    pub fn contains_word(&self, word_lower: &str) -> bool {
        self.tokens
            .iter()
            .any(|t| t.word_lower() == word_lower)
    }

    /// Position of the first token whose lower-cased word equals
    /// `word_lower`.
    pub fn position_of_word(&self, word_lower: &str) -> Option<usize> {
        self.tokens
            .iter()
            .position(|t| t.word_lower() == word_lower)
    }

    /// Human-readable span text: words joined with spaces, with the one
    /// spacing artifact this introduces ("( " after an opening parenthesis)
    /// tidied up. Full detokenization is the query-builder collaborator's
    /// job.
    pub fn text(&self) -> String {
        let joined = self
            .tokens
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        joined.replace("( ", "(")
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
