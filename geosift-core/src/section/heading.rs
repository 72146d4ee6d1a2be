//! Heading recognition rules.

use crate::error::{CoreError, Result};
use crate::vocab;
use regex::Regex;

/// Upper bound (inclusive) on heading length, in words.
pub const DEFAULT_MAX_HEADING_WORDS: usize = 8;

/// Compiled heading-recognition rules.
///
/// A raw-text candidate is accepted as a heading only when it opens with an
/// optional numeral/period prefix followed by a capital letter, stays within
/// the word budget, and its lower-cased text matches the vocabulary pattern.
/// Structured-document titles skip the first two gates: the markup already
/// establishes them as headings.
#[derive(Debug, Clone)]
pub struct HeadingRules {
    initial_capital: Regex,
    vocabulary: Regex,
    max_heading_words: usize,
}

impl HeadingRules {
    /// Compile rules from a vocabulary pattern and a word budget.
    ///
    /// Fails fast on a zero word budget or an invalid pattern: both indicate
    /// caller misuse rather than noisy input.
    pub fn new(vocabulary_pattern: &str, max_heading_words: usize) -> Result<Self> {
        if max_heading_words == 0 {
            return Err(CoreError::InvalidConfig(
                "max_heading_words must be at least 1".into(),
            ));
        }
        Ok(Self {
            initial_capital: Regex::new(vocab::INITIAL_CAPITAL_PATTERN)?,
            vocabulary: Regex::new(vocabulary_pattern)?,
            max_heading_words,
        })
    }

    /// Default rules for raw article text.
    pub fn for_text() -> Self {
        Self::new(vocab::METHODS_TEXT_PATTERN, DEFAULT_MAX_HEADING_WORDS)
            .expect("default text pattern compiles")
    }

    /// Default rules for structured-document titles.
    pub fn for_structured() -> Self {
        Self::new(vocab::METHODS_HEADING_PATTERN, DEFAULT_MAX_HEADING_WORDS)
            .expect("default heading pattern compiles")
    }

    /// Whether a paragraph's first line reads like a methods heading.
    pub fn is_heading(&self, candidate: &str) -> bool {
        self.initial_capital.is_match(candidate)
            && candidate.split(' ').count() <= self.max_heading_words
            && self.vocabulary.is_match(&candidate.to_lowercase())
    }

    /// Whether a structured-document title matches the vocabulary.
    pub fn matches_title(&self, title: &str) -> bool {
        self.vocabulary.is_match(&title.to_lowercase())
    }
}
