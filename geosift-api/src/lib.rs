//! Public API for Geosift place-name candidate extraction
//!
//! This crate provides a clean, stable interface over the core locator,
//! chunker, and filter, hiding their construction details.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::Instant;

use error::Result;
use geosift_core::{
    normalize, ChunkExtractor, ChunkFilter, HeadingRules, MethodsTextLocator, SectionLocator,
};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Candidate, Input, Metadata, MethodsReport};
pub use error::ApiError;
// Core types callers hand to us or get back
pub use geosift_core::{
    Chunk, ChunkerConfig, Document, EntityTag, FilterConfig, InlineRef, Paragraph, Section,
    SectionMatch, SectionNode, TaggedToken,
};

/// Main entry point for place-candidate extraction
///
/// Wraps the section locators, the chunk extractor, and the chunk filter
/// behind one configured façade. All methods are pure over their inputs;
/// an extractor can be shared freely across threads.
pub struct PlaceExtractor {
    text_locator: MethodsTextLocator,
    section_locator: SectionLocator,
    chunker: ChunkExtractor,
    filter: ChunkFilter,
    config: Config,
}

impl PlaceExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an extractor with a custom configuration
    ///
    /// Custom vocabulary patterns are compiled here; invalid patterns fail
    /// fast instead of surfacing mid-extraction.
    pub fn with_config(config: Config) -> Result<Self> {
        let text_rules = match &config.text_pattern {
            Some(pattern) => HeadingRules::new(pattern, config.max_heading_words)?,
            None => HeadingRules::new(
                geosift_core::vocab::METHODS_TEXT_PATTERN,
                config.max_heading_words,
            )?,
        };
        let structured_rules = match &config.heading_pattern {
            Some(pattern) => HeadingRules::new(pattern, config.max_heading_words)?,
            None => HeadingRules::new(
                geosift_core::vocab::METHODS_HEADING_PATTERN,
                config.max_heading_words,
            )?,
        };

        Ok(Self {
            text_locator: MethodsTextLocator::new(text_rules, config.par_range),
            section_locator: SectionLocator::new(structured_rules, config.structured_par_range),
            chunker: ChunkExtractor::new(config.chunker),
            filter: ChunkFilter::new(&config.filter),
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locate methods/materials sections in raw article text
    pub fn locate_methods(&self, input: Input) -> Result<MethodsReport> {
        let start = Instant::now();
        let text = input.read_text()?;
        let text = if self.config.repair_artifacts {
            normalize::repair_extraction_artifacts(&text).into_owned()
        } else {
            text
        };

        let total_bytes = text.len();
        let located = self.text_locator.locate(&text);

        Ok(MethodsReport {
            metadata: Metadata {
                total_bytes,
                headings_found: located.headings.len(),
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
            headings: located.headings,
            text: located.text,
        })
    }

    /// Detect methods-like headings in raw text without collecting
    /// paragraphs (diagnostic variant)
    pub fn detect_headings(&self, input: Input) -> Result<Vec<String>> {
        let text = input.read_text()?;
        let text = if self.config.repair_artifacts {
            normalize::repair_extraction_artifacts(&text).into_owned()
        } else {
            text
        };
        Ok(self.text_locator.detect_headings(&text))
    }

    /// Locate methods-like sections in a structured document
    pub fn locate_methods_structured(&self, document: &Document) -> Vec<SectionMatch> {
        self.section_locator.locate(document)
    }

    /// Detect methods-like titles in a structured document (diagnostic
    /// variant)
    pub fn detect_structured_headings(&self, document: &Document) -> Vec<String> {
        self.section_locator.detect_headings(document)
    }

    /// Assemble raw candidate chunks from one tagged sentence, unfiltered
    pub fn chunk_sentence(&self, sentence: &[TaggedToken]) -> Vec<Chunk> {
        self.chunker.extract(sentence)
    }

    /// Extract surviving place-name candidates from one tagged sentence
    pub fn extract_candidates(&self, sentence: &[TaggedToken]) -> Vec<Candidate> {
        let chunks = self.chunker.extract(sentence);
        self.filter
            .filter(sentence, &chunks)
            .iter()
            .map(Candidate::from)
            .collect()
    }
}

// Convenience functions

/// Locate methods sections in raw text with the default configuration
pub fn locate_methods(text: &str) -> Result<MethodsReport> {
    let extractor = PlaceExtractor::new()?;
    extractor.locate_methods(Input::from_text(text))
}

/// Extract place-name candidates from one tagged sentence with the default
/// configuration
pub fn extract_candidates(sentence: &[TaggedToken]) -> Result<Vec<Candidate>> {
    let extractor = PlaceExtractor::new()?;
    Ok(extractor.extract_candidates(sentence))
}
