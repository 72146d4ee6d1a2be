//! High-level configuration API

use crate::error::{ApiError, Result};
use geosift_core::section::heading::DEFAULT_MAX_HEADING_WORDS;
use geosift_core::{section, ChunkerConfig, FilterConfig};

/// High-level configuration for place-candidate extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Look-ahead window after a raw-text heading, in paragraphs
    pub par_range: usize,
    /// Paragraph limit per matching structured-document section
    pub structured_par_range: usize,
    /// Upper bound (inclusive) on heading length in words; must be ≥ 1
    pub max_heading_words: usize,
    /// Custom raw-text vocabulary pattern (default biomedical vocabulary)
    pub text_pattern: Option<String>,
    /// Custom structured-title vocabulary pattern
    pub heading_pattern: Option<String>,
    /// Repair PDF-extraction diacritic artifacts before locating sections
    pub repair_artifacts: bool,
    /// Chunker gluing toggles
    pub chunker: ChunkerConfig,
    /// Filter vocabulary extensions
    pub filter: FilterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            par_range: section::text::DEFAULT_PAR_RANGE,
            structured_par_range: section::structured::DEFAULT_PAR_RANGE,
            max_heading_words: DEFAULT_MAX_HEADING_WORDS,
            text_pattern: None,
            heading_pattern: None,
            repair_artifacts: true,
            chunker: ChunkerConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder with fail-fast validation
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the raw-text look-ahead window in paragraphs
    pub fn par_range(mut self, par_range: usize) -> Self {
        self.config.par_range = par_range;
        self
    }

    /// Set the structured-document paragraph limit
    pub fn structured_par_range(mut self, par_range: usize) -> Self {
        self.config.structured_par_range = par_range;
        self
    }

    /// Set the heading word budget
    pub fn max_heading_words(mut self, words: usize) -> Self {
        self.config.max_heading_words = words;
        self
    }

    /// Override the raw-text vocabulary pattern
    pub fn text_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.text_pattern = Some(pattern.into());
        self
    }

    /// Override the structured-title vocabulary pattern
    pub fn heading_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.heading_pattern = Some(pattern.into());
        self
    }

    /// Toggle extraction-artifact repair
    pub fn repair_artifacts(mut self, repair: bool) -> Self {
        self.config.repair_artifacts = repair;
        self
    }

    /// Set chunker gluing toggles
    pub fn chunker(mut self, chunker: ChunkerConfig) -> Self {
        self.config.chunker = chunker;
        self
    }

    /// Extend the filter keep/discard vocabularies
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.config.filter = filter;
        self
    }

    /// Build the configuration
    ///
    /// Validation happens here rather than on first use: malformed
    /// configuration is caller misuse and fails fast.
    pub fn build(self) -> Result<Config> {
        if self.config.max_heading_words == 0 {
            return Err(ApiError::Config(
                "max_heading_words must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}
