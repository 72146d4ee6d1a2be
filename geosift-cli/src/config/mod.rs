//! Configuration module
//!
//! Optional TOML configuration file merged beneath command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Section-location configuration
    #[serde(default)]
    pub section: SectionSettings,

    /// Chunker configuration
    #[serde(default)]
    pub chunker: ChunkerSettings,

    /// Filter configuration
    #[serde(default)]
    pub filter: FilterSettings,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSettings,
}

/// Section-location settings
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SectionSettings {
    /// Look-ahead window after a raw-text heading, in paragraphs
    pub par_range: usize,

    /// Paragraph limit per matching structured-document section
    pub structured_par_range: usize,

    /// Upper bound (inclusive) on heading length in words
    pub max_heading_words: usize,

    /// Custom raw-text vocabulary pattern
    pub text_pattern: Option<String>,

    /// Custom structured-title vocabulary pattern
    pub heading_pattern: Option<String>,

    /// Repair PDF-extraction diacritic artifacts before locating
    pub repair_artifacts: bool,
}

impl Default for SectionSettings {
    fn default() -> Self {
        Self {
            par_range: 4,
            structured_par_range: 3,
            max_heading_words: 8,
            text_pattern: None,
            heading_pattern: None,
            repair_artifacts: true,
        }
    }
}

/// Chunker settings
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ChunkerSettings {
    /// Glue cardinal direction words
    pub cardinal_directions: bool,

    /// Glue the spatial prepositions along/near/at
    pub spatial_prepositions: bool,

    /// Glue geographic feature-type words
    pub feature_types: bool,
}

impl Default for ChunkerSettings {
    fn default() -> Self {
        Self {
            cardinal_directions: true,
            spatial_prepositions: true,
            feature_types: true,
        }
    }
}

/// Filter vocabulary extensions
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FilterSettings {
    /// Additional force-keep words
    #[serde(default)]
    pub extra_keep_words: Vec<String>,

    /// Additional force-discard words
    #[serde(default)]
    pub extra_discard_words: Vec<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Convert to an API configuration.
    pub fn api_config(&self) -> Result<geosift_api::Config> {
        let mut builder = geosift_api::Config::builder()
            .par_range(self.section.par_range)
            .structured_par_range(self.section.structured_par_range)
            .max_heading_words(self.section.max_heading_words)
            .repair_artifacts(self.section.repair_artifacts)
            .chunker(geosift_api::ChunkerConfig {
                cardinal_directions: self.chunker.cardinal_directions,
                spatial_prepositions: self.chunker.spatial_prepositions,
                feature_types: self.chunker.feature_types,
            })
            .filter(geosift_api::FilterConfig {
                extra_keep_words: self.filter.extra_keep_words.clone(),
                extra_discard_words: self.filter.extra_discard_words.clone(),
            });

        if let Some(pattern) = &self.section.text_pattern {
            builder = builder.text_pattern(pattern);
        }
        if let Some(pattern) = &self.section.heading_pattern {
            builder = builder.heading_pattern(pattern);
        }

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))
    }
}
