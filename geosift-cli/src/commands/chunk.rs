//! Chunk command implementation
//!
//! Input is JSON lines: one tagged sentence per line, each sentence an
//! array of `[word, tag]` pairs as produced by the upstream tagger.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use geosift_api::{Candidate, EntityTag, PlaceExtractor, TaggedToken};

use super::{init_logging, make_formatter, OutputFormat};
use crate::config::CliConfig;
use crate::input;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob), JSON lines of tagged
    /// sentences
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Emit raw chunks without filtering
    #[arg(short, long)]
    pub unfiltered: bool,

    /// Do not glue cardinal direction words
    #[arg(long)]
    pub no_cardinal: bool,

    /// Do not glue spatial prepositions
    #[arg(long)]
    pub no_spatial: bool,

    /// Do not glue feature-type words
    #[arg(long)]
    pub no_feature_types: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);
        log::info!("Extracting place-name candidates");

        let mut cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        if self.no_cardinal {
            cli_config.chunker.cardinal_directions = false;
        }
        if self.no_spatial {
            cli_config.chunker.spatial_prepositions = false;
        }
        if self.no_feature_types {
            cli_config.chunker.feature_types = false;
        }

        let extractor = PlaceExtractor::with_config(cli_config.api_config()?)?;
        let files = input::resolve_patterns(&self.input)?;

        let mut formatter = make_formatter(
            self.format,
            self.output.as_deref(),
            cli_config.output.pretty_json,
        )?;

        for path in &files {
            let source = path.display().to_string();
            let text = input::read_text(path)?;

            for (index, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let sentence = parse_sentence(line).with_context(|| {
                    format!("{source}: line {} is not a tagged sentence", index + 1)
                })?;

                let candidates: Vec<Candidate> = if self.unfiltered {
                    extractor
                        .chunk_sentence(&sentence)
                        .iter()
                        .map(Candidate::from)
                        .collect()
                } else {
                    extractor.extract_candidates(&sentence)
                };

                if !candidates.is_empty() {
                    formatter.format_candidates(&source, index, &candidates)?;
                }
            }
        }

        formatter.finish()
    }
}

/// Parse one JSON line of `[word, tag]` pairs. Unknown tag labels degrade
/// to non-entities rather than failing the line.
fn parse_sentence(line: &str) -> Result<Vec<TaggedToken>> {
    let pairs: Vec<(String, String)> = serde_json::from_str(line)?;
    Ok(pairs
        .into_iter()
        .map(|(word, label)| TaggedToken::new(word, EntityTag::from_label(&label)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentence() {
        let line = r#"[["Samples", "O"], ["from", "O"], ["Helsinki", "LOCATION"]]"#;
        let sentence = parse_sentence(line).unwrap();
        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence[2].word, "Helsinki");
        assert_eq!(sentence[2].tag, EntityTag::Location);
    }

    #[test]
    fn test_parse_sentence_unknown_tag() {
        let line = r#"[["Kyoto", "GPE"]]"#;
        let sentence = parse_sentence(line).unwrap();
        assert_eq!(sentence[0].tag, EntityTag::Other);
    }

    #[test]
    fn test_parse_sentence_malformed() {
        assert!(parse_sentence("not json").is_err());
        assert!(parse_sentence(r#"{"word": "Oslo"}"#).is_err());
    }
}
