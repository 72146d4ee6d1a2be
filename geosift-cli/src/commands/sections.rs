//! Sections command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use geosift_api::{Document, Input, PlaceExtractor};

use super::{init_logging, make_formatter, OutputFormat};
use crate::config::CliConfig;
use crate::input;

/// Arguments for the sections command
#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Treat inputs as structured documents (JSON section trees)
    #[arg(short, long)]
    pub structured: bool,

    /// Report detected headings only, without collecting paragraphs
    #[arg(long)]
    pub headings_only: bool,

    /// Look-ahead window in paragraphs (overrides config file)
    #[arg(short, long, value_name = "N")]
    pub par_range: Option<usize>,

    /// Maximum heading length in words (overrides config file)
    #[arg(short, long, value_name = "N")]
    pub max_heading_words: Option<usize>,

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

impl SectionsArgs {
    /// Execute the sections command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);
        log::info!("Locating methods sections");

        let mut cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        if let Some(par_range) = self.par_range {
            cli_config.section.par_range = par_range;
            cli_config.section.structured_par_range = par_range;
        }
        if let Some(words) = self.max_heading_words {
            cli_config.section.max_heading_words = words;
        }

        let extractor = PlaceExtractor::with_config(cli_config.api_config()?)?;
        let files = input::resolve_patterns(&self.input)?;
        log::debug!("processing {} file(s)", files.len());

        let mut formatter = make_formatter(
            self.format,
            self.output.as_deref(),
            cli_config.output.pretty_json,
        )?;

        for path in &files {
            let source = path.display().to_string();
            let text = input::read_text(path)?;

            if self.structured {
                let document: Document = serde_json::from_str(&text)
                    .with_context(|| format!("Not a structured document: {source}"))?;
                if self.headings_only {
                    let headings = extractor.detect_structured_headings(&document);
                    formatter.format_headings(&source, &headings)?;
                } else {
                    for section in extractor.locate_methods_structured(&document) {
                        formatter.format_section(&source, &section)?;
                    }
                }
            } else if self.headings_only {
                let headings = extractor.detect_headings(Input::from_text(text))?;
                formatter.format_headings(&source, &headings)?;
            } else {
                let report = extractor.locate_methods(Input::from_text(text))?;
                log::info!(
                    "{source}: {} heading(s), {} bytes scanned",
                    report.metadata.headings_found,
                    report.metadata.total_bytes
                );
                formatter.format_methods(&source, &report)?;
            }
        }

        formatter.finish()
    }
}
