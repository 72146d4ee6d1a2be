//! CLI command implementations

use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

pub mod chunk;
pub mod sections;

pub use chunk::ChunkArgs;
pub use sections::SectionsArgs;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON document with all records
    Json,
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Build a formatter writing to stdout or the given file
pub(crate) fn make_formatter(
    format: OutputFormat,
    output: Option<&Path>,
    pretty_json: bool,
) -> Result<Box<dyn OutputFormatter>> {
    let writer: Box<dyn Write + Send + Sync> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    })
}
