//! Output formatting module

use anyhow::Result;
use geosift_api::{Candidate, MethodsReport, SectionMatch};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Record the methods material located in one raw-text article
    fn format_methods(&mut self, source: &str, report: &MethodsReport) -> Result<()>;

    /// Record detected headings only (diagnostic mode)
    fn format_headings(&mut self, source: &str, headings: &[String]) -> Result<()>;

    /// Record one matching section of a structured document
    fn format_section(&mut self, source: &str, section: &SectionMatch) -> Result<()>;

    /// Record the surviving candidates of one tagged sentence
    fn format_candidates(
        &mut self,
        source: &str,
        sentence_index: usize,
        candidates: &[Candidate],
    ) -> Result<()>;

    /// Finalize output (e.g., close the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
