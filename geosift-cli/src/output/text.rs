//! Plain-text output formatter

use super::OutputFormatter;
use anyhow::Result;
use geosift_api::{Candidate, MethodsReport, SectionMatch};
use std::io::Write;

/// Text formatter - human-readable output
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_methods(&mut self, source: &str, report: &MethodsReport) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        if report.is_empty() {
            writeln!(self.writer, "(no methods section found)")?;
            return Ok(());
        }
        for heading in &report.headings {
            writeln!(self.writer, "== {heading}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.text.trim_end())?;
        Ok(())
    }

    fn format_headings(&mut self, source: &str, headings: &[String]) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        for heading in headings {
            writeln!(self.writer, "== {heading}")?;
        }
        Ok(())
    }

    fn format_section(&mut self, source: &str, section: &SectionMatch) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        writeln!(self.writer, "== {}", section.heading)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", section.text.trim_end())?;
        Ok(())
    }

    fn format_candidates(
        &mut self,
        source: &str,
        sentence_index: usize,
        candidates: &[Candidate],
    ) -> Result<()> {
        for candidate in candidates {
            writeln!(self.writer, "{source}:{sentence_index}\t{}", candidate.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
