//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use geosift_api::{Candidate, MethodsReport, SectionMatch, TaggedToken};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - accumulates records and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    document: JsonDocument,
}

/// Top-level JSON output document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JsonDocument {
    /// Raw-text methods reports, one per input file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodsData>,
    /// Detected headings, one record per input file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<HeadingsData>,
    /// Structured-document section matches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionData>,
    /// Surviving candidates per sentence
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<CandidateData>,
}

/// Methods material located in one raw-text article
#[derive(Debug, Serialize, Deserialize)]
pub struct MethodsData {
    /// Source file
    pub source: String,
    /// Recognized headings in document order
    pub headings: Vec<String>,
    /// Reassembled look-ahead text
    pub text: String,
}

/// Detected headings for one article
#[derive(Debug, Serialize, Deserialize)]
pub struct HeadingsData {
    /// Source file
    pub source: String,
    /// Recognized headings in document order
    pub headings: Vec<String>,
}

/// One matching section of a structured document
#[derive(Debug, Serialize, Deserialize)]
pub struct SectionData {
    /// Source file
    pub source: String,
    /// Matching title
    pub heading: String,
    /// Accumulated paragraph text
    pub text: String,
}

/// One surviving candidate chunk
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateData {
    /// Source file
    pub source: String,
    /// Zero-based sentence index within the source
    pub sentence: usize,
    /// Candidate span text
    pub text: String,
    /// Underlying (word, tag) pairs
    pub tokens: Vec<TaggedToken>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            document: JsonDocument::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_methods(&mut self, source: &str, report: &MethodsReport) -> Result<()> {
        self.document.methods.push(MethodsData {
            source: source.to_string(),
            headings: report.headings.clone(),
            text: report.text.clone(),
        });
        Ok(())
    }

    fn format_headings(&mut self, source: &str, headings: &[String]) -> Result<()> {
        self.document.headings.push(HeadingsData {
            source: source.to_string(),
            headings: headings.to_vec(),
        });
        Ok(())
    }

    fn format_section(&mut self, source: &str, section: &SectionMatch) -> Result<()> {
        self.document.sections.push(SectionData {
            source: source.to_string(),
            heading: section.heading.clone(),
            text: section.text.clone(),
        });
        Ok(())
    }

    fn format_candidates(
        &mut self,
        source: &str,
        sentence_index: usize,
        candidates: &[Candidate],
    ) -> Result<()> {
        for candidate in candidates {
            self.document.candidates.push(CandidateData {
                source: source.to_string(),
                sentence: sentence_index,
                text: candidate.text.clone(),
                tokens: candidate.tokens.clone(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
