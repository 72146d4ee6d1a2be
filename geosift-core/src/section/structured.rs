//! Methods-section location over structured documents.
//!
//! Unlike raw text, a structured document attributes every paragraph to a
//! section, so the locator returns one (heading, text) pair per matching
//! section. Each section is scanned once with a two-state machine: seek a
//! matching title, then accumulate paragraphs up to the limit.

use super::heading::HeadingRules;
use crate::document::{Document, Section, SectionNode};

/// Default paragraph limit per matching section.
pub const DEFAULT_PAR_RANGE: usize = 3;

/// One matching section: its heading and the accumulated paragraph text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionMatch {
    /// The matching title text
    pub heading: String,
    /// Accumulated paragraph text, each paragraph ending in a blank line
    pub text: String,
}

/// Locates methods-like sections in a structured document.
#[derive(Debug, Clone)]
pub struct SectionLocator {
    rules: HeadingRules,
    par_range: usize,
}

impl Default for SectionLocator {
    fn default() -> Self {
        Self::new(HeadingRules::for_structured(), DEFAULT_PAR_RANGE)
    }
}

impl SectionLocator {
    /// Create a locator with explicit rules and paragraph limit.
    pub fn new(rules: HeadingRules, par_range: usize) -> Self {
        Self { rules, par_range }
    }

    /// Return a (heading, text) pair for every matching section, in
    /// document order. Nested sections are scanned independently of their
    /// parents. A document with no matching titles yields an empty list.
    pub fn locate(&self, document: &Document) -> Vec<SectionMatch> {
        document
            .sections_deep()
            .into_iter()
            .filter_map(|section| self.scan_section(section))
            .collect()
    }

    /// All matching titles at any nesting depth, no accumulation. Mainly
    /// useful for diagnostics and vocabulary tuning.
    pub fn detect_headings(&self, document: &Document) -> Vec<String> {
        let mut headings = Vec::new();
        for section in document.sections_deep() {
            for child in &section.children {
                if let SectionNode::Title(title) = child {
                    if self.rules.matches_title(title) {
                        headings.push(title.clone());
                    }
                }
            }
        }
        headings
    }

    /// One pass over a section's direct children: {seeking, accumulating},
    /// terminal on limit-reached or section end.
    fn scan_section(&self, section: &Section) -> Option<SectionMatch> {
        let mut heading: Option<String> = None;
        let mut text = String::new();
        let mut visited = 0usize;

        for child in &section.children {
            match &heading {
                None => {
                    if let SectionNode::Title(title) = child {
                        if self.rules.matches_title(title) {
                            log::debug!("found methods section match: {title}");
                            heading = Some(title.clone());
                        }
                    }
                }
                Some(_) => {
                    if visited >= self.par_range {
                        log::debug!("paragraph limit reached");
                        break;
                    }
                    if let SectionNode::Paragraph(par) = child {
                        text.push_str(&par.text);
                        visited += 1;
                        for inline in &par.refs {
                            text.push(' ');
                            text.push_str(&inline.tail);
                        }
                        text.push_str("\n\n");
                    }
                }
            }
        }

        heading.map(|heading| SectionMatch { heading, text })
    }
}
