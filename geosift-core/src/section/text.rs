//! Methods-section location over raw article text.
//!
//! Raw text carries almost no structure, so located text is not attributed
//! to a specific heading: the result is the ordered set of headings plus a
//! single reassembled blob of every paragraph inside any heading's
//! look-ahead window.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use super::heading::HeadingRules;

/// Default look-ahead window after each recognized heading, in paragraphs.
pub const DEFAULT_PAR_RANGE: usize = 4;

/// Recognized headings plus the reassembled look-ahead text.
///
/// Both fields empty means no methods section was detected; many articles
/// simply have none, so this is an ordinary result, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodsText {
    /// Headings recognized as methods-like, in document order
    pub headings: Vec<String>,
    /// Selected paragraphs joined with blank lines
    pub text: String,
}

impl MethodsText {
    /// Whether no methods section was detected.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.text.is_empty()
    }
}

/// Locates methods-like sections in raw extracted article text.
#[derive(Debug, Clone)]
pub struct MethodsTextLocator {
    rules: HeadingRules,
    par_range: usize,
}

impl Default for MethodsTextLocator {
    fn default() -> Self {
        Self::new(HeadingRules::for_text(), DEFAULT_PAR_RANGE)
    }
}

impl MethodsTextLocator {
    /// Create a locator with explicit rules and look-ahead window.
    pub fn new(rules: HeadingRules, par_range: usize) -> Self {
        Self { rules, par_range }
    }

    /// Locate methods-like sections and reassemble their look-ahead text.
    pub fn locate(&self, article: &str) -> MethodsText {
        let pars = paragraphs(article);
        log::debug!("article has {} paragraphs", pars.len());

        let mut headings = Vec::new();
        let mut indexes = Vec::new();
        for (i, par) in pars.iter().enumerate() {
            if let Some(title) = self.accepted_heading(par) {
                log::debug!("found section match: {title}");
                headings.push(title);
                indexes.push(i);
            }
        }
        if indexes.is_empty() {
            return MethodsText::default();
        }

        // Union the look-ahead windows, clamp to the valid range, dedup and
        // sort in one pass. A heading near the document end just yields a
        // partial window.
        let mut selected = BTreeSet::new();
        for &i in &indexes {
            for j in i..i + self.par_range {
                if j < pars.len() {
                    selected.insert(j);
                }
            }
        }

        let mut text = String::new();
        for &i in &selected {
            let par = repair_hyphenation(pars[i]);
            text.push_str(&par.replace('\n', " "));
            text.push_str("\n\n");
        }

        MethodsText { headings, text }
    }

    /// Heading detection only, no paragraph collection. Mainly useful for
    /// diagnostics and for tuning vocabulary patterns.
    pub fn detect_headings(&self, article: &str) -> Vec<String> {
        paragraphs(article)
            .iter()
            .filter_map(|par| self.accepted_heading(par))
            .collect()
    }

    fn accepted_heading(&self, par: &str) -> Option<String> {
        let repaired = repair_hyphenation(par);
        let candidate = repaired.lines().next().unwrap_or("");
        self.rules
            .is_heading(candidate)
            .then(|| candidate.to_string())
    }
}

/// Split text into paragraphs on runs of two-or-more line breaks.
fn paragraphs(text: &str) -> Vec<&str> {
    static BREAK: OnceLock<Regex> = OnceLock::new();
    let re = BREAK.get_or_init(|| Regex::new(r"\n{2,}").expect("paragraph break pattern compiles"));
    re.split(text).collect()
}

/// Rejoin words split across a line break by hyphenation.
///
/// A hyphen plus line break between two letters is a mid-word break left by
/// the text extractor. This also de-hyphenates genuinely hyphenated words
/// that happened to wrap, which is an accepted loss.
fn repair_hyphenation(par: &str) -> Cow<'_, str> {
    static HYPHEN_BREAK: OnceLock<Regex> = OnceLock::new();
    let re = HYPHEN_BREAK.get_or_init(|| {
        Regex::new(r"([a-zA-Z])-\n([a-zA-Z])").expect("hyphenation pattern compiles")
    });
    re.replace_all(par, "${1}${2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Introduction\n\nSome background text.\n\n3. Materials and Methods\n\nField sites were located in northern Finland.\n\nSites were georeferenced with a handheld GPS.\n\nStatistical analyses used mixed models.\n\nResults\n\nWe found things.";

    #[test]
    fn test_locates_heading_and_window() {
        let locator = MethodsTextLocator::new(HeadingRules::for_text(), 2);
        let found = locator.locate(ARTICLE);

        assert_eq!(found.headings, vec!["3. Materials and Methods"]);
        // Window of 2 starts at the heading paragraph itself
        assert!(found.text.contains("3. Materials and Methods"));
        assert!(found.text.contains("northern Finland"));
        assert!(!found.text.contains("handheld GPS"));
        assert!(!found.text.contains("mixed models"));
    }

    #[test]
    fn test_no_methods_found_is_empty_not_error() {
        let locator = MethodsTextLocator::default();
        let found = locator.locate("Introduction\n\nNothing here.\n\nConclusion\n\nBye.");
        assert!(found.is_empty());
    }

    #[test]
    fn test_window_clamped_at_document_end() {
        let locator = MethodsTextLocator::default();
        let found = locator.locate("Padding\n\nSample collection\n\nThe last paragraph.");
        assert_eq!(found.headings, vec!["Sample collection"]);
        assert!(found.text.contains("The last paragraph."));
        assert!(found.text.ends_with("\n\n"));
    }

    #[test]
    fn test_overlapping_windows_deduplicated() {
        let text = "Methods\n\nShared paragraph.\n\nSample collection\n\nMore text.";
        let locator = MethodsTextLocator::new(HeadingRules::for_text(), 3);
        let found = locator.locate(text);

        assert_eq!(found.headings.len(), 2);
        assert_eq!(found.text.matches("Shared paragraph.").count(), 1);
    }

    #[test]
    fn test_single_line_breaks_become_spaces() {
        let text = "Methods\nand sampling\n\nSites were\nvisited twice.";
        let locator = MethodsTextLocator::default();
        let found = locator.locate(text);

        assert_eq!(found.headings, vec!["Methods"]);
        assert!(found.text.contains("Methods and sampling"));
        assert!(found.text.contains("Sites were visited twice."));
    }

    #[test]
    fn test_hyphenation_repair_in_heading() {
        // "Meth-\nods" is a mid-word extractor break in the heading line
        let text = "Meth-\nods\n\nSampling happened here.";
        let locator = MethodsTextLocator::default();
        let found = locator.locate(text);
        assert_eq!(found.headings, vec!["Methods"]);
    }

    #[test]
    fn test_hyphenation_repair_in_body() {
        let text = "Methods\n\nField samples from south-\nwestern Finland were pooled.";
        let locator = MethodsTextLocator::default();
        let found = locator.locate(text);
        assert!(found.text.contains("southwestern Finland"));
    }

    #[test]
    fn test_detect_headings_only() {
        let locator = MethodsTextLocator::default();
        let headings = locator.detect_headings(ARTICLE);
        assert_eq!(headings, vec!["3. Materials and Methods"]);
    }

    #[test]
    fn test_headings_reported_in_document_order() {
        let text = "2. Patients\n\nFirst cohort.\n\n3. Specimens\n\nTissue bank.";
        let locator = MethodsTextLocator::default();
        let found = locator.locate(text);
        assert_eq!(found.headings, vec!["2. Patients", "3. Specimens"]);
    }
}
