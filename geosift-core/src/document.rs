//! Structured document model.
//!
//! The XML/metadata extraction collaborator converts whatever markup it
//! parses into this explicit tree. A paragraph exposes its own text plus an
//! ordered list of inline references with their trailing text, so the
//! section locator never needs markup-library tail-text introspection.

/// A structured article: an ordered list of top-level sections.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Top-level sections in document order
    pub sections: Vec<Section>,
}

/// One section: an ordered list of child nodes (title, paragraphs, nested
/// sections, anything else).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Direct children in document order
    pub children: Vec<SectionNode>,
}

/// A direct child of a section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SectionNode {
    /// Section heading text
    Title(String),
    /// A paragraph of body text
    Paragraph(Paragraph),
    /// A nested subsection
    Section(Section),
    /// Structural content the locator ignores (figures, tables, captions)
    Other,
}

/// A paragraph node: its own text plus any inline reference markers.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// The paragraph's leading text, up to the first inline reference.
    /// Missing text in the source markup is represented as an empty string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Inline citation markers with the text that follows each of them
    #[cfg_attr(feature = "serde", serde(default))]
    pub refs: Vec<InlineRef>,
}

/// An inline reference marker and the text trailing it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineRef {
    /// The marker text itself, e.g. "[12]"
    #[cfg_attr(feature = "serde", serde(default))]
    pub marker: String,
    /// Text between this marker and the next one (or the paragraph end)
    #[cfg_attr(feature = "serde", serde(default))]
    pub tail: String,
}

impl Document {
    /// Create a document from top-level sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// All sections in document order, including nested subsections.
    ///
    /// A nested section is visited after its parent, mirroring a
    /// depth-first walk of the source markup.
    pub fn sections_deep(&self) -> Vec<&Section> {
        let mut out = Vec::new();
        for section in &self.sections {
            section.collect_deep(&mut out);
        }
        out
    }
}

impl Section {
    /// Create a section from child nodes.
    pub fn new(children: Vec<SectionNode>) -> Self {
        Self { children }
    }

    fn collect_deep<'a>(&'a self, out: &mut Vec<&'a Section>) {
        out.push(self);
        for child in &self.children {
            if let SectionNode::Section(nested) = child {
                nested.collect_deep(out);
            }
        }
    }
}

impl Paragraph {
    /// Create a paragraph with no inline references.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            refs: Vec::new(),
        }
    }

    /// Create a paragraph with inline references.
    pub fn with_refs(text: impl Into<String>, refs: Vec<InlineRef>) -> Self {
        Self {
            text: text.into(),
            refs,
        }
    }
}

impl InlineRef {
    /// Create an inline reference.
    pub fn new(marker: impl Into<String>, tail: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            tail: tail.into(),
        }
    }
}
