//! Tagged-token data model shared by the chunker and the filter.

use std::fmt;

/// Named-entity tag attached to a token by the upstream tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EntityTag {
    /// A geographic location
    Location,
    /// An organization name
    Organization,
    /// A person name (kept as a chunk trigger because taggers confuse
    /// place names and person names)
    Person,
    /// Anything that is not a recognized entity
    Other,
}

impl EntityTag {
    /// Map an upstream tagger label to a tag.
    ///
    /// Unknown labels degrade to [`EntityTag::Other`]: they neither start
    /// nor extend a run.
    pub fn from_label(label: &str) -> Self {
        match label {
            "LOCATION" => EntityTag::Location,
            "ORGANIZATION" => EntityTag::Organization,
            "PERSON" => EntityTag::Person,
            _ => EntityTag::Other,
        }
    }

    /// The wire label for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            EntityTag::Location => "LOCATION",
            EntityTag::Organization => "ORGANIZATION",
            EntityTag::Person => "PERSON",
            EntityTag::Other => "OTHER",
        }
    }

    /// Whether this tag triggers or extends a chunk run.
    pub fn is_entity(&self) -> bool {
        matches!(
            self,
            EntityTag::Location | EntityTag::Organization | EntityTag::Person
        )
    }
}

/// A single (word, tag) pair from the upstream tokenizer + tagger.
///
/// Ordering within a sentence is significant: position determines adjacency
/// and context windows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedToken {
    /// Surface form of the token
    pub word: String,
    /// Entity tag assigned upstream
    pub tag: EntityTag,
}

impl TaggedToken {
    /// Create a new tagged token.
    pub fn new(word: impl Into<String>, tag: EntityTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }

    /// Lower-cased surface form, used by all vocabulary lookups.
    pub fn word_lower(&self) -> String {
        self.word.to_lowercase()
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag.label())
    }
}
