//! Candidate place-name extraction from scientific article text.
//!
//! Three components form a pipeline: a section locator finds
//! methods/materials sections (where sampling locations live), a chunk
//! extractor assembles candidate place-name spans from named-entity-tagged
//! tokens, and a chunk filter discards citation artifacts, author initials,
//! and company addresses. Everything is pure, synchronous, and
//! request-scoped: tokenization, tagging, geocoding, and document fetching
//! are external collaborators.
//!
//! # Example
//!
//! ```rust
//! use geosift_core::chunk::{ChunkExtractor, ChunkFilter};
//! use geosift_core::token::{EntityTag, TaggedToken};
//!
//! let sentence = vec![
//!     TaggedToken::new("Samples", EntityTag::Other),
//!     TaggedToken::new("came", EntityTag::Other),
//!     TaggedToken::new("from", EntityTag::Other),
//!     TaggedToken::new("northern", EntityTag::Other),
//!     TaggedToken::new("Finland", EntityTag::Location),
//!     TaggedToken::new(".", EntityTag::Other),
//! ];
//!
//! let chunks = ChunkExtractor::default().extract(&sentence);
//! let candidates = ChunkFilter::default().filter(&sentence, &chunks);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].text(), "northern Finland");
//! ```

pub mod chunk;
pub mod document;
pub mod error;
pub mod normalize;
pub mod section;
pub mod token;
pub mod vocab;

pub use chunk::{Chunk, ChunkExtractor, ChunkFilter, ChunkerConfig, ChunkerState, FilterConfig};
pub use document::{Document, InlineRef, Paragraph, Section, SectionNode};
pub use error::{CoreError, Result};
pub use normalize::repair_extraction_artifacts;
pub use section::{HeadingRules, MethodsText, MethodsTextLocator, SectionLocator, SectionMatch};
pub use token::{EntityTag, TaggedToken};
