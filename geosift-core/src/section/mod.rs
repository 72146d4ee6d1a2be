//! Methods-section location.
//!
//! Two input modalities share the heading-recognition rules: raw extracted
//! article text (paragraphs split on blank lines) and structured documents
//! (explicit section trees from the markup collaborator).

pub mod heading;
pub mod structured;
pub mod text;

pub use heading::HeadingRules;
pub use structured::{SectionLocator, SectionMatch};
pub use text::{MethodsText, MethodsTextLocator};
