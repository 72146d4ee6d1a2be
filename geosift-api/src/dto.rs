//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use geosift_core::Chunk;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A surviving place-name candidate (FFI-safe DTO)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Human-readable span text, suitable as a geocoding query seed
    pub text: String,
    /// The underlying (word, tag) pairs
    pub tokens: Vec<geosift_core::TaggedToken>,
}

impl From<&Chunk> for Candidate {
    fn from(chunk: &Chunk) -> Self {
        Self {
            text: chunk.text(),
            tokens: chunk.tokens().to_vec(),
        }
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes of input text processed
    pub total_bytes: usize,
    /// Number of methods-like headings recognized
    pub headings_found: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Located methods-section material for one article
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodsReport {
    /// Headings recognized as methods-like, in document order
    pub headings: Vec<String>,
    /// Selected paragraph text joined with blank lines
    pub text: String,
    /// Processing metadata
    pub metadata: Metadata,
}

impl MethodsReport {
    /// Whether no methods section was detected (an ordinary outcome).
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.text.is_empty()
    }
}
