//! Document domain models
//!
//! A source letter is split into `DocumentChunk`s, each of which is later
//! paired with its embedding as an `EmbeddedDocument`.

use serde::{Deserialize, Serialize};

use super::embedding::Embedding;

/// Year recorded when a filename carries no four-digit year.
pub const UNKNOWN_YEAR: &str = "unknown";

/// A raw letter before chunking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name the text came from (e.g. `berkshire-hathaway-2023.pdf`)
    pub filename: String,
    /// Full extracted text
    pub text: String,
}

impl SourceDocument {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Metadata stored alongside every passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Source file name
    pub filename: String,

    /// Four-digit year taken from the filename, or `"unknown"`
    pub year: String,

    /// Position of this passage within its source document
    pub chunk_index: usize,
}

impl DocumentMetadata {
    pub fn new(filename: impl Into<String>, year: impl Into<String>, chunk_index: usize) -> Self {
        Self {
            filename: filename.into(),
            year: year.into(),
            chunk_index,
        }
    }
}

/// A retrievable passage of a letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Passage text, trimmed
    pub content: String,

    /// Provenance of the passage
    pub metadata: DocumentMetadata,
}

impl DocumentChunk {
    pub fn new(content: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Get a preview of the content (first 100 chars)
    pub fn preview(&self) -> String {
        preview(&self.content, 100)
    }
}

/// A passage paired with the embedding generated for it
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedDocument {
    pub chunk: DocumentChunk,
    pub embedding: Embedding,
}

impl EmbeddedDocument {
    pub const fn new(chunk: DocumentChunk, embedding: Embedding) -> Self {
        Self { chunk, embedding }
    }
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
