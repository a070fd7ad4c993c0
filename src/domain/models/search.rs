//! Search result models

use serde::{Deserialize, Serialize};

use super::document::DocumentMetadata;

/// Default number of passages returned by a similarity search.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// A passage returned by similarity search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Passage text
    pub content: String,

    /// Provenance of the passage
    pub metadata: DocumentMetadata,

    /// `1 - cosine_distance`; higher is more similar
    pub similarity_score: f64,
}

impl SearchResult {
    pub const fn new(content: String, metadata: DocumentMetadata, similarity_score: f64) -> Self {
        Self {
            content,
            metadata,
            similarity_score,
        }
    }

    /// Build a result from a cosine distance reported by the store
    pub fn from_distance(content: String, metadata: DocumentMetadata, distance: f64) -> Self {
        Self::new(content, metadata, 1.0 - distance)
    }
}
