use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// A row ready for persistence, already serialized for the store boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocumentRow {
    /// Passage text
    pub content: String,
    /// Metadata serialized as a JSON object
    pub metadata_json: String,
    /// Embedding serialized as `[a,b,...]`
    pub embedding_literal: String,
}

/// Parameters of a nearest-neighbour query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityQuery {
    /// Query embedding serialized as `[a,b,...]`
    pub embedding_literal: String,
    /// Restrict to rows whose `metadata.year` equals this value exactly
    pub year: Option<String>,
    /// Maximum number of rows to return
    pub limit: usize,
}

/// A row returned by a similarity query.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMatch {
    pub content: String,
    /// Stored metadata object
    pub metadata: serde_json::Value,
    /// `1 - cosine_distance`, if the store reported one
    pub similarity_score: Option<f64>,
}

/// Collaborator store that persists passages and runs similarity queries
///
/// Implementations must order matches by ascending cosine distance
/// (descending similarity) and honour `limit`. Each call acquires its own
/// connection and releases it before returning.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create the backing table if it does not exist
    async fn ensure_schema(&self) -> DomainResult<()>;

    /// Persist one passage, returning the store-assigned row id
    async fn insert(&self, row: &NewDocumentRow) -> DomainResult<i64>;

    /// Nearest-neighbour search by cosine distance
    async fn query_similar(&self, query: &SimilarityQuery) -> DomainResult<Vec<StoredMatch>>;

    /// Total number of stored passages
    async fn count(&self) -> DomainResult<u64>;
}
