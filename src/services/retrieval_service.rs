//! Vector retrieval service
//!
//! Persists embedded passages and answers similarity queries against the
//! injected document store.

use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{
    to_vector_literal, DocumentChunk, DocumentMetadata, EmbeddedDocument, SearchResult, DEFAULT_SEARCH_LIMIT,
    UNKNOWN_YEAR,
};
use crate::domain::ports::{DocumentStore, Embedder, NewDocumentRow, SimilarityQuery, StoredMatch};

/// Inserts passages and runs nearest-neighbour search.
///
/// The `try_*` methods surface store and embedder failures; their plain
/// counterparts log the failure and degrade to an empty result.
pub struct RetrievalService {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn DocumentStore>,
    default_limit: usize,
}

impl RetrievalService {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            embedder,
            store,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Limit used when a search gives none
    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn embedder(&self) -> &Arc<dyn Embedder> {
        &self.embedder
    }

    /// Embed a passage and persist it, returning the new row id.
    ///
    /// # Errors
    /// Embedding and store failures are logged and returned.
    pub async fn insert_document(&self, chunk: &DocumentChunk) -> DomainResult<i64> {
        let embedding = match self.embedder.embed(&chunk.content).await {
            Ok(embedding) => embedding,
            Err(e) => {
                error!(filename = %chunk.metadata.filename, error = %e, "failed to embed passage");
                return Err(e);
            }
        };
        self.insert_embedded(&EmbeddedDocument::new(chunk.clone(), embedding))
            .await
    }

    /// Persist a passage that already carries its embedding.
    pub async fn insert_embedded(&self, document: &EmbeddedDocument) -> DomainResult<i64> {
        let row = NewDocumentRow {
            content: document.chunk.content.clone(),
            metadata_json: serde_json::to_string(&document.chunk.metadata)?,
            embedding_literal: to_vector_literal(&document.embedding),
        };

        match self.store.insert(&row).await {
            Ok(id) => {
                debug!(
                    id,
                    filename = %document.chunk.metadata.filename,
                    chunk_index = document.chunk.metadata.chunk_index,
                    "inserted passage"
                );
                Ok(id)
            }
            Err(e) => {
                error!(filename = %document.chunk.metadata.filename, error = %e, "failed to insert passage");
                Err(e)
            }
        }
    }

    /// Passages most similar to `query`, best first.
    ///
    /// `year` restricts matches to passages whose metadata year equals it
    /// exactly; an empty `year` is no filter. A `limit` of zero yields no
    /// results without querying.
    #[instrument(skip(self), fields(embedder = self.embedder.name()))]
    pub async fn try_search_similar(
        &self,
        query: &str,
        limit: Option<usize>,
        year: Option<&str>,
    ) -> DomainResult<Vec<SearchResult>> {
        let limit = limit.unwrap_or(self.default_limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        let embedding = self.embedder.embed(query).await?;
        let matches = self
            .store
            .query_similar(&SimilarityQuery {
                embedding_literal: to_vector_literal(&embedding),
                year: year.filter(|y| !y.is_empty()).map(str::to_string),
                limit,
            })
            .await?;

        let mut results: Vec<SearchResult> = matches.into_iter().map(into_search_result).collect();
        results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        results.truncate(limit);

        debug!(results = results.len(), "similarity search complete");
        Ok(results)
    }

    /// Like [`Self::try_search_similar`], but any failure yields no results.
    pub async fn search_similar(&self, query: &str, limit: Option<usize>, year: Option<&str>) -> Vec<SearchResult> {
        self.try_search_similar(query, limit, year)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "similarity search failed");
                Vec::new()
            })
    }

    /// Number of stored passages.
    pub async fn try_document_count(&self) -> DomainResult<u64> {
        self.store.count().await
    }

    /// Number of stored passages, or zero if the store cannot be reached.
    pub async fn document_count(&self) -> u64 {
        self.try_document_count().await.unwrap_or_else(|e| {
            error!(error = %e, "failed to count documents");
            0
        })
    }
}

fn into_search_result(stored: StoredMatch) -> SearchResult {
    SearchResult::new(
        stored.content,
        metadata_from_value(&stored.metadata),
        stored.similarity_score.unwrap_or(0.0),
    )
}

/// Read stored metadata, tolerating rows written with missing fields.
fn metadata_from_value(value: &serde_json::Value) -> DocumentMetadata {
    if let Ok(metadata) = serde_json::from_value::<DocumentMetadata>(value.clone()) {
        return metadata;
    }

    let text = |key: &str| value.get(key).and_then(serde_json::Value::as_str);
    DocumentMetadata::new(
        text("filename").unwrap_or_default(),
        text("year").unwrap_or(UNKNOWN_YEAR),
        value
            .get("chunk_index")
            .and_then(serde_json::Value::as_u64)
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(0),
    )
}
