//! In-process DocumentStore for offline runs and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapters::ranking::{rank_candidates, year_matches, CandidateRow};
use crate::domain::errors::DomainResult;
use crate::domain::ports::{DocumentStore, NewDocumentRow, SimilarityQuery, StoredMatch};

/// Vector-backed store; rows live only as long as the value.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    rows: RwLock<Vec<NewDocumentRow>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn ensure_schema(&self) -> DomainResult<()> {
        Ok(())
    }

    async fn insert(&self, row: &NewDocumentRow) -> DomainResult<i64> {
        // Reject rows the query path could not read back.
        serde_json::from_str::<serde_json::Value>(&row.metadata_json)?;

        let mut rows = self.rows.write().await;
        rows.push(row.clone());
        Ok(rows.len() as i64)
    }

    async fn query_similar(&self, query: &SimilarityQuery) -> DomainResult<Vec<StoredMatch>> {
        let rows = self.rows.read().await;

        let mut candidates = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            let metadata: serde_json::Value = serde_json::from_str(&row.metadata_json)?;
            if year_matches(&metadata, query.year.as_deref()) {
                candidates.push(CandidateRow {
                    content: row.content.clone(),
                    metadata,
                    embedding_literal: row.embedding_literal.clone(),
                });
            }
        }
        drop(rows);

        rank_candidates(candidates, query)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }
}
