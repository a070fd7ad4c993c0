//! SQLite implementation of the DocumentStore.
//!
//! Embeddings are kept in their bracketed text form; cosine distances are
//! computed in Rust after the optional year filter runs in SQL.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::adapters::ranking::{rank_candidates, CandidateRow};
use crate::domain::errors::DomainResult;
use crate::domain::ports::{DocumentStore, NewDocumentRow, SimilarityQuery, StoredMatch};

const CREATE_DOCUMENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    metadata TEXT NOT NULL,
    embedding TEXT NOT NULL
)";

const CREATE_YEAR_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_documents_year ON documents (json_extract(metadata, '$.year'))";

#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn ensure_schema(&self) -> DomainResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_DOCUMENTS_TABLE).execute(&mut *conn).await?;
        sqlx::query(CREATE_YEAR_INDEX).execute(&mut *conn).await?;
        Ok(())
    }

    async fn insert(&self, row: &NewDocumentRow) -> DomainResult<i64> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("INSERT INTO documents (content, metadata, embedding) VALUES (?, ?, ?)")
            .bind(&row.content)
            .bind(&row.metadata_json)
            .bind(&row.embedding_literal)
            .execute(&mut *conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn query_similar(&self, query: &SimilarityQuery) -> DomainResult<Vec<StoredMatch>> {
        let mut conn = self.pool.acquire().await?;

        let rows: Vec<DocumentRow> = if let Some(year) = &query.year {
            sqlx::query_as(
                "SELECT content, metadata, embedding FROM documents
                 WHERE json_extract(metadata, '$.year') = ?
                 ORDER BY id",
            )
            .bind(year)
            .fetch_all(&mut *conn)
            .await?
        } else {
            sqlx::query_as("SELECT content, metadata, embedding FROM documents ORDER BY id")
                .fetch_all(&mut *conn)
                .await?
        };
        drop(conn);

        let candidates = rows
            .into_iter()
            .map(CandidateRow::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        rank_candidates(candidates, query)
    }

    async fn count(&self) -> DomainResult<u64> {
        let mut conn = self.pool.acquire().await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count.max(0) as u64)
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    content: String,
    metadata: String,
    embedding: String,
}

impl TryFrom<DocumentRow> for CandidateRow {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            content: row.content,
            metadata: serde_json::from_str(&row.metadata)?,
            embedding_literal: row.embedding,
        })
    }
}
