//! Postgres + pgvector implementation of the DocumentStore.
//!
//! Distances are computed by the database with the `<=>` cosine operator;
//! the embedding travels as a `[a,b,...]` literal cast to `vector`.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::models::EMBEDDING_DIMENSIONS;
use crate::domain::ports::{DocumentStore, NewDocumentRow, SimilarityQuery, StoredMatch};

#[derive(Clone)]
pub struct PgVectorDocumentStore {
    pool: PgPool,
    dimensions: usize,
}

impl PgVectorDocumentStore {
    pub const fn new(pool: PgPool) -> Self {
        Self {
            pool,
            dimensions: EMBEDDING_DIMENSIONS,
        }
    }

    /// Column width used when creating the `embedding vector(N)` column
    pub const fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Connect a pool lazily; the first query opens the connection.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> DomainResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DocumentStore for PgVectorDocumentStore {
    async fn ensure_schema(&self) -> DomainResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(&mut *conn)
            .await?;
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS documents (
                id SERIAL PRIMARY KEY,
                content TEXT NOT NULL,
                metadata JSONB,
                embedding vector({})
            )",
            self.dimensions
        ))
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn insert(&self, row: &NewDocumentRow) -> DomainResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO documents (content, metadata, embedding)
             VALUES ($1, $2::jsonb, $3::vector)
             RETURNING id",
        )
        .bind(&row.content)
        .bind(&row.metadata_json)
        .bind(&row.embedding_literal)
        .fetch_one(&mut *conn)
        .await?;
        Ok(i64::from(id))
    }

    async fn query_similar(&self, query: &SimilarityQuery) -> DomainResult<Vec<StoredMatch>> {
        let mut conn = self.pool.acquire().await?;
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);

        let rows: Vec<MatchRow> = if let Some(year) = &query.year {
            sqlx::query_as(
                "SELECT content, metadata, 1 - (embedding <=> $1::vector) AS similarity_score
                 FROM documents
                 WHERE metadata->>'year' = $2
                 ORDER BY embedding <=> $1::vector
                 LIMIT $3",
            )
            .bind(&query.embedding_literal)
            .bind(year)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await?
        } else {
            sqlx::query_as(
                "SELECT content, metadata, 1 - (embedding <=> $1::vector) AS similarity_score
                 FROM documents
                 ORDER BY embedding <=> $1::vector
                 LIMIT $2",
            )
            .bind(&query.embedding_literal)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await?
        };

        Ok(rows.into_iter().map(StoredMatch::from).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        let mut conn = self.pool.acquire().await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents")
            .fetch_one(&mut *conn)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    content: String,
    metadata: Option<sqlx::types::Json<serde_json::Value>>,
    similarity_score: Option<f64>,
}

impl From<MatchRow> for StoredMatch {
    fn from(row: MatchRow) -> Self {
        Self {
            content: row.content,
            metadata: row.metadata.map_or(serde_json::Value::Null, |json| json.0),
            similarity_score: row.similarity_score,
        }
    }
}
