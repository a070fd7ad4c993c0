//! Adapters for external systems: embedding providers and document stores.

pub mod embeddings;
pub mod memory;
pub mod postgres;
pub(crate) mod ranking;
pub mod sqlite;

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::DatabaseConfig;
use crate::domain::ports::DocumentStore;

pub use memory::InMemoryDocumentStore;
pub use postgres::PgVectorDocumentStore;
pub use sqlite::SqliteDocumentStore;

/// URL that selects the in-process store.
pub const MEMORY_STORE_URL: &str = "memory";

/// Which store a database URL selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Sqlite,
    Memory,
}

impl StoreKind {
    pub fn from_url(url: &str) -> DomainResult<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else if url == MEMORY_STORE_URL {
            Ok(Self::Memory)
        } else {
            Err(DomainError::InvalidInput(format!("unsupported database url: {url}")))
        }
    }
}

/// Open the store named by `config.url` and make sure its table exists.
pub async fn open_store(config: &DatabaseConfig, dimensions: usize) -> DomainResult<Arc<dyn DocumentStore>> {
    let kind = StoreKind::from_url(&config.url)?;

    let store: Arc<dyn DocumentStore> = match kind {
        StoreKind::Postgres => Arc::new(
            PgVectorDocumentStore::connect_lazy(&config.url, config.max_connections)?.with_dimensions(dimensions),
        ),
        StoreKind::Sqlite => {
            let pool = sqlite::create_pool(&config.url, &sqlite::PoolConfig::from(config))
                .await
                .map_err(|e| DomainError::StoreFailed(e.to_string()))?;
            Arc::new(SqliteDocumentStore::new(pool))
        }
        StoreKind::Memory => Arc::new(InMemoryDocumentStore::new()),
    };

    store.ensure_schema().await?;
    info!(store = ?kind, "document store ready");
    Ok(store)
}
