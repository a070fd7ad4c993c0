//! CLI command implementations.

pub mod count;
pub mod embed;
pub mod ingest;
pub mod init;
pub mod load_samples;
pub mod search;

/// Offline configuration: in-memory store and deterministic embeddings.
#[cfg(test)]
pub(crate) fn test_config() -> crate::domain::models::Config {
    use crate::adapters::MEMORY_STORE_URL;
    use crate::domain::models::{Config, EmbeddingProviderKind};

    let mut config = Config::default();
    config.database.url = MEMORY_STORE_URL.to_string();
    config.embedding.provider = EmbeddingProviderKind::Deterministic;
    config.embedding.dimensions = 32;
    config
}
