//! Wiring shared by the CLI commands.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::adapters::embeddings::build_embedder;
use crate::adapters::open_store;
use crate::domain::models::Config;
use crate::domain::ports::{DocumentStore, Embedder};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{DocumentProcessor, RetrievalService};

/// Load configuration from `path` when given, else from `.letter-rag/`.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Embedder, store and services built from one configuration.
pub struct AppContext {
    pub config: Config,
    pub embedder: Arc<dyn Embedder>,
    pub store: Arc<dyn DocumentStore>,
    pub retrieval: Arc<RetrievalService>,
}

impl AppContext {
    /// Build the embedder, open the store and make sure its table exists.
    pub async fn build(config: Config) -> Result<Self> {
        let embedder = build_embedder(&config.embedding).context("Failed to create embedder")?;
        let store = open_store(&config.database, config.embedding.dimensions)
            .await
            .with_context(|| format!("Failed to open document store at {}", config.database.url))?;

        let retrieval = Arc::new(
            RetrievalService::new(Arc::clone(&embedder), Arc::clone(&store))
                .with_default_limit(config.retrieval.default_limit),
        );

        Ok(Self {
            config,
            embedder,
            store,
            retrieval,
        })
    }

    pub fn processor(&self) -> Result<DocumentProcessor> {
        Ok(
            DocumentProcessor::new(self.config.chunking.clone(), Arc::clone(&self.embedder))
                .context("Invalid chunking configuration")?
                .with_mode(self.config.mode),
        )
    }
}
