//! letter-rag - semantic search over shareholder letters
//!
//! Letters are split into overlapping passages, each passage is embedded,
//! and questions are answered with the passages whose embeddings are
//! closest to the question's.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and the `Embedder` /
//!   `DocumentStore` ports
//! - **Adapters** (`adapters`): OpenAI embeddings, the fallback composition,
//!   SQLite, pgvector and in-memory stores
//! - **Infrastructure Layer** (`infrastructure`): chunking, deterministic
//!   embeddings, configuration and logging
//! - **Service Layer** (`services`): document processing, retrieval and the
//!   agent-facing search tool
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use letter_rag::adapters::InMemoryDocumentStore;
//! use letter_rag::infrastructure::vector::DeterministicEmbedder;
//! use letter_rag::services::{sample_letters, RetrievalService};
//!
//! # async fn demo() -> letter_rag::DomainResult<()> {
//! let retrieval = RetrievalService::new(
//!     Arc::new(DeterministicEmbedder::default()),
//!     Arc::new(InMemoryDocumentStore::new()),
//! );
//! for passage in sample_letters() {
//!     retrieval.insert_document(&passage).await?;
//! }
//! let results = retrieval.search_similar("cryptocurrency", Some(2), None).await;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    ChunkingConfig, Config, DocumentChunk, DocumentMetadata, EmbeddedDocument, Embedding, ProcessingMode,
    SearchResult, SourceDocument,
};
pub use domain::ports::{DocumentStore, Embedder};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{DocumentProcessor, RetrievalService, VectorSearchTool};
