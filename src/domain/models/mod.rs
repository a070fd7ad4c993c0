pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod search;

pub use chunking::{ChunkingConfig, MIN_CHUNK_CHARS};
pub use config::{
    Config, DatabaseConfig, EmbeddingConfig, EmbeddingProviderKind, LogFormat, LoggingConfig,
    ProcessingMode, RetrievalConfig, RotationPolicy,
};
pub use document::{DocumentChunk, DocumentMetadata, EmbeddedDocument, SourceDocument, UNKNOWN_YEAR};
pub use embedding::{
    cosine_distance, l2_norm, parse_vector_literal, to_vector_literal, Embedding, EMBEDDING_DIMENSIONS,
};
pub use search::{SearchResult, DEFAULT_SEARCH_LIMIT};
