//! Embedding provider port for semantic vector generation.
//!
//! Defines the trait for embedders that convert text into dense vectors.
//! Concrete embedders (remote API, deterministic offline) are composed by the
//! fallback wrapper in the adapters layer.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Embedding;

/// Trait for text embedders.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Provider name (e.g., "openai", "deterministic", "fallback").
    fn name(&self) -> &'static str;

    /// Embedding dimension for this provider/model.
    fn dimension(&self) -> usize;

    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> DomainResult<Embedding>;
}
