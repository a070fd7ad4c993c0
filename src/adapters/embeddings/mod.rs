//! Embedding adapters and their composition.

pub mod fallback;
pub mod openai;

pub use fallback::FallbackEmbedder;
pub use openai::{OpenAiEmbedder, OpenAiEmbeddingConfig};

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{EmbeddingConfig, EmbeddingProviderKind};
use crate::domain::ports::Embedder;
use crate::infrastructure::vector::DeterministicEmbedder;

/// Build the embedder described by `config`.
///
/// `openai` yields the remote provider wrapped with the deterministic
/// fallback; `deterministic` yields the offline embedder alone.
pub fn build_embedder(config: &EmbeddingConfig) -> DomainResult<Arc<dyn Embedder>> {
    let offline = DeterministicEmbedder::new(config.dimensions);

    match config.provider {
        EmbeddingProviderKind::Openai => {
            let remote = OpenAiEmbedder::new(OpenAiEmbeddingConfig::from(config))?;
            Ok(Arc::new(FallbackEmbedder::new(remote, offline)))
        }
        EmbeddingProviderKind::Deterministic => Ok(Arc::new(offline)),
    }
}
