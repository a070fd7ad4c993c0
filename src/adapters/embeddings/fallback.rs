//! Primary/secondary embedder composition.
//!
//! Tries the primary embedder first and, on any error, logs a warning and
//! embeds the same text with the secondary. Callers see an error only when
//! both fail.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::errors::DomainResult;
use crate::domain::models::Embedding;
use crate::domain::ports::Embedder;

/// Embedder that falls back to `S` when `P` fails.
#[derive(Debug, Clone)]
pub struct FallbackEmbedder<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackEmbedder<P, S>
where
    P: Embedder,
    S: Embedder,
{
    pub const fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub const fn primary(&self) -> &P {
        &self.primary
    }

    pub const fn secondary(&self) -> &S {
        &self.secondary
    }
}

#[async_trait]
impl<P, S> Embedder for FallbackEmbedder<P, S>
where
    P: Embedder,
    S: Embedder,
{
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn dimension(&self) -> usize {
        self.primary.dimension()
    }

    async fn embed(&self, text: &str) -> DomainResult<Embedding> {
        match self.primary.embed(text).await {
            Ok(embedding) => Ok(embedding),
            Err(err) => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.secondary.name(),
                    error = %err,
                    "primary embedder unavailable, using fallback embeddings"
                );
                self.secondary.embed(text).await
            }
        }
    }
}
