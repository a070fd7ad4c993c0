//! Deterministic offline embedder
//!
//! Produces reproducible unit-length vectors from text without any network
//! access. Used as the fallback when the remote provider is unavailable, and
//! on its own for offline runs and tests.
//!
//! The vector carries no semantic meaning: it is a seeded pseudo-random
//! direction derived from a 32-bit hash of the text. Identical text always
//! yields a bit-identical vector; distinct texts may collide.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{l2_norm, Embedding, EMBEDDING_DIMENSIONS};
use crate::domain::ports::Embedder;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

/// Hash-seeded embedder with a fixed output dimension
#[derive(Debug, Clone, Copy)]
pub struct DeterministicEmbedder {
    dimensions: usize,
}

impl Default for DeterministicEmbedder {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSIONS)
    }
}

impl DeterministicEmbedder {
    pub const fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Generate the embedding for `text` synchronously
    pub fn generate(&self, text: &str) -> Embedding {
        let mut rng = SeededRandom::new(u64::from(stable_hash(text)));

        let mut embedding: Embedding = (0..self.dimensions)
            .map(|_| (rng.next_f64() - 0.5) * 2.0)
            .collect();

        let magnitude = l2_norm(&embedding);
        if magnitude > 0.0 {
            for val in &mut embedding {
                *val /= magnitude;
            }
        } else if !embedding.is_empty() {
            let uniform = 1.0 / (self.dimensions as f64).sqrt();
            embedding.fill(uniform);
        }

        embedding
    }
}

#[async_trait]
impl Embedder for DeterministicEmbedder {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    fn dimension(&self) -> usize {
        self.dimensions
    }

    async fn embed(&self, text: &str) -> DomainResult<Embedding> {
        Ok(self.generate(text))
    }
}

/// 32-bit rolling hash (`h = h * 31 + unit`) over the UTF-16 code units of
/// `text`, with wrapping signed arithmetic; returns the absolute value.
pub fn stable_hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Linear congruential generator yielding values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}
