//! Embedding domain models
//!
//! Vectors, their text serialization at the store boundary, and the
//! distance metric used for ranking.

use crate::domain::errors::{DomainError, DomainResult};

/// Dense semantic vector for a passage or query.
pub type Embedding = Vec<f64>;

/// Output size of the remote provider (`text-embedding-ada-002`) and of the
/// deterministic fallback.
pub const EMBEDDING_DIMENSIONS: usize = 1536;

/// Serialize a vector as a bracketed, comma-separated numeric literal
/// (`[0.12,-0.98,...]`), the form pgvector accepts for `::vector` casts.
pub fn to_vector_literal(embedding: &[f64]) -> String {
    let body = embedding
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{body}]")
}

/// Parse a literal produced by [`to_vector_literal`] (or by pgvector's text output).
pub fn parse_vector_literal(literal: &str) -> DomainResult<Embedding> {
    let inner = literal
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            DomainError::SerializationError(format!(
                "vector literal must be wrapped in brackets: {}",
                super::document::preview(literal, 40)
            ))
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|e| {
                DomainError::SerializationError(format!("invalid vector component '{}': {}", part.trim(), e))
            })
        })
        .collect()
}

/// L2 magnitude of a vector.
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine distance (`1 - cosine_similarity`), matching pgvector's `<=>` operator.
///
/// Returns `None` when the dimensions differ or either vector has zero magnitude.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = l2_norm(a);
    let mag_b = l2_norm(b);

    if mag_a == 0.0 || mag_b == 0.0 {
        return None;
    }

    Some(1.0 - dot / (mag_a * mag_b))
}
