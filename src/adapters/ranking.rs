//! Cosine ranking shared by the stores that compute distances in Rust.

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::models::{cosine_distance, parse_vector_literal};
use crate::domain::ports::{SimilarityQuery, StoredMatch};

/// A stored row with its embedding still in literal form.
pub(crate) struct CandidateRow {
    pub content: String,
    pub metadata: serde_json::Value,
    pub embedding_literal: String,
}

/// Order candidates by ascending cosine distance to the query and keep `limit`.
///
/// The sort is stable, so exact ties keep the candidates' input order. Rows
/// whose embedding cannot be compared with the query (dimension mismatch,
/// zero vector) are skipped.
pub(crate) fn rank_candidates(
    candidates: Vec<CandidateRow>,
    query: &SimilarityQuery,
) -> DomainResult<Vec<StoredMatch>> {
    let query_embedding = parse_vector_literal(&query.embedding_literal)?;

    let mut scored = Vec::with_capacity(candidates.len());
    for row in candidates {
        let embedding = parse_vector_literal(&row.embedding_literal)?;
        match cosine_distance(&query_embedding, &embedding) {
            Some(distance) => scored.push((distance, row)),
            None => debug!(
                stored_dims = embedding.len(),
                query_dims = query_embedding.len(),
                "skipping row with incomparable embedding"
            ),
        }
    }

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(scored
        .into_iter()
        .take(query.limit)
        .map(|(distance, row)| StoredMatch {
            content: row.content,
            metadata: row.metadata,
            similarity_score: Some(1.0 - distance),
        })
        .collect())
}

/// Exact string equality on `metadata.year`.
pub(crate) fn year_matches(metadata: &serde_json::Value, year: Option<&str>) -> bool {
    year.is_none_or(|wanted| metadata.get("year").and_then(serde_json::Value::as_str) == Some(wanted))
}
