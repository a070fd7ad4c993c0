//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - Embedder: text to vector conversion
//! - DocumentStore: passage persistence and nearest-neighbour queries

pub mod document_store;
pub mod embedding;

pub use document_store::{DocumentStore, NewDocumentRow, SimilarityQuery, StoredMatch};
pub use embedding::Embedder;
