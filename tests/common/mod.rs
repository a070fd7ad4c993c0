//! Common test utilities for integration tests
//!
//! Shared fixtures for the letter pipeline: letter files on disk, offline
//! embedders and fresh stores.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use letter_rag::adapters::sqlite::create_test_pool;
use letter_rag::adapters::{InMemoryDocumentStore, SqliteDocumentStore};
use letter_rag::domain::ports::{DocumentStore, Embedder};
use letter_rag::infrastructure::vector::DeterministicEmbedder;
use letter_rag::services::RetrievalService;

/// Dimension used by tests; small enough to keep stores fast
pub const TEST_DIMENSIONS: usize = 64;

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn embedder() -> Arc<dyn Embedder> {
    Arc::new(DeterministicEmbedder::new(TEST_DIMENSIONS))
}

/// Fresh in-memory SQLite store with the documents table created
pub async fn sqlite_store() -> Arc<dyn DocumentStore> {
    let pool = create_test_pool().await.expect("Failed to create test pool");
    let store = SqliteDocumentStore::new(pool);
    store.ensure_schema().await.expect("Failed to create schema");
    Arc::new(store)
}

pub fn memory_retrieval() -> RetrievalService {
    RetrievalService::new(embedder(), Arc::new(InMemoryDocumentStore::new()))
}

/// A letter with several paragraphs on distinct topics
pub fn letter_text(year: &str) -> String {
    [
        format!("To the shareholders, {year} was a year of steady progress across our operating businesses. "),
        "Our insurance operations generated substantial float. Float is money we hold but do not own, and it funds our investments. ".to_string(),
        "We repurchased shares only when the price was below our conservative estimate of intrinsic value. ".to_string(),
        "Railroads and utilities require heavy capital expenditure, yet they earn regulated and dependable returns over decades. ".to_string(),
        "We continue to avoid businesses we do not understand, and we never bet the company on leverage. ".to_string(),
    ]
    .iter()
    .map(|p| p.repeat(3))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Write `letter_text(year)` to `berkshire-hathaway-<year>.txt` under `dir`
pub fn write_letter(dir: &TempDir, year: &str) -> PathBuf {
    let path = dir.path().join(format!("berkshire-hathaway-{year}.txt"));
    std::fs::write(&path, letter_text(year)).expect("Failed to write letter");
    path
}
