//! Postgres (pgvector) database adapters.

pub mod document_store;

pub use document_store::PgVectorDocumentStore;
