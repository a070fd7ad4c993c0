//! SQLite database adapters.

pub mod connection;
pub mod document_store;

pub use connection::{create_pool, create_test_pool, ConnectionError, PoolConfig};
pub use document_store::SqliteDocumentStore;
