//! Infrastructure layer module
//!
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Text chunking and deterministic embeddings
//!
//! Store and provider adapters that satisfy the domain ports live in
//! `crate::adapters`.

pub mod config;
pub mod logging;
pub mod vector;
