//! Domain layer for the letter retrieval pipeline
//!
//! This module contains the core models and the port traits that
//! infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
