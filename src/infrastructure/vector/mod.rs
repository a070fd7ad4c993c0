//! Vector infrastructure components
//!
//! Text chunking and the offline deterministic embedder.

pub mod chunker;
pub mod deterministic;

pub use chunker::{chunk_text, Chunker};
pub use deterministic::{stable_hash, DeterministicEmbedder, SeededRandom};
