//! Text chunking service implementation
//!
//! Splits letters into overlapping character windows, snapping each window
//! back to the last sentence or paragraph boundary so passages do not end
//! mid-sentence.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ChunkingConfig, MIN_CHUNK_CHARS};

/// Boundary-aware text chunker
///
/// Splits text into chunks of at most `chunk_size` characters (plus the
/// boundary character when a snap lands on it), with `chunk_overlap`
/// characters shared between neighbours.
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    /// Create a new chunker with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new chunker with custom configuration
    pub fn with_config(config: ChunkingConfig) -> DomainResult<Self> {
        config
            .validate()
            .map_err(|e| DomainError::InvalidInput(format!("Invalid chunking config: {e}")))?;

        Ok(Self { config })
    }

    pub const fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Chunk text into passages suitable for embedding
    pub fn chunk(&self, text: &str) -> Vec<String> {
        chunk_text(text, self.config.chunk_size, self.config.chunk_overlap)
    }
}

/// Split `text` into overlapping passages.
///
/// Positions are counted in chars. Each window starts at `start` and runs
/// `chunk_size` chars; unless it reaches the end of the text it is cut after
/// the last `.` or `\n` found in `(start, end]`. The next window begins
/// `overlap` chars before the cut (or before `start + chunk_size` when the
/// window ran off the end), and always at least one char after the
/// previous start. A final window can therefore repeat the tail of the one
/// before it. Passages of 50 chars or fewer after trimming are dropped.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let chunk_size = chunk_size.max(1);

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < len {
        let mut end = start + chunk_size;

        if end < len {
            if let Some(break_point) = last_boundary(&chars, start, end) {
                end = break_point + 1;
            }
        }

        let window: String = chars[start..end.min(len)].iter().collect();
        chunks.push(window.trim().to_string());

        // `end` may run past the text; the next start still steps back from it.
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks.retain(|chunk| chunk.chars().count() > MIN_CHUNK_CHARS);
    chunks
}

/// Last `.` or `\n` at a position in `(start, end]`. Requires `end < chars.len()`.
fn last_boundary(chars: &[char], start: usize, end: usize) -> Option<usize> {
    chars[start + 1..=end]
        .iter()
        .rposition(|&c| c == '.' || c == '\n')
        .map(|offset| start + 1 + offset)
}
