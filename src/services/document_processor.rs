//! Document processing service
//!
//! Turns a letter into embedded passages: derive the year from the file name,
//! chunk the text, then embed each chunk through the injected embedder.

use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    ChunkingConfig, DocumentChunk, DocumentMetadata, EmbeddedDocument, ProcessingMode, SourceDocument, UNKNOWN_YEAR,
};
use crate::domain::ports::Embedder;
use crate::infrastructure::vector::Chunker;
use crate::services::samples::sample_content_for_year;

const YEAR_PATTERN: &str = "[0-9]{4}";

/// Chunks and embeds letters.
///
/// Holds no mutable state; one processor can serve concurrent callers.
pub struct DocumentProcessor {
    chunker: Chunker,
    embedder: Arc<dyn Embedder>,
    mode: ProcessingMode,
    year_pattern: Regex,
}

impl DocumentProcessor {
    /// Create a processor in development mode
    ///
    /// # Errors
    /// Returns `InvalidInput` when the chunking configuration is rejected.
    pub fn new(config: ChunkingConfig, embedder: Arc<dyn Embedder>) -> DomainResult<Self> {
        let year_pattern = Regex::new(YEAR_PATTERN).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        Ok(Self {
            chunker: Chunker::with_config(config)?,
            embedder,
            mode: ProcessingMode::default(),
            year_pattern,
        })
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// First run of four ASCII digits in `filename`, or `"unknown"`.
    pub fn extract_year(&self, filename: &str) -> String {
        self.year_pattern
            .find(filename)
            .map_or_else(|| UNKNOWN_YEAR.to_string(), |m| m.as_str().to_string())
    }

    /// Split a document into passages tagged with filename, year and position.
    pub fn chunk_document(&self, document: &SourceDocument) -> Vec<DocumentChunk> {
        let year = self.extract_year(&document.filename);

        self.chunker
            .chunk(&document.text)
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                DocumentChunk::new(content, DocumentMetadata::new(&document.filename, &year, index))
            })
            .collect()
    }

    /// Embed each chunk in order.
    ///
    /// # Errors
    /// Fails on the first chunk the embedder cannot handle.
    pub async fn embed_chunks(&self, chunks: Vec<DocumentChunk>) -> DomainResult<Vec<EmbeddedDocument>> {
        let mut embedded = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let embedding = self.embedder.embed(&chunk.content).await?;
            embedded.push(EmbeddedDocument::new(chunk, embedding));
        }
        Ok(embedded)
    }

    /// Chunk and embed a document already held in memory.
    pub async fn process(&self, document: &SourceDocument) -> DomainResult<Vec<EmbeddedDocument>> {
        let chunks = self.chunk_document(document);
        info!(
            filename = %document.filename,
            chars = document.text.chars().count(),
            chunks = chunks.len(),
            "chunked document"
        );
        self.embed_chunks(chunks).await
    }

    /// Read a UTF-8 text letter from disk and process it.
    ///
    /// In development mode an unreadable file is replaced by the sample
    /// passages for its year; in production the read error is returned.
    pub async fn process_file(&self, path: impl AsRef<Path>) -> DomainResult<Vec<EmbeddedDocument>> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

        match tokio::fs::read_to_string(path).await {
            Ok(text) => self.process(&SourceDocument::new(filename, text)).await,
            Err(e) if self.mode.is_production() => {
                error!(path = %path.display(), error = %e, "cannot read letter in production mode");
                Err(DomainError::Io(e))
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "cannot read letter, using sample passages instead (not authentic letter text)"
                );
                self.embed_chunks(self.sample_chunks(&filename)).await
            }
        }
    }

    /// Stand-in passages for `filename`, tagged with its year.
    pub fn sample_chunks(&self, filename: &str) -> Vec<DocumentChunk> {
        let year = self.extract_year(filename);
        debug!(filename, year = %year, "generating sample passages");

        sample_content_for_year(&year)
            .iter()
            .enumerate()
            .map(|(index, content)| DocumentChunk::new(*content, DocumentMetadata::new(filename, &year, index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{l2_norm, MIN_CHUNK_CHARS};
    use crate::infrastructure::vector::DeterministicEmbedder;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct BrokenEmbedder;

    #[async_trait]
    impl Embedder for BrokenEmbedder {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn dimension(&self) -> usize {
            8
        }

        async fn embed(&self, _text: &str) -> DomainResult<crate::domain::models::Embedding> {
            Err(DomainError::EmbeddingFailed("offline".to_string()))
        }
    }

    fn processor() -> DocumentProcessor {
        DocumentProcessor::new(ChunkingConfig::new(200, 40), Arc::new(DeterministicEmbedder::new(16))).unwrap()
    }

    fn letter_text() -> String {
        "Our managers run their businesses with great autonomy and skill.\n".repeat(12)
    }

    #[test]
    fn test_extract_year() {
        let processor = processor();
        assert_eq!(processor.extract_year("berkshire-hathaway-2023.pdf"), "2023");
        assert_eq!(processor.extract_year("letter.pdf"), "unknown");
        assert_eq!(processor.extract_year("19991-2001.txt"), "1999");
        assert_eq!(processor.extract_year("v123.txt"), "unknown");
    }

    #[test]
    fn test_new_rejects_bad_chunking() {
        let result = DocumentProcessor::new(ChunkingConfig::new(100, 100), Arc::new(DeterministicEmbedder::new(4)));
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_chunk_document_metadata() {
        let processor = processor();
        let chunks = processor.chunk_document(&SourceDocument::new("letter-2021.txt", letter_text()));

        assert!(chunks.len() > 1);
        for (index, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.metadata.chunk_index, index);
            assert_eq!(chunk.metadata.year, "2021");
            assert_eq!(chunk.metadata.filename, "letter-2021.txt");
            assert!(chunk.content.chars().count() > MIN_CHUNK_CHARS);
        }
    }

    #[tokio::test]
    async fn test_process_embeds_every_chunk() {
        let processor = processor();
        let document = SourceDocument::new("letter-2022.txt", letter_text());

        let embedded = processor.process(&document).await.unwrap();
        assert_eq!(embedded.len(), processor.chunk_document(&document).len());
        for doc in &embedded {
            assert_eq!(doc.embedding.len(), 16);
            assert!((l2_norm(&doc.embedding) - 1.0).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn test_process_empty_text() {
        let embedded = processor().process(&SourceDocument::new("empty.txt", "")).await.unwrap();
        assert!(embedded.is_empty());
    }

    #[tokio::test]
    async fn test_process_propagates_embedder_failure() {
        let processor = DocumentProcessor::new(ChunkingConfig::default(), Arc::new(BrokenEmbedder)).unwrap();
        let result = processor
            .process(&SourceDocument::new("letter.txt", letter_text()))
            .await;
        assert!(matches!(result, Err(DomainError::EmbeddingFailed(_))));
    }

    #[tokio::test]
    async fn test_process_file_reads_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("berkshire-hathaway-2021.txt");
        std::fs::write(&path, letter_text()).unwrap();

        let embedded = processor().process_file(&path).await.unwrap();
        assert!(!embedded.is_empty());
        assert!(embedded.iter().all(|d| d.chunk.metadata.year == "2021"));
        assert!(embedded.iter().all(|d| d.chunk.metadata.filename == "berkshire-hathaway-2021.txt"));
    }

    #[tokio::test]
    async fn test_process_missing_file_uses_samples_in_development() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("berkshire-hathaway-2023.pdf");

        let embedded = processor().process_file(&path).await.unwrap();
        assert_eq!(embedded.len(), 3);
        assert!(embedded[0].chunk.content.starts_with("To the Shareholders"));
        assert_eq!(embedded[2].chunk.metadata.chunk_index, 2);
        assert_eq!(embedded[0].chunk.metadata.year, "2023");
    }

    #[tokio::test]
    async fn test_process_missing_file_fails_in_production() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("berkshire-hathaway-2023.pdf");

        let result = processor()
            .with_mode(ProcessingMode::Production)
            .process_file(&path)
            .await;
        assert!(matches!(result, Err(DomainError::Io(_))));
    }

    #[test]
    fn test_sample_chunks_default_year() {
        let chunks = processor().sample_chunks("letter.pdf");
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].metadata.year, "unknown");
        assert!(chunks[0].content.starts_with("Cryptocurrency"));
    }
}
