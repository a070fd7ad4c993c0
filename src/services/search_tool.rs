//! Agent-facing vector search tool
//!
//! Wraps [`RetrievalService`] in the request/response shape an LLM agent
//! calls: a query with optional limit and year, answered with formatted
//! passages and a one-line summary.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::domain::models::SearchResult;
use crate::services::retrieval_service::RetrievalService;

/// Tool identifier exposed to agents
pub const TOOL_ID: &str = "vector-search";

/// Tool description exposed to agents
pub const TOOL_DESCRIPTION: &str = "Search through Berkshire Hathaway shareholder letters using semantic similarity";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchToolInput {
    /// Natural-language question about the letters
    pub query: String,

    /// Number of passages to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Only return passages from this year, e.g. `"2023"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_filter: Option<String>,
}

impl SearchToolInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            year_filter: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    pub year: String,
    /// Source file name
    pub document: String,
    /// One-based passage position within the document
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: String,
    pub metadata: ToolResultMetadata,
    pub similarity_score: f64,
}

impl From<SearchResult> for ToolResult {
    fn from(result: SearchResult) -> Self {
        Self {
            content: result.content,
            metadata: ToolResultMetadata {
                year: result.metadata.year,
                document: result.metadata.filename,
                page: result.metadata.chunk_index + 1,
            },
            similarity_score: result.similarity_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchToolOutput {
    pub results: Vec<ToolResult>,
    pub summary: String,
}

pub struct VectorSearchTool {
    retrieval: Arc<RetrievalService>,
}

impl VectorSearchTool {
    pub const fn new(retrieval: Arc<RetrievalService>) -> Self {
        Self { retrieval }
    }

    /// Run a search. Failures are reported in the summary, never as an error.
    pub async fn execute(&self, input: SearchToolInput) -> SearchToolOutput {
        let year = input.year_filter.as_deref().filter(|y| !y.is_empty());

        match self.retrieval.try_search_similar(&input.query, input.limit, year).await {
            Ok(results) => {
                let summary = format!(
                    "Found {} relevant passages about \"{}\" in Berkshire Hathaway shareholder letters{}.",
                    results.len(),
                    input.query,
                    year.map(|y| format!(" from {y}")).unwrap_or_default()
                );
                SearchToolOutput {
                    results: results.into_iter().map(ToolResult::from).collect(),
                    summary,
                }
            }
            Err(e) => {
                error!(query = %input.query, error = %e, "vector search failed");
                SearchToolOutput {
                    results: Vec::new(),
                    summary: format!(
                        "Error searching for \"{}\". Please make sure documents are loaded in the database.",
                        input.query
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentStore;
    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::models::{DocumentChunk, DocumentMetadata};
    use crate::domain::ports::{DocumentStore, NewDocumentRow, SimilarityQuery, StoredMatch};
    use crate::infrastructure::vector::DeterministicEmbedder;
    use async_trait::async_trait;

    struct UnreachableStore;

    #[async_trait]
    impl DocumentStore for UnreachableStore {
        async fn ensure_schema(&self) -> DomainResult<()> {
            Ok(())
        }

        async fn insert(&self, _row: &NewDocumentRow) -> DomainResult<i64> {
            Err(DomainError::StoreFailed("down".to_string()))
        }

        async fn query_similar(&self, _query: &SimilarityQuery) -> DomainResult<Vec<StoredMatch>> {
            Err(DomainError::StoreFailed("down".to_string()))
        }

        async fn count(&self) -> DomainResult<u64> {
            Err(DomainError::StoreFailed("down".to_string()))
        }
    }

    async fn loaded_tool() -> VectorSearchTool {
        let retrieval = RetrievalService::new(
            Arc::new(DeterministicEmbedder::new(32)),
            Arc::new(InMemoryDocumentStore::new()),
        );
        for (index, year) in ["2021", "2022", "2022"].iter().enumerate() {
            let chunk = DocumentChunk::new(
                format!("Passage {index} from {year}"),
                DocumentMetadata::new(format!("berkshire-hathaway-{year}.pdf"), *year, index),
            );
            retrieval.insert_document(&chunk).await.unwrap();
        }
        VectorSearchTool::new(Arc::new(retrieval))
    }

    #[tokio::test]
    async fn test_execute_formats_results() {
        let tool = loaded_tool().await;
        let output = tool
            .execute(SearchToolInput {
                query: "insurance float".to_string(),
                limit: Some(2),
                year_filter: Some("2022".to_string()),
            })
            .await;

        assert_eq!(output.results.len(), 2);
        assert_eq!(
            output.summary,
            "Found 2 relevant passages about \"insurance float\" in Berkshire Hathaway shareholder letters from 2022."
        );
        for result in &output.results {
            assert_eq!(result.metadata.year, "2022");
            assert_eq!(result.metadata.document, "berkshire-hathaway-2022.pdf");
            assert!(result.metadata.page == 2 || result.metadata.page == 3);
        }
    }

    #[tokio::test]
    async fn test_execute_without_year() {
        let output = loaded_tool().await.execute(SearchToolInput::new("moats")).await;
        assert_eq!(output.results.len(), 3);
        assert_eq!(
            output.summary,
            "Found 3 relevant passages about \"moats\" in Berkshire Hathaway shareholder letters."
        );
    }

    #[tokio::test]
    async fn test_execute_reports_failure_in_summary() {
        let retrieval = RetrievalService::new(Arc::new(DeterministicEmbedder::new(8)), Arc::new(UnreachableStore));
        let output = VectorSearchTool::new(Arc::new(retrieval))
            .execute(SearchToolInput::new("moats"))
            .await;

        assert!(output.results.is_empty());
        assert_eq!(
            output.summary,
            "Error searching for \"moats\". Please make sure documents are loaded in the database."
        );
    }

    #[tokio::test]
    async fn test_empty_year_filter_searches_all_years() {
        let output = loaded_tool()
            .await
            .execute(SearchToolInput {
                query: "q".to_string(),
                limit: None,
                year_filter: Some(String::new()),
            })
            .await;

        assert_eq!(output.results.len(), 3);
        assert_eq!(
            output.summary,
            "Found 3 relevant passages about \"q\" in Berkshire Hathaway shareholder letters."
        );
    }

    #[test]
    fn test_input_deserializes_with_defaults() {
        let input: SearchToolInput = serde_json::from_str(r#"{"query": "buybacks"}"#).unwrap();
        assert_eq!(input, SearchToolInput::new("buybacks"));
    }
}
