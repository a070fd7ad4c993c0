pub mod document_processor;
pub mod retrieval_service;
pub mod samples;
pub mod search_tool;

pub use document_processor::DocumentProcessor;
pub use retrieval_service::RetrievalService;
pub use samples::{sample_content_for_year, sample_letters};
pub use search_tool::{SearchToolInput, SearchToolOutput, ToolResult, VectorSearchTool};
