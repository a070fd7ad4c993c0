//! Domain errors for the letter retrieval pipeline.

use thiserror::Error;

/// Domain-level errors that can occur while chunking, embedding, or retrieving.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Embedding failed: {0}")]
    EmbeddingFailed(String),

    #[error("Document store error: {0}")]
    StoreFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::StoreFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::StoreFailed("connection refused".to_string());
        assert_eq!(err.to_string(), "Document store error: connection refused");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: DomainError = parse.unwrap_err().into();
        assert!(matches!(err, DomainError::SerializationError(_)));
    }

    #[test]
    fn test_from_sqlx() {
        let err: DomainError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DomainError::StoreFailed(_)));
    }
}
