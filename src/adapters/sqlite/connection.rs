//! SQLite pools for the letter store.
//!
//! The default store lives at `.letter-rag/letters.db`, which does not exist
//! on a fresh checkout, so the pool creates the file's directory before
//! connecting.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::domain::models::DatabaseConfig;

const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Failed to open letter database: {0}")]
    PoolCreationFailed(#[source] sqlx::Error),
    #[error("Invalid SQLite URL: {0}")]
    InvalidDatabaseUrl(String),
    #[error("Failed to create database directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::from(&DatabaseConfig::default())
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.max_connections.min(1),
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

/// Open a WAL-mode pool on `database_url`, creating the file if needed.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<SqlitePool, ConnectionError> {
    if let Some(dir) = database_path(database_url).and_then(|path| path.parent().map(PathBuf::from)) {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(&dir)
                .map_err(|source| ConnectionError::DirectoryCreationFailed { path: dir.clone(), source })?;
        }
    }

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConnectionError::InvalidDatabaseUrl(database_url.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(30));

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(connect_options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)
}

/// Single-connection in-memory pool; each call yields an isolated database.
pub async fn create_test_pool() -> Result<SqlitePool, ConnectionError> {
    let connect_options = SqliteConnectOptions::from_str(IN_MEMORY_URL)
        .map_err(|_| ConnectionError::InvalidDatabaseUrl(IN_MEMORY_URL.to_string()))?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)
}

/// File path behind a `sqlite:` URL, or `None` for in-memory databases.
fn database_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = rest.split('?').next().unwrap_or(rest);

    (!path.is_empty() && path != ":memory:").then(|| PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path() {
        assert_eq!(
            database_path("sqlite:.letter-rag/letters.db"),
            Some(PathBuf::from(".letter-rag/letters.db"))
        );
        assert_eq!(
            database_path("sqlite:///tmp/letters.db?mode=rwc"),
            Some(PathBuf::from("/tmp/letters.db"))
        );
        assert_eq!(database_path(IN_MEMORY_URL), None);
    }

    #[test]
    fn test_pool_config_follows_database_config() {
        let config = DatabaseConfig {
            max_connections: 8,
            ..Default::default()
        };
        let pool = PoolConfig::from(&config);
        assert_eq!(pool.max_connections, 8);
        assert_eq!(pool.min_connections, 1);
    }

    #[tokio::test]
    async fn test_create_pool_creates_letter_rag_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join(".letter-rag").join("letters.db");
        let url = format!("sqlite:{}", db_path.display());

        let pool = create_pool(&url, &PoolConfig::default()).await.unwrap();
        sqlx::query("SELECT 1").execute(&pool).await.unwrap();

        assert!(db_path.exists());
        pool.close().await;
    }

    #[tokio::test]
    async fn test_create_test_pool() {
        let pool = create_test_pool().await.unwrap();
        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
