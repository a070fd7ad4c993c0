use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local directory holding config and the default SQLite database
pub const CONFIG_DIR: &str = ".letter-rag";

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "LETTER_RAG_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Database url cannot be empty")]
    EmptyDatabaseUrl,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid embedding dimensions: {0}. Must be at least 1")]
    InvalidDimensions(usize),

    #[error("Invalid default_limit: {0}. Must be at least 1")]
    InvalidDefaultLimit(usize),

    #[error("Invalid chunking configuration: {0}")]
    InvalidChunking(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .letter-rag/config.yaml (project config, created by init)
    /// 3. .letter-rag/local.yaml (project local overrides, optional)
    /// 4. Environment variables (LETTER_RAG_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(".")
    }

    /// Load configuration rooted at `root` instead of the current directory
    pub fn load_from_dir(root: impl AsRef<Path>) -> Result<Config> {
        let dir = root.as_ref().join(CONFIG_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file; environment variables still apply
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Path of the project config file under `root`
    pub fn project_config_path(root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(CONFIG_DIR).join("config.yaml")
    }

    /// Default configuration rendered as YAML, as written by `init`
    pub fn default_yaml() -> Result<String> {
        serde_yaml::to_string(&Config::default()).context("Failed to serialize default configuration")
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(config.database.max_connections));
        }

        if config.embedding.dimensions == 0 {
            return Err(ConfigError::InvalidDimensions(config.embedding.dimensions));
        }

        config.chunking.validate().map_err(ConfigError::InvalidChunking)?;

        if config.retrieval.default_limit == 0 {
            return Err(ConfigError::InvalidDefaultLimit(config.retrieval.default_limit));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::{EmbeddingProviderKind, LogFormat, ProcessingMode};
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_project_file(root: &TempDir, name: &str, contents: &str) {
        let dir = root.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.url, "sqlite:.letter-rag/letters.db");
        assert_eq!(config.embedding.dimensions, 1536);
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 200);
        assert_eq!(config.retrieval.default_limit, 5);
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
mode: production
database:
  url: postgres://localhost/letters
  max_connections: 3
embedding:
  provider: deterministic
  dimensions: 64
chunking:
  chunk_size: 500
  chunk_overlap: 50
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.mode, ProcessingMode::Production);
        assert_eq!(config.database.url, "postgres://localhost/letters");
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.embedding.provider, EmbeddingProviderKind::Deterministic);
        assert_eq!(config.embedding.dimensions, 64);
        assert_eq!(config.embedding.model, "text-embedding-ada-002");
        assert_eq!(config.chunking.chunk_size, 500);
        assert_eq!(config.logging.format, LogFormat::Json);

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_empty_database_url() {
        let mut config = Config::default();
        config.database.url = "  ".to_string();
        assert!(matches!(ConfigLoader::validate(&config), Err(ConfigError::EmptyDatabaseUrl)));
    }

    #[test]
    fn test_validate_zero_max_connections() {
        let mut config = Config::default();
        config.database.max_connections = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidMaxConnections(0))
        ));
    }

    #[test]
    fn test_validate_zero_dimensions() {
        let mut config = Config::default();
        config.embedding.dimensions = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDimensions(0))
        ));
    }

    #[test]
    fn test_validate_overlap_not_below_size() {
        let mut config = Config::default();
        config.chunking.chunk_overlap = config.chunking.chunk_size;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidChunking(_))
        ));
    }

    #[test]
    fn test_validate_zero_default_limit() {
        let mut config = Config::default();
        config.retrieval.default_limit = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDefaultLimit(0))
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "verbose"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_dir_without_files_uses_defaults() {
        let root = TempDir::new().unwrap();
        let config = temp_env::with_vars_unset(["LETTER_RAG_DATABASE__URL", "LETTER_RAG_LOGGING__LEVEL"], || {
            ConfigLoader::load_from_dir(root.path()).unwrap()
        });
        assert_eq!(config.database.url, "sqlite:.letter-rag/letters.db");
    }

    #[test]
    fn test_local_overrides_project_config() {
        let root = TempDir::new().unwrap();
        write_project_file(&root, "config.yaml", "logging:\n  level: warn\n  format: json\n");
        write_project_file(&root, "local.yaml", "logging:\n  level: debug\n");

        let config = temp_env::with_var_unset("LETTER_RAG_LOGGING__LEVEL", || {
            ConfigLoader::load_from_dir(root.path()).unwrap()
        });

        assert_eq!(config.logging.level, "debug", "Local file should win");
        assert_eq!(
            config.logging.format,
            LogFormat::Json,
            "Project value should persist when not overridden"
        );
    }

    #[test]
    fn test_env_overrides_files() {
        let root = TempDir::new().unwrap();
        write_project_file(&root, "config.yaml", "database:\n  url: sqlite:from-file.db\n");

        let config = temp_env::with_vars(
            [
                ("LETTER_RAG_DATABASE__URL", Some("memory")),
                ("LETTER_RAG_RETRIEVAL__DEFAULT_LIMIT", Some("9")),
            ],
            || ConfigLoader::load_from_dir(root.path()).unwrap(),
        );

        assert_eq!(config.database.url, "memory");
        assert_eq!(config.retrieval.default_limit, 9);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "embedding:\n  provider: deterministic\n  dimensions: 32").unwrap();
        file.flush().unwrap();

        let config = temp_env::with_var_unset("LETTER_RAG_EMBEDDING__DIMENSIONS", || {
            ConfigLoader::load_from_file(file.path()).unwrap()
        });
        assert_eq!(config.embedding.provider, EmbeddingProviderKind::Deterministic);
        assert_eq!(config.embedding.dimensions, 32);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let root = TempDir::new().unwrap();
        assert!(ConfigLoader::load_from_file(root.path().join("nope.yaml")).is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let root = TempDir::new().unwrap();
        write_project_file(&root, "config.yaml", "chunking:\n  chunk_size: 100\n  chunk_overlap: 100\n");
        assert!(ConfigLoader::load_from_dir(root.path()).is_err());
    }

    #[test]
    fn test_default_yaml_round_trips() {
        let yaml = ConfigLoader::default_yaml().unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.database.url, Config::default().database.url);
        assert_eq!(parsed.chunking, Config::default().chunking);
    }
}
