//! Configuration for diary-rs
//!
//! Values come from built-in defaults, an optional TOML file and
//! `DIARY__SECTION__KEY` environment variables, in that order of precedence.

use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum length of a search query, in characters.
pub const DEFAULT_MAX_QUERY_LEN: usize = 100;

const ENV_PREFIX: &str = "DIARY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1:8080")
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// SQLite connection URL
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// One of "pretty", "compact" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_max_query_len() -> usize {
    DEFAULT_MAX_QUERY_LEN
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_len: default_max_query_len(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Layer defaults, the TOML file at `path` (if it exists) and the
    /// environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .map_err(|e| DiaryError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DiaryError::Config(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| DiaryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.listen_addr.trim().is_empty() {
            return Err(DiaryError::Config("server.listen_addr is empty".to_string()));
        }
        if self.storage.database_url.trim().is_empty() {
            return Err(DiaryError::Config("storage.database_url is empty".to_string()));
        }
        if self.search.max_query_len == 0 {
            return Err(DiaryError::Config(
                "search.max_query_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:8080".to_string(),
            },
            storage: StorageConfig {
                database_url: "sqlite://diary.db?mode=rwc".to_string(),
            },
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.search.max_query_len, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
listen_addr = "0.0.0.0:3000"

[storage]
database_url = "sqlite::memory:"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.search.max_query_len, DEFAULT_MAX_QUERY_LEN);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nlisten_addr = \"127.0.0.1:9000\"\n\n[storage]\ndatabase_url = \"sqlite://test.db\"\n\n[search]\nmax_query_len = 50\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.search.max_query_len, 50);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.toml");
        std::fs::write(&path, "[server\nlisten_addr = ").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(DiaryError::Config(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.toml");
        std::fs::write(&path, "[search]\nmax_query_len = 0\n").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(DiaryError::Config(_))));
    }

    #[test]
    fn test_load_layers_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.search.max_query_len, DEFAULT_MAX_QUERY_LEN);
    }

    #[test]
    fn test_validate_rejects_zero_query_len() {
        let mut config = Config::default();
        config.search.max_query_len = 0;
        assert!(config.validate().is_err());
    }
}
