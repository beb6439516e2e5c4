//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/boxing-studio/config.toml`).
//! Every section and key is optional; anything missing takes its default.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! shutdown_timeout = 30
//!
//! [database]
//! backend = "sqlite"          # or "memory"
//! path = "./boxing_studio.db"
//!
//! [logging]
//! level = "info"
//! format = "pretty"           # or "json"
//!
//! [security]
//! bcrypt_cost = 12
//!
//! [cors]
//! allowed_origins = ["http://localhost:5173"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::crypto::password::DEFAULT_COST;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boxing-studio")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Read and parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown.
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub backend: StorageBackend,
    /// SQLite file path, used when `url` is not set.
    pub path: String,
    /// Full connection URL; takes precedence over `path`.
    pub url: Option<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            path: "./boxing_studio.db".to_string(),
            url: None,
        }
    }
}

impl DatabaseSettings {
    /// Connection URL: `DATABASE_URL` env var, then `url`, then `path`.
    pub fn connection_url(&self) -> String {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return url;
        }
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_COST,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty or `["*"]` allows any.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.database.backend, StorageBackend::Sqlite);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.security.bcrypt_cost, DEFAULT_COST);
        assert!(cfg.cors.allows_any());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [database]
            backend = "memory"

            [cors]
            allowed_origins = ["http://localhost:5173"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.database.backend, StorageBackend::Memory);
        assert_eq!(cfg.database.path, "./boxing_studio.db");
        assert!(!cfg.cors.allows_any());
        assert_eq!(cfg.listen_address(), "0.0.0.0:8080");
    }

    #[test]
    fn url_overrides_path() {
        let settings = DatabaseSettings {
            url: Some("sqlite::memory:".into()),
            ..DatabaseSettings::default()
        };
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(settings.connection_url(), "sqlite::memory:");
            assert_eq!(
                DatabaseSettings::default().connection_url(),
                "sqlite://./boxing_studio.db?mode=rwc"
            );
        }
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = AppConfig::from_toml("[database]\nbackend = \"mongo\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let cfg = AppConfig::load(file.path()).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "json");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = AppConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("boxing-studio/config.toml"));
    }
}
