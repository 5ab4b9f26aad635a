//! Service configuration
//!
//! Resolution order: built-in defaults, then the optional JSON file, then
//! environment variables. The result is validated before use.
//!
//! | variable       | key                |
//! |----------------|--------------------|
//! | `API_HOST`     | `server.host`      |
//! | `API_PORT`     | `server.port`      |
//! | `MONGODB_URI`  | `mongodb.uri`      |
//! | `MONGODB_HOST` | `mongodb.host`     |
//! | `MONGODB_USER` | `mongodb.user`     |
//! | `MONGODB_PASS` | `mongodb.password` |
//! | `MONGODB_DB`   | `mongodb.database` |
//! | `LOG_LEVEL`    | `logging.level`    |
//! | `LOG_FORMAT`   | `logging.format`   |

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::{LogFormat, LoggingConfig};
use crate::sink::MongoConfig;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub mongodb: MongoConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from `path` (if any) and the process environment, then validate
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Read a JSON configuration file without applying overrides
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Apply overrides from `lookup`. Empty values count as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(host) = get("API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("API_PORT") {
            self.server.port = port
                .parse::<u16>()
                .map_err(|e| CliError::config_error(format!("Invalid API_PORT '{}': {}", port, e)))?;
        }

        if let Some(uri) = get("MONGODB_URI") {
            self.mongodb.uri = Some(uri);
        }
        if let Some(host) = get("MONGODB_HOST") {
            self.mongodb.host = host;
        }
        if let Some(user) = get("MONGODB_USER") {
            self.mongodb.user = user;
        }
        if let Some(password) = get("MONGODB_PASS") {
            self.mongodb.password = password;
        }
        if let Some(database) = get("MONGODB_DB") {
            self.mongodb.database = database;
        }

        if let Some(level) = get("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.logging.format = format
                .parse::<LogFormat>()
                .map_err(|e| {
                    CliError::config_error(format!("Invalid LOG_FORMAT: {}", e.message()))
                })?;
        }

        Ok(())
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.server.max_body_bytes == 0 {
            return Err(CliError::config_error("server.max_body_bytes must be > 0"));
        }

        if self.mongodb.database.is_empty() {
            return Err(CliError::config_error("mongodb.database must not be empty"));
        }

        if self.mongodb.collection.is_empty() {
            return Err(CliError::config_error("mongodb.collection must not be empty"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(CliError::config_error("logging.level must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.mongodb.collection, "events");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("API_PORT", "9000"),
                ("MONGODB_HOST", "mongo:27017"),
                ("MONGODB_USER", "ingest"),
                ("MONGODB_PASS", "pw"),
                ("MONGODB_DB", "tracking"),
                ("LOG_FORMAT", "pretty"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.mongodb.database, "tracking");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(
            config.mongodb.connection_uri(),
            "mongodb://ingest:pw@mongo:27017/tracking?authSource=admin"
        );
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"server": {"port": 7000}, "mongodb": {"database": "ads"}}"#,
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.mongodb.database, "ads");
        assert_eq!(config.mongodb.collection, "events");
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{ port: 1 }").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.message().starts_with("Invalid config JSON"));
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("MONGODB_DB", "")])).unwrap();
        assert_eq!(config.mongodb.database, "events");
    }

    #[test]
    fn test_bad_port_rejected() {
        let mut config = Config::default();
        let err = config.apply_overrides(env(&[("API_PORT", "http")])).unwrap_err();
        assert!(err.message().contains("API_PORT"));
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let mut config = Config::default();
        assert!(config.apply_overrides(env(&[("LOG_FORMAT", "xml")])).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_collection() {
        let mut config = Config::default();
        config.mongodb.collection = String::new();
        assert!(config.validate().is_err());
    }
}
