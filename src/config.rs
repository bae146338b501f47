// Application Configuration
// TOML file with a [server] and a [database] section; both are optional

use crate::api::ApiConfig;
use crate::db::{DatabaseConfig, DatabaseType};
use crate::error::DirectoryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const EXAMPLE_HEADER: &str = "\
# CipherDir configuration
#
# [server]    host/port to bind, CORS and OpenAPI document toggles
# [database]  type = \"sqlite\" uses `path`; type = \"postgres\" uses
#             host, port, database, username, password, max_connections
#
# migrations_dir points at the directory holding the postgres/ and sqlite/
# migration folders (default: ./migrations)

";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ApiConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DirectoryError::FileSystemError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write an example configuration file
    pub fn create_example(path: &Path) -> crate::Result<()> {
        let body = toml::to_string_pretty(&Self::default())?;
        fs::write(path, format!("{}{}", EXAMPLE_HEADER, body)).map_err(|e| {
            DirectoryError::FileSystemError {
                path: path.display().to_string(),
                source: e,
            }
        })?;
        Ok(())
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.host.trim().is_empty() {
            crate::dir_bail!("server.host must not be empty");
        }
        if self.database.db_type == DatabaseType::Postgres && self.database.max_connections == Some(0)
        {
            crate::dir_bail!("database.max_connections must be at least 1");
        }
        // Missing connection fields surface here rather than at connect time
        self.database.connection_string()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cipherdir-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.db_type, DatabaseType::Sqlite);
        assert_eq!(config.database.path, Some(PathBuf::from("cipherdir.db")));
    }

    #[test]
    fn test_parse_postgres_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8000

            [database]
            type = "postgres"
            host = "db"
            port = 5432
            database = "ciphersuites"
            username = "cs"
            password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.db_type, DatabaseType::Postgres);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_incomplete_postgres() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            type = "postgres"
            host = "db"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_round_trips() {
        let path = temp_path("example");
        AppConfig::create_example(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# CipherDir configuration"));

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = AppConfig::from_file(Path::new("/nonexistent/cipherdir.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cipherdir.toml"));
    }
}
