// Database Configuration
// Handles PostgreSQL and SQLite database configuration

use crate::error::DirectoryError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the migration scripts, relative to the working directory
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Database type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Postgres,
    Sqlite,
}

impl DatabaseType {
    /// Subdirectory holding this dialect's migration scripts
    pub fn migrations_subdir(&self) -> &'static str {
        match self {
            DatabaseType::Postgres => "postgres",
            DatabaseType::Sqlite => "sqlite",
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: DatabaseType,

    // PostgreSQL settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    // SQLite settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Root of the migration scripts (one subdirectory per database type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrations_dir: Option<PathBuf>,
}

impl DatabaseConfig {
    /// Create PostgreSQL configuration
    pub fn postgres(
        host: String,
        port: u16,
        database: String,
        username: String,
        password: String,
    ) -> Self {
        Self {
            db_type: DatabaseType::Postgres,
            host: Some(host),
            port: Some(port),
            database: Some(database),
            username: Some(username),
            password: Some(password),
            max_connections: Some(10),
            path: None,
            migrations_dir: None,
        }
    }

    /// Create SQLite configuration
    pub fn sqlite(path: PathBuf) -> Self {
        Self {
            db_type: DatabaseType::Sqlite,
            host: None,
            port: None,
            database: None,
            username: None,
            password: None,
            max_connections: None,
            path: Some(path),
            migrations_dir: None,
        }
    }

    /// Use a non-default migrations root
    pub fn with_migrations_dir(mut self, dir: PathBuf) -> Self {
        self.migrations_dir = Some(dir);
        self
    }

    /// Directory containing the migration scripts for the configured dialect
    pub fn migrations_path(&self) -> PathBuf {
        self.migrations_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_MIGRATIONS_DIR))
            .join(self.db_type.migrations_subdir())
    }

    /// Generate database URL for sqlx
    pub fn connection_string(&self) -> crate::Result<String> {
        match self.db_type {
            DatabaseType::Postgres => {
                let host = self
                    .host
                    .as_ref()
                    .ok_or_else(|| missing_setting("PostgreSQL host"))?;
                let port = self.port.ok_or_else(|| missing_setting("PostgreSQL port"))?;
                let database = self
                    .database
                    .as_ref()
                    .ok_or_else(|| missing_setting("database name"))?;
                let username = self
                    .username
                    .as_ref()
                    .ok_or_else(|| missing_setting("username"))?;
                let password = self
                    .password
                    .as_ref()
                    .ok_or_else(|| missing_setting("password"))?;

                Ok(format!(
                    "postgres://{}:{}@{}:{}/{}",
                    username, password, host, port, database
                ))
            }
            DatabaseType::Sqlite => {
                let path = self
                    .path
                    .as_ref()
                    .ok_or_else(|| missing_setting("SQLite path"))?;

                let path_str = path.to_string_lossy();
                if path_str == ":memory:" {
                    Ok(format!("sqlite:{}", path_str))
                } else if path_str.starts_with('/') {
                    // Absolute UNIX path already supplies the leading slash
                    Ok(format!("sqlite://{}", path.display()))
                } else if cfg!(windows) && path_str.len() > 1 && path_str.as_bytes()[1] == b':' {
                    Ok(format!("sqlite:///{}", path.display()))
                } else {
                    Ok(format!("sqlite:{}", path.display()))
                }
            }
        }
    }
}

fn missing_setting(what: &str) -> DirectoryError {
    DirectoryError::ConfigError {
        message: format!("Missing {}", what),
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::sqlite(PathBuf::from("cipherdir.db"))
    }
}
