// Error types for CipherDir
//
// Structured library errors using thiserror. HTTP-facing errors live in
// api::models::error and wrap these.

use std::io;
use thiserror::Error;

/// Main error type for CipherDir operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Database operation errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Schema migration failed
    #[error("Migration error ({migration}): {details}")]
    MigrationError { migration: String, details: String },

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        DirectoryError::DatabaseError(err.to_string())
    }
}

impl From<toml::ser::Error> for DirectoryError {
    fn from(err: toml::ser::Error) -> Self {
        DirectoryError::ConfigError {
            message: format!("Failed to serialize configuration: {}", err),
        }
    }
}

/// Helper macro for bailing out with a generic error
#[macro_export]
macro_rules! dir_bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::DirectoryError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::DirectoryError::Other(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message() {
        let err = DirectoryError::DatabaseError("connection refused".to_string());
        assert_eq!(err.to_string(), "Database error: connection refused");
    }

    #[test]
    fn test_migration_error_names_file() {
        let err = DirectoryError::MigrationError {
            migration: "20250101_001_create_directory_tables.sql".to_string(),
            details: "syntax error".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("20250101_001"));
        assert!(msg.contains("syntax error"));
    }

    #[test]
    fn test_error_chain_preserved() {
        use std::error::Error;

        let err = DirectoryError::FileSystemError {
            path: "/etc/cipherdir.toml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.source().is_some());
    }

    #[test]
    fn test_bail_macro() {
        fn fails() -> crate::Result<()> {
            dir_bail!("page {} is gone", 3);
        }

        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "page 3 is gone");
    }
}
