// Database Connection Pool
// Manages PostgreSQL and SQLite connection pools with sqlx

use crate::db::config::{DatabaseConfig, DatabaseType};
use crate::error::DirectoryError;
use sqlx::{Pool, Postgres, Sqlite};
use std::str::FromStr;
use std::time::Duration;

/// QueryBuilder that handles placeholder syntax differences between databases.
/// PostgreSQL uses $1, $2, $3... while SQLite uses ?, ?, ?...
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    db_type: DatabaseType,
    param_count: usize,
}

impl QueryBuilder {
    /// Create a new query builder for the given database type
    pub fn new(db_type: DatabaseType) -> Self {
        Self {
            db_type,
            param_count: 0,
        }
    }

    /// Get the next placeholder for the current database type
    pub fn placeholder(&mut self) -> String {
        self.param_count += 1;
        match self.db_type {
            DatabaseType::Postgres => format!("${}", self.param_count),
            DatabaseType::Sqlite => "?".to_string(),
        }
    }

    /// Number of placeholders handed out so far
    pub fn param_count(&self) -> usize {
        self.param_count
    }

    /// Append `LIMIT`/`OFFSET` placeholders to a query
    pub fn limit_offset(&mut self, sql: &str) -> String {
        let limit = self.placeholder();
        let offset = self.placeholder();
        format!("{} LIMIT {} OFFSET {}", sql, limit, offset)
    }
}

/// Database pool enum supporting both PostgreSQL and SQLite
#[derive(Clone)]
pub enum DatabasePool {
    Postgres(Pool<Postgres>),
    Sqlite(Pool<Sqlite>),
}

impl DatabasePool {
    /// Create a new database pool from configuration
    pub async fn new(config: &DatabaseConfig) -> crate::Result<Self> {
        let pool = match config.db_type {
            DatabaseType::Postgres => {
                let connection_string = config.connection_string()?;
                let max_connections = config.max_connections.unwrap_or(10);

                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(Duration::from_secs(30))
                    .connect(&connection_string)
                    .await
                    .map_err(|e| {
                        DirectoryError::DatabaseError(format!(
                            "PostgreSQL connection failed: {}",
                            e
                        ))
                    })?;

                DatabasePool::Postgres(pool)
            }
            DatabaseType::Sqlite => {
                let connection_string = config.connection_string()?;

                let connect_options = sqlx::sqlite::SqliteConnectOptions::from_str(
                    &connection_string,
                )
                .map_err(|e| {
                    DirectoryError::DatabaseError(format!(
                        "Failed to parse SQLite connection string: {}",
                        e
                    ))
                })?
                .create_if_missing(true)
                .foreign_keys(true);

                // The directory is read-mostly, but an in-memory database only
                // exists on the connection that created it.
                let max_connections = config.max_connections.unwrap_or(4);
                let max_connections = if connection_string.contains(":memory:") {
                    1
                } else {
                    max_connections
                };

                let pool = sqlx::sqlite::SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(Duration::from_secs(30))
                    .connect_with(connect_options)
                    .await
                    .map_err(|e| {
                        DirectoryError::DatabaseError(format!("SQLite connection failed: {}", e))
                    })?;

                DatabasePool::Sqlite(pool)
            }
        };

        Ok(pool)
    }

    /// Get database type
    pub fn db_type(&self) -> DatabaseType {
        match self {
            DatabasePool::Postgres(_) => DatabaseType::Postgres,
            DatabasePool::Sqlite(_) => DatabaseType::Sqlite,
        }
    }

    /// Close the connection pool
    pub async fn close(&self) {
        match self {
            DatabasePool::Postgres(pool) => pool.close().await,
            DatabasePool::Sqlite(pool) => pool.close().await,
        }
    }

    /// Create a QueryBuilder for this pool's database type
    pub fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new(self.db_type())
    }

    /// Check connectivity with a trivial query
    pub async fn ping(&self) -> crate::Result<()> {
        match self {
            DatabasePool::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await.map_err(|e| {
                    DirectoryError::DatabaseError(format!("Database health check failed: {}", e))
                })?;
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await.map_err(|e| {
                    DirectoryError::DatabaseError(format!("Database health check failed: {}", e))
                })?;
            }
        }
        Ok(())
    }
}
