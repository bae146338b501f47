// Database Migrations
// Applies the schema scripts for PostgreSQL (sqlx Migrator) and SQLite (manual)

use crate::db::connection::DatabasePool;
use crate::error::DirectoryError;
use sqlx::migrate::Migrator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Run database migrations found in `migrations_path`
pub async fn run_migrations(pool: &DatabasePool, migrations_path: &Path) -> crate::Result<()> {
    if !migrations_path.exists() {
        return Err(DirectoryError::MigrationError {
            migration: migrations_path.display().to_string(),
            details: "Migrations directory not found".to_string(),
        });
    }

    match pool {
        DatabasePool::Postgres(pg_pool) => {
            let migrator = Migrator::new(migrations_path).await.map_err(|e| {
                DirectoryError::MigrationError {
                    migration: migrations_path.display().to_string(),
                    details: format!("Failed to create migrator: {}", e),
                }
            })?;

            migrator
                .run(pg_pool)
                .await
                .map_err(|e| DirectoryError::MigrationError {
                    migration: migrations_path.display().to_string(),
                    details: format!("PostgreSQL migration failed: {}", e),
                })?;
        }
        DatabasePool::Sqlite(sqlite_pool) => {
            run_sqlite_migrations_manual(sqlite_pool, migrations_path).await?;
        }
    }

    info!("Database schema is up to date");
    Ok(())
}

/// Sorted list of `.sql` files in a migrations directory
fn migration_files(migrations_path: &Path) -> crate::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(migrations_path).map_err(|e| DirectoryError::FileSystemError {
        path: migrations_path.display().to_string(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "sql") {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Extract the numeric version from a migration filename
/// (e.g. "20250101_001_create_directory_tables.sql" -> 20250101001)
fn migration_version(filename: &str) -> Option<i64> {
    filename
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '_')
        .filter(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .ok()
}

/// Split a migration script into executable statements, dropping comment lines
fn split_statements(sql: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Manually run SQLite migrations by executing SQL files directly
async fn run_sqlite_migrations_manual(
    pool: &sqlx::SqlitePool,
    migrations_path: &Path,
) -> crate::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _directory_migrations (
            version BIGINT PRIMARY KEY,
            description TEXT NOT NULL,
            installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| {
        DirectoryError::DatabaseError(format!("Failed to create migrations table: {}", e))
    })?;

    for migration_file in migration_files(migrations_path)? {
        let filename = migration_file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| DirectoryError::MigrationError {
                migration: migration_file.display().to_string(),
                details: "Invalid migration filename".to_string(),
            })?
            .to_string();

        let version = migration_version(&filename).ok_or_else(|| {
            DirectoryError::MigrationError {
                migration: filename.clone(),
                details: "Failed to parse migration version".to_string(),
            }
        })?;

        let already_run: bool =
            sqlx::query_scalar("SELECT COUNT(*) > 0 FROM _directory_migrations WHERE version = ?")
                .bind(version)
                .fetch_one(pool)
                .await
                .map_err(|e| {
                    DirectoryError::DatabaseError(format!(
                        "Failed to check migration status: {}",
                        e
                    ))
                })?;

        if already_run {
            debug!("Skipping applied migration {}", filename);
            continue;
        }

        let sql_content =
            fs::read_to_string(&migration_file).map_err(|e| DirectoryError::FileSystemError {
                path: migration_file.display().to_string(),
                source: e,
            })?;

        for statement in split_statements(&sql_content) {
            sqlx::query(&statement)
                .execute(pool)
                .await
                .map_err(|e| DirectoryError::MigrationError {
                    migration: filename.clone(),
                    details: e.to_string(),
                })?;
        }

        sqlx::query("INSERT INTO _directory_migrations (version, description) VALUES (?, ?)")
            .bind(version)
            .bind(&filename)
            .execute(pool)
            .await
            .map_err(|e| {
                DirectoryError::DatabaseError(format!(
                    "Failed to record migration {}: {}",
                    filename, e
                ))
            })?;

        info!("Applied migration {}", filename);
    }

    Ok(())
}
