// Database Module
// Read-only data access layer for the cipher suite directory

pub mod config;
pub mod connection;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod sorting;
pub mod traits;

// Re-exports
pub use config::{DatabaseConfig, DatabaseType};
pub use connection::DatabasePool;
pub use migrations::run_migrations;
pub use models::*;
pub use sorting::{CipherSuiteSort, RfcSort, SortDirection};
pub use traits::*;

use repositories::{
    CipherSuiteRepositoryImpl, RfcRepositoryImpl, SearchRepositoryImpl, StaticPageRepositoryImpl,
};
use std::sync::Arc;
use tracing::info;

/// Main database struct
pub struct DirectoryDatabase {
    pool: DatabasePool,
    cipher_suites: Arc<dyn CipherSuiteRepository>,
    rfcs: Arc<dyn RfcRepository>,
    static_pages: Arc<dyn StaticPageRepository>,
    search: Arc<dyn SearchRepository>,
}

impl DirectoryDatabase {
    /// Connect and bring the schema up to date
    pub async fn new(config: &DatabaseConfig) -> crate::Result<Self> {
        let pool = DatabasePool::new(config).await?;
        info!("Connected to {:?} database", pool.db_type());

        run_migrations(&pool, &config.migrations_path()).await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool without running migrations
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self {
            cipher_suites: Arc::new(CipherSuiteRepositoryImpl::new(pool.clone())),
            rfcs: Arc::new(RfcRepositoryImpl::new(pool.clone())),
            static_pages: Arc::new(StaticPageRepositoryImpl::new(pool.clone())),
            search: Arc::new(SearchRepositoryImpl::new(pool.clone())),
            pool,
        }
    }

    /// Get database pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    pub fn cipher_suites(&self) -> &dyn CipherSuiteRepository {
        self.cipher_suites.as_ref()
    }

    pub fn rfcs(&self) -> &dyn RfcRepository {
        self.rfcs.as_ref()
    }

    pub fn static_pages(&self) -> &dyn StaticPageRepository {
        self.static_pages.as_ref()
    }

    pub fn search(&self) -> &dyn SearchRepository {
        self.search.as_ref()
    }

    /// Close database connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
