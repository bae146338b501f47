// API State Management

use crate::api::config::ApiConfig;
use crate::db::DirectoryDatabase;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Directory data access
    pub db: Arc<DirectoryDatabase>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ApiConfig, db: Arc<DirectoryDatabase>) -> Self {
        Self {
            config: Arc::new(config),
            db,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
