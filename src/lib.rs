// CipherDir - A directory of TLS cipher suites and the RFCs that define them
// Licensed under GPL-3.0

//! CipherDir serves a read-only directory of TLS cipher suites and RFCs.
//! It provides sorted, paginated listings, detail pages with cross-links
//! between suites, algorithms and documents, and text search over both.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::config::AppConfig;
pub use crate::error::DirectoryError;

/// Result type for CipherDir operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
