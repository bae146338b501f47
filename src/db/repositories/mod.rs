// Repositories Module
// Re-exports all repository implementations

pub mod cipher_suite_repository;
pub mod rfc_repository;
pub mod search_repository;
pub mod static_page_repository;

pub use cipher_suite_repository::CipherSuiteRepositoryImpl;
pub use rfc_repository::RfcRepositoryImpl;
pub use search_repository::SearchRepositoryImpl;
pub use static_page_repository::StaticPageRepositoryImpl;

use crate::error::DirectoryError;

/// Wrap a sqlx error with what was being attempted
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DirectoryError {
    move |e| DirectoryError::DatabaseError(format!("{}: {}", context, e))
}
