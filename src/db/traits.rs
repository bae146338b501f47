// Database Traits
// Defines repository interfaces for directory queries. All access is read-only.

use crate::db::models::*;
use crate::db::sorting::{CipherSuiteSort, RfcSort};
use async_trait::async_trait;

/// Cipher suite repository trait
#[async_trait]
pub trait CipherSuiteRepository: Send + Sync {
    /// Total number of cipher suites
    async fn count_cipher_suites(&self) -> crate::Result<u64>;

    /// One window of the cipher suite list in the requested order
    async fn list_cipher_suites(
        &self,
        sort: CipherSuiteSort,
        limit: u64,
        offset: u64,
    ) -> crate::Result<Vec<CipherSuite>>;

    /// Cipher suite by name, joined with the long names of its lookup rows
    async fn get_cipher_suite(&self, name: &str) -> crate::Result<Option<CipherSuiteDetailRow>>;

    /// RFCs that define the named cipher suite, ordered by number
    async fn get_defining_rfcs(&self, name: &str) -> crate::Result<Vec<Rfc>>;
}

/// RFC repository trait
#[async_trait]
pub trait RfcRepository: Send + Sync {
    /// Total number of RFCs
    async fn count_rfcs(&self) -> crate::Result<u64>;

    /// One window of the RFC list in the requested order
    async fn list_rfcs(&self, sort: RfcSort, limit: u64, offset: u64) -> crate::Result<Vec<Rfc>>;

    /// RFC by number
    async fn get_rfc(&self, number: i64) -> crate::Result<Option<Rfc>>;

    /// Cipher suites defined by an RFC, ordered by name
    async fn get_defined_cipher_suites(&self, number: i64) -> crate::Result<Vec<CipherSuite>>;

    /// Documents related to an RFC in either direction, ordered by number
    async fn get_related_documents(&self, number: i64) -> crate::Result<Vec<Rfc>>;
}

/// Static page repository trait
#[async_trait]
pub trait StaticPageRepository: Send + Sync {
    /// Static page by slug
    async fn get_static_page(&self, slug: &str) -> crate::Result<Option<StaticPage>>;
}

/// Full-text search repository trait
///
/// Cipher suites match on their name and the long names of their protocol
/// version and four algorithms; RFCs match on their title.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Number of cipher suites matching `term`
    async fn count_cipher_suite_matches(&self, term: &str) -> crate::Result<u64>;

    /// Matching cipher suites ordered by name
    async fn search_cipher_suites(
        &self,
        term: &str,
        limit: u64,
        offset: u64,
    ) -> crate::Result<Vec<CipherSuite>>;

    /// Number of RFCs matching `term`
    async fn count_rfc_matches(&self, term: &str) -> crate::Result<u64>;

    /// Matching RFCs ordered by number
    async fn search_rfcs(&self, term: &str, limit: u64, offset: u64) -> crate::Result<Vec<Rfc>>;
}
