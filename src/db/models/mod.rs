// Database Models Module
// Re-exports all database model types

pub mod cipher_suite;
pub mod rfc;
pub mod static_page;
pub mod technology;

pub use cipher_suite::{CipherSuite, CipherSuiteDetailRow, CIPHER_SUITE_COLUMNS};
pub use rfc::{Rfc, RfcStatus, UnknownRfcStatus, RFC_COLUMNS};
pub use static_page::{StaticPage, ABOUT_PAGE_SLUG};
pub use technology::{RelatedTechnology, Technology, TechnologyKind};
