// API Response Models
//
// Each page handler answers with the context its template would be rendered with.
// Field names are the template variable names.

use crate::api::models::request::SearchCategory;
use crate::db::models::{CipherSuite, RelatedTechnology, Rfc, StaticPage};
use crate::utils::pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Navbar section shared by the cipher suite pages
pub const NAVBAR_CIPHER_SUITES: &str = "cs";

/// Navbar section shared by the RFC pages
pub const NAVBAR_RFCS: &str = "rfc";

/// Landing page context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexContext {
    /// The landing page carries its own search box
    pub hide_navbar_search: bool,
}

impl Default for IndexContext {
    fn default() -> Self {
        Self {
            hide_navbar_search: true,
        }
    }
}

/// Static page context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaticPageContext {
    pub navbar_context: String,
    pub static_page: StaticPage,
}

impl From<StaticPage> for StaticPageContext {
    fn from(static_page: StaticPage) -> Self {
        Self {
            navbar_context: static_page.title.clone(),
            static_page,
        }
    }
}

/// Cipher suite list context
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CipherSuiteListContext {
    #[schema(value_type = crate::utils::pagination::CipherSuitePage)]
    pub cipher_suites: Page<CipherSuite>,
    pub navbar_context: String,
    pub page_number_range: Vec<u64>,
    /// Effective sort token
    #[schema(example = "name-asc")]
    pub sort: String,
}

impl CipherSuiteListContext {
    pub fn new(cipher_suites: Page<CipherSuite>, sort: String) -> Self {
        Self {
            page_number_range: cipher_suites.page_range(),
            cipher_suites,
            navbar_context: NAVBAR_CIPHER_SUITES.to_string(),
            sort,
        }
    }
}

/// RFC list context
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RfcListContext {
    #[schema(value_type = crate::utils::pagination::RfcPage)]
    pub rfc_list_paginated: Page<Rfc>,
    pub navbar_context: String,
    pub page_number_range: Vec<u64>,
    /// Effective sort token
    #[schema(example = "number-asc")]
    pub sort: String,
}

impl RfcListContext {
    pub fn new(rfc_list_paginated: Page<Rfc>, sort: String) -> Self {
        Self {
            page_number_range: rfc_list_paginated.page_range(),
            rfc_list_paginated,
            navbar_context: NAVBAR_RFCS.to_string(),
            sort,
        }
    }
}

/// Cipher suite detail context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CipherSuiteDetailContext {
    pub cipher_suite: CipherSuite,
    /// Code point, e.g. "0x13,0x01"
    pub hex_code: String,
    pub navbar_context: String,
    pub prev_page: Option<String>,
    /// RFCs defining this suite
    pub referring_rfc_list: Vec<Rfc>,
    /// Protocol version, kex, auth, enc and hash rows in that order
    pub related_tech: Vec<RelatedTechnology>,
}

/// RFC detail context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RfcDetailContext {
    pub rfc: Rfc,
    pub url: String,
    pub navbar_context: String,
    pub prev_page: Option<String>,
    /// Human readable status, e.g. "Proposed Standard"
    pub rfc_status_code: String,
    pub defined_cipher_suites: Vec<CipherSuite>,
    pub related_docs: Vec<Rfc>,
}

/// The page of the active search category
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchResultPage {
    CipherSuites(Page<CipherSuite>),
    Rfcs(Page<Rfc>),
}

impl SearchResultPage {
    pub fn page_range(&self) -> Vec<u64> {
        match self {
            SearchResultPage::CipherSuites(page) => page.page_range(),
            SearchResultPage::Rfcs(page) => page.page_range(),
        }
    }
}

/// Search context
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchContext {
    /// Tab to highlight, same as `category`
    pub active_tab: SearchCategory,
    pub category: SearchCategory,
    /// Request path and query string
    #[schema(example = "/search?q=aes&c=cs")]
    pub full_path: String,
    pub page_number_range: Vec<u64>,
    /// Cipher suites matching, across all pages
    pub result_count_cs: u64,
    /// RFCs matching, across all pages
    pub result_count_rfc: u64,
    /// Page of cipher suites or RFCs depending on `category`
    #[schema(value_type = Object)]
    pub search_result_list: SearchResultPage,
    pub search_term: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Uptime in seconds
    pub uptime_seconds: u64,

    /// Database connection status
    pub database: String,

    /// Where the OpenAPI document is served, when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
}
