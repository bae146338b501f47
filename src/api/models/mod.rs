// API Models Module

pub mod error;
pub mod request;
pub mod response;

pub use error::{ApiError, ApiErrorResponse};
pub use request::{DetailQuery, ListQuery, SearchCategory, SearchQuery};
pub use response::{
    CipherSuiteDetailContext, CipherSuiteListContext, HealthResponse, IndexContext,
    RfcDetailContext, RfcListContext, SearchContext, SearchResultPage, StaticPageContext,
};
