// OpenAPI Documentation

use crate::api::{
    models::{
        error::ApiErrorResponse,
        request::SearchCategory,
        response::{
            CipherSuiteDetailContext, CipherSuiteListContext, HealthResponse, IndexContext,
            RfcDetailContext, RfcListContext, SearchContext, StaticPageContext,
        },
    },
    routes,
};
use crate::db::models::{
    CipherSuite, RelatedTechnology, Rfc, RfcStatus, StaticPage, TechnologyKind,
};
use crate::utils::pagination::{CipherSuitePage, RfcPage};
use utoipa::OpenApi;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::pages::index,
        routes::pages::about,
        routes::cipher_suites::index_cs,
        routes::cipher_suites::detail_cs,
        routes::rfcs::index_rfc,
        routes::rfcs::detail_rfc,
        routes::search::search,
        routes::health::health_check,
    ),
    components(
        schemas(
            // Records
            CipherSuite,
            Rfc,
            RfcStatus,
            StaticPage,
            RelatedTechnology,
            TechnologyKind,
            CipherSuitePage,
            RfcPage,
            SearchCategory,

            // Page contexts
            IndexContext,
            StaticPageContext,
            CipherSuiteListContext,
            RfcListContext,
            CipherSuiteDetailContext,
            RfcDetailContext,
            SearchContext,
            HealthResponse,

            // Error model
            ApiErrorResponse,
        )
    ),
    tags(
        (name = "pages", description = "Landing and static pages"),
        (name = "cipher_suites", description = "Cipher suite listing and details"),
        (name = "rfcs", description = "RFC listing and details"),
        (name = "search", description = "Search across cipher suites and RFCs"),
        (name = "health", description = "Health check"),
    ),
    info(
        title = "CipherDir",
        version = "0.1.0",
        description = r#"
# CipherDir

A read-only directory of TLS cipher suites and the RFCs that define them.

Every page answers with the JSON context its template is rendered from.

## Listings

`/cs` and `/rfc` accept a `sort` token (`<field>-<asc|desc>`) and a `page` number.
Unknown sort tokens fall back to the default order and page numbers outside the
valid range are clamped, so listings never fail on bad parameters.

## Search

`/search?q=...&c=cs|rfc` matches cipher suites on their name and algorithm names
and RFCs on their title. Both result counts are always returned.
"#,
        license(
            name = "GPL-3.0",
            url = "https://www.gnu.org/licenses/gpl-3.0.en.html"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;
