// Search Route

use crate::api::{
    models::{
        error::ApiError,
        request::{SearchCategory, SearchQuery},
        response::{SearchContext, SearchResultPage},
    },
    state::AppState,
};
use crate::utils::pagination::Paginator;
use axum::{
    extract::{OriginalUri, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

/// Search results per page, for either category
pub const SEARCH_RESULTS_PER_PAGE: u64 = 15;

/// Search cipher suites and RFCs
///
/// Both result counts are always returned; only the page of the selected
/// category is fetched
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchContext),
        (status = 400, description = "Unknown search category", body = crate::api::models::error::ApiErrorResponse)
    )
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    query: SearchQuery,
) -> Result<Json<SearchContext>, ApiError> {
    let category = SearchCategory::parse(query.c.as_deref())?;
    let term = query.term();
    let repo = state.db.search();

    let (result_count_cs, result_count_rfc) = tokio::try_join!(
        repo.count_cipher_suite_matches(term),
        repo.count_rfc_matches(term)
    )?;
    debug!(
        "Search '{}': {} cipher suites, {} RFCs",
        term, result_count_cs, result_count_rfc
    );

    let search_result_list = match category {
        SearchCategory::CipherSuites => {
            let paginator = Paginator::new(result_count_cs, SEARCH_RESULTS_PER_PAGE);
            let number = paginator.resolve(query.page.as_deref());
            let suites = repo
                .search_cipher_suites(term, paginator.per_page(), paginator.offset(number))
                .await?;
            SearchResultPage::CipherSuites(paginator.page(number, suites))
        }
        SearchCategory::Rfcs => {
            let paginator = Paginator::new(result_count_rfc, SEARCH_RESULTS_PER_PAGE);
            let number = paginator.resolve(query.page.as_deref());
            let rfcs = repo
                .search_rfcs(term, paginator.per_page(), paginator.offset(number))
                .await?;
            SearchResultPage::Rfcs(paginator.page(number, rfcs))
        }
    };

    let full_path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    Ok(Json(SearchContext {
        active_tab: category,
        category,
        full_path,
        page_number_range: search_result_list.page_range(),
        result_count_cs,
        result_count_rfc,
        search_result_list,
        search_term: term.to_string(),
    }))
}
