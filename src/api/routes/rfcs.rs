// RFC Routes

use crate::api::{
    models::{
        error::ApiError,
        request::{DetailQuery, ListQuery},
        response::{RfcDetailContext, RfcListContext, NAVBAR_RFCS},
    },
    state::AppState,
};
use crate::db::sorting::RfcSort;
use crate::utils::pagination::Paginator;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// RFCs per list page
pub const RFCS_PER_PAGE: u64 = 10;

/// List RFCs
///
/// Unknown sort tokens fall back to `number-asc`; out of range pages are clamped
#[utoipa::path(
    get,
    path = "/rfc",
    tag = "rfcs",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of RFCs", body = RfcListContext)
    )
)]
pub async fn index_rfc(
    State(state): State<Arc<AppState>>,
    query: ListQuery,
) -> Result<Json<RfcListContext>, ApiError> {
    let repo = state.db.rfcs();
    let sort = RfcSort::from_token(query.sort.as_deref());

    let paginator = Paginator::new(repo.count_rfcs().await?, RFCS_PER_PAGE);
    let number = paginator.resolve(query.page.as_deref());
    let rfcs = repo
        .list_rfcs(sort, paginator.per_page(), paginator.offset(number))
        .await?;

    Ok(Json(RfcListContext::new(
        paginator.page(number, rfcs),
        sort.to_string(),
    )))
}

/// RFC details
///
/// Includes the status label, the cipher suites the RFC defines and related documents
#[utoipa::path(
    get,
    path = "/rfc/{number}",
    tag = "rfcs",
    params(
        ("number" = i64, Path, description = "RFC number"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "RFC details", body = RfcDetailContext),
        (status = 404, description = "RFC not found", body = crate::api::models::error::ApiErrorResponse)
    )
)]
pub async fn detail_rfc(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
    query: DetailQuery,
) -> Result<Json<RfcDetailContext>, ApiError> {
    // Route numbers that are not numbers cannot name a document
    let not_found = || ApiError::NotFound(format!("RFC {} not found", number));
    let rfc_number: i64 = number.parse().map_err(|_| not_found())?;

    let repo = state.db.rfcs();
    let rfc = repo.get_rfc(rfc_number).await?.ok_or_else(not_found)?;

    let (defined_cipher_suites, related_docs) = tokio::try_join!(
        repo.get_defined_cipher_suites(rfc_number),
        repo.get_related_documents(rfc_number)
    )?;

    Ok(Json(RfcDetailContext {
        url: rfc.url(),
        rfc_status_code: rfc.status.label().to_string(),
        rfc,
        navbar_context: NAVBAR_RFCS.to_string(),
        prev_page: query.prev,
        defined_cipher_suites,
        related_docs,
    }))
}
