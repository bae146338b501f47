// Cipher Suite Routes

use crate::api::{
    models::{
        error::ApiError,
        request::{DetailQuery, ListQuery},
        response::{CipherSuiteDetailContext, CipherSuiteListContext, NAVBAR_CIPHER_SUITES},
    },
    state::AppState,
};
use crate::db::sorting::CipherSuiteSort;
use crate::utils::pagination::Paginator;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// Cipher suites per list page
pub const CIPHER_SUITES_PER_PAGE: u64 = 15;

/// List cipher suites
///
/// Unknown sort tokens fall back to `name-asc`; out of range pages are clamped
#[utoipa::path(
    get,
    path = "/cs",
    tag = "cipher_suites",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of cipher suites", body = CipherSuiteListContext)
    )
)]
pub async fn index_cs(
    State(state): State<Arc<AppState>>,
    query: ListQuery,
) -> Result<Json<CipherSuiteListContext>, ApiError> {
    let repo = state.db.cipher_suites();
    let sort = CipherSuiteSort::from_token(query.sort.as_deref());

    let paginator = Paginator::new(repo.count_cipher_suites().await?, CIPHER_SUITES_PER_PAGE);
    let number = paginator.resolve(query.page.as_deref());
    let suites = repo
        .list_cipher_suites(sort, paginator.per_page(), paginator.offset(number))
        .await?;

    Ok(Json(CipherSuiteListContext::new(
        paginator.page(number, suites),
        sort.to_string(),
    )))
}

/// Cipher suite details
///
/// Includes the defining RFCs and the five lookup rows for cross-linking
#[utoipa::path(
    get,
    path = "/cs/{name}",
    tag = "cipher_suites",
    params(
        ("name" = String, Path, description = "IANA cipher suite name"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "Cipher suite details", body = CipherSuiteDetailContext),
        (status = 404, description = "Cipher suite not found", body = crate::api::models::error::ApiErrorResponse)
    )
)]
pub async fn detail_cs(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: DetailQuery,
) -> Result<Json<CipherSuiteDetailContext>, ApiError> {
    let repo = state.db.cipher_suites();

    let row = repo
        .get_cipher_suite(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Cipher suite {} not found", name)))?;
    let referring_rfc_list = repo.get_defining_rfcs(&name).await?;
    let (cipher_suite, related_tech) = row.into_parts();

    Ok(Json(CipherSuiteDetailContext {
        hex_code: cipher_suite.hex_code(),
        cipher_suite,
        navbar_context: NAVBAR_CIPHER_SUITES.to_string(),
        prev_page: query.prev,
        referring_rfc_list,
        related_tech,
    }))
}
