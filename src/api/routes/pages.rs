// Landing and Static Page Routes

use crate::api::{
    models::{
        error::ApiError,
        response::{IndexContext, StaticPageContext},
    },
    state::AppState,
};
use crate::db::models::ABOUT_PAGE_SLUG;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Landing page
///
/// Needs no data; the page carries its own search box
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Landing page context", body = IndexContext)
    )
)]
pub async fn index() -> Json<IndexContext> {
    Json(IndexContext::default())
}

/// About page
#[utoipa::path(
    get,
    path = "/about",
    tag = "pages",
    responses(
        (status = 200, description = "About page context", body = StaticPageContext),
        (status = 404, description = "About page has not been loaded", body = crate::api::models::error::ApiErrorResponse)
    )
)]
pub async fn about(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StaticPageContext>, ApiError> {
    let page = state
        .db
        .static_pages()
        .get_static_page(ABOUT_PAGE_SLUG)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Static page '{}' not found", ABOUT_PAGE_SLUG)))?;

    Ok(Json(StaticPageContext::from(page)))
}
