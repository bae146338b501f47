// Static Page Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Key of the page served at /about
pub const ABOUT_PAGE_SLUG: &str = "about";

/// Informational page content keyed by slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StaticPage {
    pub slug: String,
    pub title: String,
    pub content: String,
}
