// Static Page Repository Implementation

use crate::db::connection::DatabasePool;
use crate::db::models::StaticPage;
use crate::db::repositories::db_error;
use crate::db::traits::StaticPageRepository;
use async_trait::async_trait;

pub struct StaticPageRepositoryImpl {
    pool: DatabasePool,
}

impl StaticPageRepositoryImpl {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaticPageRepository for StaticPageRepositoryImpl {
    async fn get_static_page(&self, slug: &str) -> crate::Result<Option<StaticPage>> {
        let mut qb = self.pool.query_builder();
        let sql = format!(
            "SELECT slug, title, content FROM static_pages WHERE slug = {}",
            qb.placeholder()
        );

        let page = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, StaticPage>(&sql)
                    .bind(slug)
                    .fetch_optional(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, StaticPage>(&sql)
                    .bind(slug)
                    .fetch_optional(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to fetch static page"))?;

        Ok(page)
    }
}
