// RFC Repository Implementation
// Handles database queries for RFC records and their relations

use crate::db::connection::DatabasePool;
use crate::db::models::{CipherSuite, Rfc, CIPHER_SUITE_COLUMNS, RFC_COLUMNS};
use crate::db::repositories::db_error;
use crate::db::sorting::RfcSort;
use crate::db::traits::RfcRepository;
use async_trait::async_trait;

pub struct RfcRepositoryImpl {
    pool: DatabasePool,
}

impl RfcRepositoryImpl {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RfcRepository for RfcRepositoryImpl {
    async fn count_rfcs(&self) -> crate::Result<u64> {
        let sql = "SELECT COUNT(*) FROM rfcs";

        let count = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await
            }
            DatabasePool::Sqlite(pool) => sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await,
        }
        .map_err(db_error("Failed to count RFCs"))?;

        Ok(count.max(0) as u64)
    }

    async fn list_rfcs(&self, sort: RfcSort, limit: u64, offset: u64) -> crate::Result<Vec<Rfc>> {
        let sql = self.pool.query_builder().limit_offset(&format!(
            "SELECT {} FROM rfcs r ORDER BY {}",
            RFC_COLUMNS,
            sort.order_by()
        ));
        let (limit, offset) = (limit as i64, offset as i64);

        let rfcs = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, Rfc>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, Rfc>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to list RFCs"))?;

        Ok(rfcs)
    }

    async fn get_rfc(&self, number: i64) -> crate::Result<Option<Rfc>> {
        let mut qb = self.pool.query_builder();
        let sql = format!(
            "SELECT {} FROM rfcs r WHERE r.number = {}",
            RFC_COLUMNS,
            qb.placeholder()
        );

        let rfc = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, Rfc>(&sql)
                    .bind(number)
                    .fetch_optional(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, Rfc>(&sql)
                    .bind(number)
                    .fetch_optional(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to fetch RFC"))?;

        Ok(rfc)
    }

    async fn get_defined_cipher_suites(&self, number: i64) -> crate::Result<Vec<CipherSuite>> {
        let mut qb = self.pool.query_builder();
        let sql = format!(
            r#"
            SELECT {}
            FROM cipher_suites cs
            JOIN rfc_cipher_suites rc ON rc.cipher_suite_name = cs.name
            WHERE rc.rfc_number = {}
            ORDER BY cs.name ASC
            "#,
            CIPHER_SUITE_COLUMNS,
            qb.placeholder()
        );

        let suites = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, CipherSuite>(&sql)
                    .bind(number)
                    .fetch_all(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, CipherSuite>(&sql)
                    .bind(number)
                    .fetch_all(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to fetch defined cipher suites"))?;

        Ok(suites)
    }

    async fn get_related_documents(&self, number: i64) -> crate::Result<Vec<Rfc>> {
        // A relation row links both documents, whichever side it was stored from
        let mut qb = self.pool.query_builder();
        let sql = format!(
            r#"
            SELECT {}
            FROM rfcs r
            WHERE r.number IN (
                SELECT related_number FROM rfc_related_documents WHERE rfc_number = {}
                UNION
                SELECT rfc_number FROM rfc_related_documents WHERE related_number = {}
            )
            ORDER BY r.number ASC
            "#,
            RFC_COLUMNS,
            qb.placeholder(),
            qb.placeholder()
        );

        let rfcs = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, Rfc>(&sql)
                    .bind(number)
                    .bind(number)
                    .fetch_all(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, Rfc>(&sql)
                    .bind(number)
                    .bind(number)
                    .fetch_all(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to fetch related documents"))?;

        Ok(rfcs)
    }
}
