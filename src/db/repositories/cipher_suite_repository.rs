// Cipher Suite Repository Implementation
// Handles database queries for cipher suite records

use crate::db::connection::DatabasePool;
use crate::db::models::{CipherSuite, CipherSuiteDetailRow, Rfc, CIPHER_SUITE_COLUMNS, RFC_COLUMNS};
use crate::db::repositories::db_error;
use crate::db::sorting::CipherSuiteSort;
use crate::db::traits::CipherSuiteRepository;
use async_trait::async_trait;

pub struct CipherSuiteRepositoryImpl {
    pool: DatabasePool,
}

impl CipherSuiteRepositoryImpl {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Ordered window over all cipher suites, without the LIMIT/OFFSET tail
fn list_sql(sort: CipherSuiteSort) -> String {
    format!(
        "SELECT {} FROM cipher_suites cs ORDER BY {}",
        CIPHER_SUITE_COLUMNS,
        sort.order_by()
    )
}

#[async_trait]
impl CipherSuiteRepository for CipherSuiteRepositoryImpl {
    async fn count_cipher_suites(&self) -> crate::Result<u64> {
        let sql = "SELECT COUNT(*) FROM cipher_suites";

        let count = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await
            }
            DatabasePool::Sqlite(pool) => sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await,
        }
        .map_err(db_error("Failed to count cipher suites"))?;

        Ok(count.max(0) as u64)
    }

    async fn list_cipher_suites(
        &self,
        sort: CipherSuiteSort,
        limit: u64,
        offset: u64,
    ) -> crate::Result<Vec<CipherSuite>> {
        let sql = self.pool.query_builder().limit_offset(&list_sql(sort));
        let (limit, offset) = (limit as i64, offset as i64);

        let suites = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, CipherSuite>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, CipherSuite>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to list cipher suites"))?;

        Ok(suites)
    }

    async fn get_cipher_suite(&self, name: &str) -> crate::Result<Option<CipherSuiteDetailRow>> {
        let mut qb = self.pool.query_builder();
        let sql = CipherSuiteDetailRow::select_sql(&qb.placeholder());

        let row = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, CipherSuiteDetailRow>(&sql)
                    .bind(name)
                    .fetch_optional(pool)
                    .await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, CipherSuiteDetailRow>(&sql)
                    .bind(name)
                    .fetch_optional(pool)
                    .await
            }
        }
        .map_err(db_error("Failed to fetch cipher suite"))?;

        Ok(row)
    }

    async fn get_defining_rfcs(&self, name: &str) -> crate::Result<Vec<Rfc>> {
        let mut qb = self.pool.query_builder();
        let sql = format!(
            r#"
            SELECT {}
            FROM rfcs r
            JOIN rfc_cipher_suites rc ON rc.rfc_number = r.number
            WHERE rc.cipher_suite_name = {}
            ORDER BY r.number ASC
            "#,
            RFC_COLUMNS,
            qb.placeholder()
        );

        let rfcs = match &self.pool {
            DatabasePool::Postgres(pool) => {
                sqlx::query_as::<_, Rfc>(&sql).bind(name).fetch_all(pool).await
            }
            DatabasePool::Sqlite(pool) => {
                sqlx::query_as::<_, Rfc>(&sql).bind(name).fetch_all(pool).await
            }
        }
        .map_err(db_error("Failed to fetch defining RFCs"))?;

        Ok(rfcs)
    }
}
