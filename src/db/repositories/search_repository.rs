// Search Repository Implementation
// Text search over cipher suites and RFCs
//
// PostgreSQL uses its full-text engine (to_tsvector / plainto_tsquery). On SQLite
// the searchable text is lowercased, punctuation in WORD_SEPARATORS becomes a
// space, and every query word must occur as a whole space-delimited word. Both
// engines AND the words together and match a word against any searched field.

use crate::db::config::DatabaseType;
use crate::db::connection::{DatabasePool, QueryBuilder};
use crate::db::models::{CipherSuite, Rfc, CIPHER_SUITE_COLUMNS, RFC_COLUMNS};
use crate::db::repositories::db_error;
use crate::db::traits::SearchRepository;
use async_trait::async_trait;

/// Joins that bring the lookup long names into a cipher suite search
const CIPHER_SUITE_SEARCH_FROM: &str = r#"
    FROM cipher_suites cs
    JOIN protocol_versions pv ON pv.short_name = cs.protocol_version
    JOIN kex_algorithms kx ON kx.short_name = cs.kex_algorithm
    JOIN auth_algorithms au ON au.short_name = cs.auth_algorithm
    JOIN enc_algorithms en ON en.short_name = cs.enc_algorithm
    JOIN hash_algorithms hs ON hs.short_name = cs.hash_algorithm
"#;

const PG_CIPHER_SUITE_DOCUMENT: &str =
    "concat_ws(' ', cs.name, kx.long_name, au.long_name, en.long_name, hs.long_name, pv.long_name)";

const SQLITE_CIPHER_SUITE_DOCUMENT: &str = "cs.name || ' ' || kx.long_name || ' ' || au.long_name \
     || ' ' || en.long_name || ' ' || hs.long_name || ' ' || pv.long_name";

/// Characters that break words on SQLite, in addition to whitespace
const WORD_SEPARATORS: [char; 10] = ['_', '-', '/', '(', ')', ',', '.', ':', ';', '+'];

/// Text search configuration used on PostgreSQL
const PG_TEXT_SEARCH_CONFIG: &str = "english";

/// Which entity a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchTarget {
    CipherSuites,
    Rfcs,
}

impl SearchTarget {
    fn from_clause(&self) -> &'static str {
        match self {
            SearchTarget::CipherSuites => CIPHER_SUITE_SEARCH_FROM,
            SearchTarget::Rfcs => " FROM rfcs r ",
        }
    }

    fn document(&self, db_type: DatabaseType) -> String {
        match (self, db_type) {
            (SearchTarget::CipherSuites, DatabaseType::Postgres) => {
                PG_CIPHER_SUITE_DOCUMENT.to_string()
            }
            (SearchTarget::CipherSuites, DatabaseType::Sqlite) => {
                sqlite_words(SQLITE_CIPHER_SUITE_DOCUMENT)
            }
            (SearchTarget::Rfcs, DatabaseType::Postgres) => "r.title".to_string(),
            (SearchTarget::Rfcs, DatabaseType::Sqlite) => sqlite_words("r.title"),
        }
    }

    fn select_list(&self) -> &'static str {
        match self {
            SearchTarget::CipherSuites => CIPHER_SUITE_COLUMNS,
            SearchTarget::Rfcs => RFC_COLUMNS,
        }
    }

    fn order_by(&self) -> &'static str {
        match self {
            SearchTarget::CipherSuites => "cs.name ASC",
            SearchTarget::Rfcs => "r.number ASC",
        }
    }
}

fn is_word_break(c: char) -> bool {
    c.is_whitespace() || WORD_SEPARATORS.contains(&c)
}

/// Lowercased words of a query, split on whitespace and WORD_SEPARATORS
pub fn search_terms(term: &str) -> Vec<String> {
    term.to_lowercase()
        .split(is_word_break)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// SQLite expression for `expression` lowercased, with every separator replaced
/// by a space and a space added at both ends
fn sqlite_words(expression: &str) -> String {
    let folded = WORD_SEPARATORS
        .iter()
        .fold(format!("lower({})", expression), |acc, c| {
            format!("replace({}, '{}', ' ')", acc, c)
        });
    format!("(' ' || {} || ' ')", folded)
}

/// WHERE predicate and its bind values for a search
fn search_filter(
    target: SearchTarget,
    db_type: DatabaseType,
    qb: &mut QueryBuilder,
    term: &str,
) -> (String, Vec<String>) {
    let document = target.document(db_type);
    match db_type {
        DatabaseType::Postgres => (
            format!(
                "to_tsvector('{cfg}', {doc}) @@ plainto_tsquery('{cfg}', {p})",
                cfg = PG_TEXT_SEARCH_CONFIG,
                doc = document,
                p = qb.placeholder()
            ),
            vec![term.trim().to_string()],
        ),
        DatabaseType::Sqlite => {
            let words: Vec<String> = search_terms(term)
                .into_iter()
                .map(|word| format!(" {} ", word))
                .collect();
            let predicate = words
                .iter()
                .map(|_| format!("instr({}, {}) > 0", document, qb.placeholder()))
                .collect::<Vec<_>>()
                .join(" AND ");
            (predicate, words)
        }
    }
}

pub struct SearchRepositoryImpl {
    pool: DatabasePool,
}

impl SearchRepositoryImpl {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn count_matches(&self, target: SearchTarget, term: &str) -> crate::Result<u64> {
        if search_terms(term).is_empty() {
            return Ok(0);
        }

        let mut qb = self.pool.query_builder();
        let (filter, binds) = search_filter(target, self.pool.db_type(), &mut qb, term);
        let sql = format!(
            "SELECT COUNT(*) {} WHERE {}",
            target.from_clause(),
            filter
        );

        let count = match &self.pool {
            DatabasePool::Postgres(pool) => {
                let mut query = sqlx::query_scalar::<sqlx::Postgres, i64>(&sql);
                for value in &binds {
                    query = query.bind(value);
                }
                query.fetch_one(pool).await
            }
            DatabasePool::Sqlite(pool) => {
                let mut query = sqlx::query_scalar::<sqlx::Sqlite, i64>(&sql);
                for value in &binds {
                    query = query.bind(value);
                }
                query.fetch_one(pool).await
            }
        }
        .map_err(db_error("Failed to count search results"))?;

        Ok(count.max(0) as u64)
    }

    /// Build the paged SELECT for a search, returning SQL and text bind values
    fn select_sql(&self, target: SearchTarget, term: &str) -> (String, Vec<String>) {
        let mut qb = self.pool.query_builder();
        let (filter, binds) = search_filter(target, self.pool.db_type(), &mut qb, term);
        let sql = qb.limit_offset(&format!(
            "SELECT {} {} WHERE {} ORDER BY {}",
            target.select_list(),
            target.from_clause(),
            filter,
            target.order_by()
        ));
        (sql, binds)
    }
}

#[async_trait]
impl SearchRepository for SearchRepositoryImpl {
    async fn count_cipher_suite_matches(&self, term: &str) -> crate::Result<u64> {
        self.count_matches(SearchTarget::CipherSuites, term).await
    }

    async fn search_cipher_suites(
        &self,
        term: &str,
        limit: u64,
        offset: u64,
    ) -> crate::Result<Vec<CipherSuite>> {
        if search_terms(term).is_empty() {
            return Ok(Vec::new());
        }

        let (sql, binds) = self.select_sql(SearchTarget::CipherSuites, term);
        let (limit, offset) = (limit as i64, offset as i64);

        let suites = match &self.pool {
            DatabasePool::Postgres(pool) => {
                let mut query = sqlx::query_as::<sqlx::Postgres, CipherSuite>(&sql);
                for value in &binds {
                    query = query.bind(value);
                }
                query.bind(limit).bind(offset).fetch_all(pool).await
            }
            DatabasePool::Sqlite(pool) => {
                let mut query = sqlx::query_as::<sqlx::Sqlite, CipherSuite>(&sql);
                for value in &binds {
                    query = query.bind(value);
                }
                query.bind(limit).bind(offset).fetch_all(pool).await
            }
        }
        .map_err(db_error("Failed to search cipher suites"))?;

        Ok(suites)
    }

    async fn count_rfc_matches(&self, term: &str) -> crate::Result<u64> {
        self.count_matches(SearchTarget::Rfcs, term).await
    }

    async fn search_rfcs(&self, term: &str, limit: u64, offset: u64) -> crate::Result<Vec<Rfc>> {
        if search_terms(term).is_empty() {
            return Ok(Vec::new());
        }

        let (sql, binds) = self.select_sql(SearchTarget::Rfcs, term);
        let (limit, offset) = (limit as i64, offset as i64);

        let rfcs = match &self.pool {
            DatabasePool::Postgres(pool) => {
                let mut query = sqlx::query_as::<sqlx::Postgres, Rfc>(&sql);
                for value in &binds {
                    query = query.bind(value);
                }
                query.bind(limit).bind(offset).fetch_all(pool).await
            }
            DatabasePool::Sqlite(pool) => {
                let mut query = sqlx::query_as::<sqlx::Sqlite, Rfc>(&sql);
                for value in &binds {
                    query = query.bind(value);
                }
                query.bind(limit).bind(offset).fetch_all(pool).await
            }
        }
        .map_err(db_error("Failed to search RFCs"))?;

        Ok(rfcs)
    }
}
