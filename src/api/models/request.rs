// API Request Models
//
// Query-string parameters are kept as raw strings: sort and page tokens are
// recovered from rather than rejected, so extraction must never fail on them.
// A repeated key keeps its last value.

use crate::api::models::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Decoded query-string pairs in request order
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn from_uri(uri: &Uri) -> Result<Self, ApiError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(pairs))
    }

    /// Value of the last occurrence of `key`
    pub fn last(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

impl From<QueryPairs> for ListQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            sort: pairs.last("sort"),
            page: pairs.last("page"),
        }
    }
}

impl From<QueryPairs> for DetailQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            prev: pairs.last("prev"),
        }
    }
}

impl From<QueryPairs> for SearchQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            q: pairs.last("q"),
            c: pairs.last("c"),
            page: pairs.last("page"),
        }
    }
}

macro_rules! impl_query_extractor {
    ($($query:ty),+) => {
        $(
            #[async_trait]
            impl<S: Send + Sync> FromRequestParts<S> for $query {
                type Rejection = ApiError;

                async fn from_request_parts(
                    parts: &mut Parts,
                    _state: &S,
                ) -> Result<Self, Self::Rejection> {
                    QueryPairs::from_uri(&parts.uri).map(Self::from)
                }
            }
        )+
    };
}

impl_query_extractor!(ListQuery, DetailQuery, SearchQuery);

/// Listing query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Sort token such as `name-asc` or `kex-desc`
    #[serde(default)]
    pub sort: Option<String>,

    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
}

/// Detail query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailQuery {
    /// Referring page, echoed back unchanged
    #[serde(default)]
    pub prev: Option<String>,
}

/// Search query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term
    #[serde(default)]
    pub q: Option<String>,

    /// Result category, `cs` (default) or `rfc`
    #[serde(default)]
    pub c: Option<String>,

    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
}

impl SearchQuery {
    /// Search term with surrounding whitespace removed, empty when absent
    pub fn term(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Which result set a search page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SearchCategory {
    #[default]
    #[serde(rename = "cs")]
    CipherSuites,
    #[serde(rename = "rfc")]
    Rfcs,
}

impl SearchCategory {
    pub fn token(&self) -> &'static str {
        match self {
            SearchCategory::CipherSuites => "cs",
            SearchCategory::Rfcs => "rfc",
        }
    }

    /// Resolve the `c` parameter; absent means cipher suites
    pub fn parse(token: Option<&str>) -> Result<Self, ApiError> {
        match token {
            None | Some("cs") => Ok(SearchCategory::CipherSuites),
            Some("rfc") => Ok(SearchCategory::Rfcs),
            Some(other) => Err(ApiError::BadRequest(format!(
                "Unknown search category '{}', expected 'cs' or 'rfc'",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_category_parse() {
        assert_eq!(SearchCategory::parse(None).unwrap(), SearchCategory::CipherSuites);
        assert_eq!(SearchCategory::parse(Some("cs")).unwrap(), SearchCategory::CipherSuites);
        assert_eq!(SearchCategory::parse(Some("rfc")).unwrap(), SearchCategory::Rfcs);
    }

    #[test]
    fn test_search_category_rejects_unknown() {
        for token in ["", "RFC", "tech", "cs "] {
            assert!(
                matches!(SearchCategory::parse(Some(token)), Err(ApiError::BadRequest(_))),
                "{:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_search_term_trimmed() {
        let query = SearchQuery {
            q: Some("  aes gcm ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.term(), "aes gcm");
        assert_eq!(SearchQuery::default().term(), "");
    }

    fn pairs(query: &str) -> QueryPairs {
        let uri: Uri = format!("/cs?{}", query).parse().unwrap();
        QueryPairs::from_uri(&uri).unwrap()
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let query = ListQuery::from(pairs("page=2&sort=kex-asc&page=3"));
        assert_eq!(query.page.as_deref(), Some("3"));
        assert_eq!(query.sort.as_deref(), Some("kex-asc"));

        let query = DetailQuery::from(pairs("prev=a&prev=b"));
        assert_eq!(query.prev.as_deref(), Some("b"));

        let query = SearchQuery::from(pairs("q=aes&c=rfc&q=camellia+cbc"));
        assert_eq!(query.term(), "camellia cbc");
        assert_eq!(query.c.as_deref(), Some("rfc"));
        assert_eq!(query.page, None);
    }

    #[test]
    fn test_query_without_string_is_empty() {
        let uri: Uri = "/cs".parse().unwrap();
        let query = ListQuery::from(QueryPairs::from_uri(&uri).unwrap());
        assert!(query.sort.is_none());
        assert!(query.page.is_none());
    }

    #[test]
    fn test_category_serializes_as_token() {
        assert_eq!(serde_json::to_string(&SearchCategory::Rfcs).unwrap(), "\"rfc\"");
        assert_eq!(SearchCategory::CipherSuites.to_string(), "cs");
    }
}
