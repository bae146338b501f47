// Sort Orders
// Maps the `sort` query tokens onto ORDER BY clauses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use utoipa::ToSchema;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn token(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// A sort token was not one of the known `<field>-<direction>` pairs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

/// Sortable cipher suite columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CipherSuiteSortField {
    Name,
    Kex,
    Auth,
    Enc,
    Hash,
}

impl CipherSuiteSortField {
    fn token(&self) -> &'static str {
        match self {
            CipherSuiteSortField::Name => "name",
            CipherSuiteSortField::Kex => "kex",
            CipherSuiteSortField::Auth => "auth",
            CipherSuiteSortField::Enc => "enc",
            CipherSuiteSortField::Hash => "hash",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            CipherSuiteSortField::Name => "cs.name",
            CipherSuiteSortField::Kex => "cs.kex_algorithm",
            CipherSuiteSortField::Auth => "cs.auth_algorithm",
            CipherSuiteSortField::Enc => "cs.enc_algorithm",
            CipherSuiteSortField::Hash => "cs.hash_algorithm",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "name" => Some(CipherSuiteSortField::Name),
            "kex" => Some(CipherSuiteSortField::Kex),
            "auth" => Some(CipherSuiteSortField::Auth),
            "enc" => Some(CipherSuiteSortField::Enc),
            "hash" => Some(CipherSuiteSortField::Hash),
            _ => None,
        }
    }
}

/// Ordering of the cipher suite list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct CipherSuiteSort {
    pub field: CipherSuiteSortField,
    pub direction: SortDirection,
}

impl CipherSuiteSort {
    pub const fn new(field: CipherSuiteSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolve a request token, falling back to name ascending
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => Self::default(),
            Some(token) => token.parse().unwrap_or_else(|e: UnknownSortOrder| {
                debug!("{}, using {}", e, Self::default());
                Self::default()
            }),
        }
    }

    /// ORDER BY clause; ties resolve on the primary key
    pub fn order_by(&self) -> String {
        match self.field {
            CipherSuiteSortField::Name => format!("cs.name {}", self.direction.sql()),
            _ => format!(
                "{} {}, cs.name ASC",
                self.field.column(),
                self.direction.sql()
            ),
        }
    }
}

impl Default for CipherSuiteSort {
    fn default() -> Self {
        Self::new(CipherSuiteSortField::Name, SortDirection::Asc)
    }
}

impl fmt::Display for CipherSuiteSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.token(), self.direction.token())
    }
}

impl FromStr for CipherSuiteSort {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once('-')
            .ok_or_else(|| UnknownSortOrder(s.to_string()))?;

        match (
            CipherSuiteSortField::parse(field),
            SortDirection::parse(direction),
        ) {
            (Some(field), Some(direction)) => Ok(Self::new(field, direction)),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

/// Sortable RFC columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RfcSortField {
    Number,
    Title,
}

impl RfcSortField {
    fn token(&self) -> &'static str {
        match self {
            RfcSortField::Number => "number",
            RfcSortField::Title => "title",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "number" => Some(RfcSortField::Number),
            "title" => Some(RfcSortField::Title),
            _ => None,
        }
    }
}

/// Ordering of the RFC list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct RfcSort {
    pub field: RfcSortField,
    pub direction: SortDirection,
}

impl RfcSort {
    pub const fn new(field: RfcSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolve a request token, falling back to number ascending
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => Self::default(),
            Some(token) => token.parse().unwrap_or_else(|e: UnknownSortOrder| {
                debug!("{}, using {}", e, Self::default());
                Self::default()
            }),
        }
    }

    /// ORDER BY clause; ties resolve on the primary key
    pub fn order_by(&self) -> String {
        match self.field {
            RfcSortField::Number => format!("r.number {}", self.direction.sql()),
            RfcSortField::Title => format!("r.title {}, r.number ASC", self.direction.sql()),
        }
    }
}

impl Default for RfcSort {
    fn default() -> Self {
        Self::new(RfcSortField::Number, SortDirection::Asc)
    }
}

impl fmt::Display for RfcSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.token(), self.direction.token())
    }
}

impl FromStr for RfcSort {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once('-')
            .ok_or_else(|| UnknownSortOrder(s.to_string()))?;

        match (RfcSortField::parse(field), SortDirection::parse(direction)) {
            (Some(field), Some(direction)) => Ok(Self::new(field, direction)),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_suite_tokens_roundtrip() {
        let tokens = [
            "name-asc", "name-desc", "kex-asc", "kex-desc", "auth-asc", "auth-desc", "enc-asc",
            "enc-desc", "hash-asc", "hash-desc",
        ];

        for token in tokens {
            let sort: CipherSuiteSort = token.parse().unwrap();
            assert_eq!(sort.to_string(), token);
        }
    }

    #[test]
    fn test_cipher_suite_order_by() {
        let sort: CipherSuiteSort = "kex-desc".parse().unwrap();
        assert_eq!(sort.order_by(), "cs.kex_algorithm DESC, cs.name ASC");

        let sort: CipherSuiteSort = "name-desc".parse().unwrap();
        assert_eq!(sort.order_by(), "cs.name DESC");
    }

    #[test]
    fn test_unknown_cipher_suite_token_defaults_to_name_asc() {
        for token in ["", "kex", "kex-up", "protocol-asc", "NAME-ASC", "name-asc-x"] {
            assert_eq!(
                CipherSuiteSort::from_token(Some(token)),
                CipherSuiteSort::default(),
                "token {:?}",
                token
            );
        }
        assert_eq!(CipherSuiteSort::from_token(None).to_string(), "name-asc");
    }

    #[test]
    fn test_rfc_tokens() {
        assert_eq!(
            RfcSort::from_token(Some("title-desc")),
            RfcSort::new(RfcSortField::Title, SortDirection::Desc)
        );
        assert_eq!(RfcSort::from_token(Some("title-desc")).order_by(), "r.title DESC, r.number ASC");
        assert_eq!(RfcSort::from_token(Some("number-desc")).order_by(), "r.number DESC");
        assert_eq!(RfcSort::from_token(Some("name-asc")), RfcSort::default());
        assert_eq!(RfcSort::default().to_string(), "number-asc");
    }
}
