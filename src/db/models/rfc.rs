// RFC Model
// IETF documents, their lifecycle status and the cipher suites they define

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Column list shared by every RFC query, qualified with the `r` alias
pub const RFC_COLUMNS: &str = "r.number, r.title, r.status, r.is_draft";

/// Publication status of an RFC, stored as a three letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RfcStatus {
    #[serde(rename = "BCP")]
    BestCurrentPractice,
    #[serde(rename = "DST")]
    DraftStandard,
    #[serde(rename = "EXP")]
    Experimental,
    #[serde(rename = "HST")]
    Historic,
    #[serde(rename = "INF")]
    Informational,
    #[serde(rename = "IST")]
    InternetStandard,
    #[serde(rename = "PST")]
    ProposedStandard,
    #[serde(rename = "UND")]
    Undefined,
}

impl RfcStatus {
    pub const ALL: [RfcStatus; 8] = [
        RfcStatus::BestCurrentPractice,
        RfcStatus::DraftStandard,
        RfcStatus::Experimental,
        RfcStatus::Historic,
        RfcStatus::Informational,
        RfcStatus::InternetStandard,
        RfcStatus::ProposedStandard,
        RfcStatus::Undefined,
    ];

    /// Stored code
    pub fn code(&self) -> &'static str {
        match self {
            RfcStatus::BestCurrentPractice => "BCP",
            RfcStatus::DraftStandard => "DST",
            RfcStatus::Experimental => "EXP",
            RfcStatus::Historic => "HST",
            RfcStatus::Informational => "INF",
            RfcStatus::InternetStandard => "IST",
            RfcStatus::ProposedStandard => "PST",
            RfcStatus::Undefined => "UND",
        }
    }

    /// Human readable label shown on the RFC page
    pub fn label(&self) -> &'static str {
        match self {
            RfcStatus::BestCurrentPractice => "Best Current Practise",
            RfcStatus::DraftStandard => "Draft Standard",
            RfcStatus::Experimental => "Experimental",
            RfcStatus::Historic => "Historic",
            RfcStatus::Informational => "Informational",
            RfcStatus::InternetStandard => "Internet Standard",
            RfcStatus::ProposedStandard => "Proposed Standard",
            RfcStatus::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for RfcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A status code outside the fixed table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown RFC status code: {0}")]
pub struct UnknownRfcStatus(pub String);

impl FromStr for RfcStatus {
    type Err = UnknownRfcStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RfcStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownRfcStatus(s.to_string()))
    }
}

impl TryFrom<String> for RfcStatus {
    type Error = UnknownRfcStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// RFC record in database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rfc {
    #[schema(example = 8446)]
    pub number: i64,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub status: RfcStatus,
    pub is_draft: bool,
}

impl Rfc {
    /// Canonical location of the document text
    pub fn url(&self) -> String {
        format!("https://www.rfc-editor.org/rfc/rfc{}", self.number)
    }
}
