// Technology Lookup Model
// Protocol versions and the four algorithm families a cipher suite is built from

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Which lookup table a technology row comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyKind {
    ProtocolVersion,
    KexAlgorithm,
    AuthAlgorithm,
    EncAlgorithm,
    HashAlgorithm,
}

impl TechnologyKind {
    /// All kinds in the order they are shown on a cipher suite page
    pub const ALL: [TechnologyKind; 5] = [
        TechnologyKind::ProtocolVersion,
        TechnologyKind::KexAlgorithm,
        TechnologyKind::AuthAlgorithm,
        TechnologyKind::EncAlgorithm,
        TechnologyKind::HashAlgorithm,
    ];
}

/// A lookup row: short identifier plus human readable name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Technology {
    pub short_name: String,
    pub long_name: String,
}

/// A lookup row tagged with its kind, used for cross-linking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RelatedTechnology {
    pub kind: TechnologyKind,
    pub short_name: String,
    pub long_name: String,
}

impl RelatedTechnology {
    pub fn new(kind: TechnologyKind, technology: Technology) -> Self {
        Self {
            kind,
            short_name: technology.short_name,
            long_name: technology.long_name,
        }
    }
}
