// Cipher Suite Model
// A named combination of protocol version, kex, auth, enc and hash algorithms

use crate::db::models::technology::{RelatedTechnology, Technology, TechnologyKind};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Column list shared by every cipher suite query, qualified with the `cs` alias
pub const CIPHER_SUITE_COLUMNS: &str = "cs.name, cs.hex_byte_1, cs.hex_byte_2, cs.openssl_name, \
     cs.gnutls_name, cs.protocol_version, cs.kex_algorithm, cs.auth_algorithm, \
     cs.enc_algorithm, cs.hash_algorithm";

/// Cipher suite record in database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CipherSuite {
    /// IANA name, unique
    #[schema(example = "TLS_AES_128_GCM_SHA256")]
    pub name: String,
    #[schema(example = "0x13")]
    pub hex_byte_1: String,
    #[schema(example = "0x01")]
    pub hex_byte_2: String,
    pub openssl_name: Option<String>,
    pub gnutls_name: Option<String>,
    pub protocol_version: String,
    pub kex_algorithm: String,
    pub auth_algorithm: String,
    pub enc_algorithm: String,
    pub hash_algorithm: String,
}

impl CipherSuite {
    /// Two-byte code point as written in the registries, e.g. "0x13,0x01"
    pub fn hex_code(&self) -> String {
        format!("{},{}", self.hex_byte_1, self.hex_byte_2)
    }

    /// Foreign key value for the given lookup kind
    pub fn technology_key(&self, kind: TechnologyKind) -> &str {
        match kind {
            TechnologyKind::ProtocolVersion => &self.protocol_version,
            TechnologyKind::KexAlgorithm => &self.kex_algorithm,
            TechnologyKind::AuthAlgorithm => &self.auth_algorithm,
            TechnologyKind::EncAlgorithm => &self.enc_algorithm,
            TechnologyKind::HashAlgorithm => &self.hash_algorithm,
        }
    }
}

/// Cipher suite joined with the long names of its five lookup rows
#[derive(Debug, Clone, FromRow)]
pub struct CipherSuiteDetailRow {
    #[sqlx(flatten)]
    pub suite: CipherSuite,
    pub protocol_version_long_name: String,
    pub kex_algorithm_long_name: String,
    pub auth_algorithm_long_name: String,
    pub enc_algorithm_long_name: String,
    pub hash_algorithm_long_name: String,
}

impl CipherSuiteDetailRow {
    /// SELECT for a single suite with its lookup long names, keyed by `placeholder`
    pub fn select_sql(placeholder: &str) -> String {
        format!(
            r#"
            SELECT {columns},
                   pv.long_name AS protocol_version_long_name,
                   kx.long_name AS kex_algorithm_long_name,
                   au.long_name AS auth_algorithm_long_name,
                   en.long_name AS enc_algorithm_long_name,
                   hs.long_name AS hash_algorithm_long_name
            FROM cipher_suites cs
            JOIN protocol_versions pv ON pv.short_name = cs.protocol_version
            JOIN kex_algorithms kx ON kx.short_name = cs.kex_algorithm
            JOIN auth_algorithms au ON au.short_name = cs.auth_algorithm
            JOIN enc_algorithms en ON en.short_name = cs.enc_algorithm
            JOIN hash_algorithms hs ON hs.short_name = cs.hash_algorithm
            WHERE cs.name = {placeholder}
            "#,
            columns = CIPHER_SUITE_COLUMNS,
            placeholder = placeholder,
        )
    }

    /// Split into the suite and its related technologies, in display order
    pub fn into_parts(self) -> (CipherSuite, Vec<RelatedTechnology>) {
        let long_names = [
            self.protocol_version_long_name,
            self.kex_algorithm_long_name,
            self.auth_algorithm_long_name,
            self.enc_algorithm_long_name,
            self.hash_algorithm_long_name,
        ];

        let related = TechnologyKind::ALL
            .into_iter()
            .zip(long_names)
            .map(|(kind, long_name)| {
                RelatedTechnology::new(
                    kind,
                    Technology {
                        short_name: self.suite.technology_key(kind).to_string(),
                        long_name,
                    },
                )
            })
            .collect();

        (self.suite, related)
    }
}
