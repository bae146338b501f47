// Shared fixtures for the integration tests
//
// Every test gets its own SQLite file with the schema migrated and a small,
// deterministic directory loaded into it.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cipherdir::api::{ApiConfig, ApiServer};
use cipherdir::db::{DatabaseConfig, DatabasePool, DirectoryDatabase};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Atomic counter to ensure unique database files across tests
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

pub const SUITE_COUNT: usize = 40;

pub const PROTOCOLS: [(&str, &str); 2] = [
    ("SSL", "Secure Sockets Layer"),
    ("TLS", "Transport Layer Security"),
];

pub const KEX: [(&str, &str); 4] = [
    ("DHE", "Diffie-Hellman Ephemeral"),
    ("ECDHE", "Elliptic Curve Diffie-Hellman Ephemeral"),
    ("PSK", "Pre-Shared Key"),
    ("RSA", "Rivest Shamir Adleman algorithm"),
];

pub const AUTH: [(&str, &str); 3] = [
    ("ECDSA", "Elliptic Curve Digital Signature Algorithm"),
    ("PSK", "Pre-Shared Key"),
    ("RSA", "Rivest Shamir Adleman algorithm"),
];

pub const ENC: [(&str, &str); 4] = [
    ("AES 128 GCM", "Advanced Encryption Standard with 128bit key in Galois/Counter mode"),
    ("AES 256 CBC", "Advanced Encryption Standard with 256bit key in Cipher Block Chaining mode"),
    ("CAMELLIA 128 CBC", "Camellia with 128bit key in Cipher Block Chaining mode"),
    ("CHACHA20 POLY1305", "ChaCha stream cipher and Poly1305 authenticator"),
];

pub const HASH: [(&str, &str); 3] = [
    ("SHA", "Secure Hash Algorithm 1"),
    ("SHA256", "Secure Hash Algorithm 256"),
    ("SHA384", "Secure Hash Algorithm 384"),
];

/// (number, title, status code, is_draft); RFC 8446 is deliberately absent
pub const RFCS: [(i64, &str, &str, bool); 12] = [
    (2246, "The TLS Protocol Version 1.0", "PST", false),
    (4279, "Pre-Shared Key Ciphersuites for Transport Layer Security (TLS)", "PST", false),
    (4346, "The Transport Layer Security (TLS) Protocol Version 1.1", "PST", false),
    (4492, "Elliptic Curve Cryptography (ECC) Cipher Suites for Transport Layer Security (TLS)", "INF", false),
    (5246, "The Transport Layer Security (TLS) Protocol Version 1.2", "PST", false),
    (5288, "AES Galois Counter Mode (GCM) Cipher Suites for TLS", "PST", false),
    (5932, "Camellia Cipher Suites for TLS", "PST", false),
    (6101, "The Secure Sockets Layer (SSL) Protocol Version 3.0", "HST", false),
    (7525, "Recommendations for Secure Use of Transport Layer Security (TLS)", "BCP", false),
    (7905, "ChaCha20-Poly1305 Cipher Suites for Transport Layer Security (TLS)", "PST", false),
    (8996, "Deprecating TLS 1.0 and TLS 1.1", "BCP", false),
    (9999, "Experimental Cipher Suite Registry Extensions", "EXP", true),
];

/// Related document pairs, each stored in one direction only
pub const RELATED: [(i64, i64); 3] = [(5246, 4346), (8996, 4346), (7525, 5246)];

/// A cipher suite row as loaded into the fixture database
#[derive(Debug, Clone)]
pub struct SeedSuite {
    pub name: String,
    pub hex_byte_2: String,
    pub protocol: &'static str,
    pub kex: &'static str,
    pub auth: &'static str,
    pub enc: &'static str,
    pub hash: &'static str,
}

impl SeedSuite {
    /// Lookup key for a sort field token
    pub fn sort_key(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "kex" => self.kex,
            "auth" => self.auth,
            "enc" => self.enc,
            "hash" => self.hash,
            other => panic!("unknown sort field {}", other),
        }
    }

    /// RFCs that define this suite in the fixture
    pub fn defining_rfcs(&self) -> Vec<i64> {
        let mut rfcs = Vec::new();
        if self.kex == "ECDHE" {
            rfcs.push(4492);
        }
        if self.enc == "AES 128 GCM" {
            rfcs.push(5288);
        }
        if self.enc == "CAMELLIA 128 CBC" {
            rfcs.push(5932);
        }
        if self.enc == "CHACHA20 POLY1305" {
            rfcs.push(7905);
        }
        rfcs
    }
}

/// The fixture's cipher suites, in insertion order
pub fn seed_suites() -> Vec<SeedSuite> {
    (0..SUITE_COUNT)
        .map(|i| {
            let kex = KEX[i % KEX.len()].0;
            let auth = AUTH[i % AUTH.len()].0;
            let enc = ENC[(i / 2) % ENC.len()].0;
            let hash = HASH[(i / 3) % HASH.len()].0;
            // Every tenth suite is an SSL one
            let protocol = if i % 10 == 0 { "SSL" } else { "TLS" };

            SeedSuite {
                name: format!(
                    "{}_{}_{}_WITH_{}_{}_{:02}",
                    protocol,
                    kex,
                    auth,
                    enc.replace(' ', "_"),
                    hash,
                    i
                ),
                hex_byte_2: format!("0x{:02X}", i),
                protocol,
                kex,
                auth,
                enc,
                hash,
            }
        })
        .collect()
}

/// Helper function to create a unique SQLite database path for each test
pub fn unique_db_path() -> PathBuf {
    let counter = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "cipherdirtest-{}-{}.db",
        std::process::id(),
        counter
    ));

    // Clean up any existing database file to ensure fresh start
    let _ = std::fs::remove_file(&path);

    path
}

pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

pub fn test_config() -> DatabaseConfig {
    DatabaseConfig::sqlite(unique_db_path()).with_migrations_dir(migrations_dir())
}

/// Migrated database without any rows
pub async fn empty_database() -> DirectoryDatabase {
    DirectoryDatabase::new(&test_config()).await.unwrap()
}

/// Migrated database loaded with the fixture directory
pub async fn seeded_database() -> DirectoryDatabase {
    let db = empty_database().await;
    seed(db.pool()).await;
    db
}

async fn seed(pool: &DatabasePool) {
    let DatabasePool::Sqlite(pool) = pool else {
        panic!("fixtures are loaded into SQLite only");
    };

    let lookups: [(&str, &[(&str, &str)]); 5] = [
        ("protocol_versions", &PROTOCOLS),
        ("kex_algorithms", &KEX),
        ("auth_algorithms", &AUTH),
        ("enc_algorithms", &ENC),
        ("hash_algorithms", &HASH),
    ];
    for (table, rows) in lookups {
        for (short_name, long_name) in rows {
            sqlx::query(&format!(
                "INSERT INTO {} (short_name, long_name) VALUES (?, ?)",
                table
            ))
            .bind(*short_name)
            .bind(*long_name)
            .execute(pool)
            .await
            .unwrap();
        }
    }

    for suite in seed_suites() {
        sqlx::query(
            "INSERT INTO cipher_suites (name, hex_byte_1, hex_byte_2, openssl_name, gnutls_name, \
             protocol_version, kex_algorithm, auth_algorithm, enc_algorithm, hash_algorithm) \
             VALUES (?, '0xC0', ?, NULL, NULL, ?, ?, ?, ?, ?)",
        )
        .bind(&suite.name)
        .bind(&suite.hex_byte_2)
        .bind(suite.protocol)
        .bind(suite.kex)
        .bind(suite.auth)
        .bind(suite.enc)
        .bind(suite.hash)
        .execute(pool)
        .await
        .unwrap();
    }

    for (number, title, status, is_draft) in RFCS {
        sqlx::query("INSERT INTO rfcs (number, title, status, is_draft) VALUES (?, ?, ?, ?)")
            .bind(number)
            .bind(title)
            .bind(status)
            .bind(is_draft)
            .execute(pool)
            .await
            .unwrap();
    }

    for suite in seed_suites() {
        for rfc in suite.defining_rfcs() {
            sqlx::query("INSERT INTO rfc_cipher_suites (rfc_number, cipher_suite_name) VALUES (?, ?)")
                .bind(rfc)
                .bind(&suite.name)
                .execute(pool)
                .await
                .unwrap();
        }
    }

    for (rfc_number, related_number) in RELATED {
        sqlx::query("INSERT INTO rfc_related_documents (rfc_number, related_number) VALUES (?, ?)")
            .bind(rfc_number)
            .bind(related_number)
            .execute(pool)
            .await
            .unwrap();
    }

    sqlx::query("INSERT INTO static_pages (slug, title, content) VALUES ('about', 'About', ?)")
        .bind("A directory of TLS cipher suites and the RFCs that define them.")
        .execute(pool)
        .await
        .unwrap();
}

/// Router over the given database with the default server settings
pub fn router(db: DirectoryDatabase) -> Router {
    router_with_config(ApiConfig::default(), db)
}

pub fn router_with_config(config: ApiConfig, db: DirectoryDatabase) -> Router {
    ApiServer::new(config, Arc::new(db)).build_router()
}

/// Issue a GET and decode the JSON body
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Names of the items on a JSON page, in order
pub fn item_names(page: &serde_json::Value) -> Vec<String> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}
