// Repository Integration Tests
// Exercises the SQLite backend directly, below the HTTP layer

mod common;

use cipherdir::db::sorting::{CipherSuiteSortField, RfcSortField};
use cipherdir::db::*;
use common::*;

#[tokio::test]
async fn test_sqlite_database_creation() {
    let db = empty_database().await;

    assert_eq!(db.pool().db_type(), DatabaseType::Sqlite);
    assert!(db.pool().ping().await.is_ok());
    assert_eq!(db.cipher_suites().count_cipher_suites().await.unwrap(), 0);
    assert_eq!(db.rfcs().count_rfcs().await.unwrap(), 0);

    db.close().await;
}

#[tokio::test]
async fn test_reopening_keeps_schema_and_rows() {
    let config = test_config();

    let db = DirectoryDatabase::new(&config).await.unwrap();
    db.close().await;

    // Second open re-runs the migrator against an up to date schema
    let db = DirectoryDatabase::new(&config).await.unwrap();
    assert_eq!(db.rfcs().count_rfcs().await.unwrap(), 0);
    db.close().await;
}

#[tokio::test]
async fn test_counts() {
    let db = seeded_database().await;

    assert_eq!(
        db.cipher_suites().count_cipher_suites().await.unwrap(),
        SUITE_COUNT as u64
    );
    assert_eq!(db.rfcs().count_rfcs().await.unwrap(), RFCS.len() as u64);
}

#[tokio::test]
async fn test_list_window_follows_sort() {
    let db = seeded_database().await;
    let sort = CipherSuiteSort::new(CipherSuiteSortField::Hash, SortDirection::Desc);

    let window = db.cipher_suites().list_cipher_suites(sort, 10, 5).await.unwrap();

    let mut suites = seed_suites();
    suites.sort_by(|a, b| b.hash.cmp(a.hash).then_with(|| a.name.cmp(&b.name)));
    let expected: Vec<String> = suites[5..15].iter().map(|s| s.name.clone()).collect();
    let names: Vec<String> = window.into_iter().map(|s| s.name).collect();

    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_list_past_end_is_empty() {
    let db = seeded_database().await;

    let rfcs = db
        .rfcs()
        .list_rfcs(RfcSort::new(RfcSortField::Number, SortDirection::Asc), 10, 100)
        .await
        .unwrap();
    assert!(rfcs.is_empty());
}

#[tokio::test]
async fn test_cipher_suite_detail_row() {
    let db = seeded_database().await;
    let seed = &seed_suites()[5];

    let row = db
        .cipher_suites()
        .get_cipher_suite(&seed.name)
        .await
        .unwrap()
        .unwrap();
    let (suite, related) = row.into_parts();

    assert_eq!(suite.name, seed.name);
    assert_eq!(suite.openssl_name, None);
    assert_eq!(related.len(), 5);
    assert_eq!(related[0].kind, TechnologyKind::ProtocolVersion);
    assert_eq!(related[0].long_name, "Transport Layer Security");
    assert_eq!(related[3].short_name, seed.enc);

    assert!(db
        .cipher_suites()
        .get_cipher_suite("TLS_NULL_WITH_NULL_NULL")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_defining_rfcs_match_defined_suites() {
    let db = seeded_database().await;

    // The junction table answers both directions consistently
    for suite in seed_suites() {
        let rfcs: Vec<i64> = db
            .cipher_suites()
            .get_defining_rfcs(&suite.name)
            .await
            .unwrap()
            .into_iter()
            .map(|rfc| rfc.number)
            .collect();
        assert_eq!(rfcs, suite.defining_rfcs(), "{}", suite.name);

        for number in rfcs {
            let defined = db.rfcs().get_defined_cipher_suites(number).await.unwrap();
            assert!(defined.iter().any(|s| s.name == suite.name));
        }
    }
}

#[tokio::test]
async fn test_rfc_lookup() {
    let db = seeded_database().await;

    let rfc = db.rfcs().get_rfc(9999).await.unwrap().unwrap();
    assert_eq!(rfc.status, RfcStatus::Experimental);
    assert!(rfc.is_draft);

    assert!(db.rfcs().get_rfc(8446).await.unwrap().is_none());
}

#[tokio::test]
async fn test_related_documents_are_symmetric() {
    let db = seeded_database().await;

    for (a, b) in RELATED {
        let of_a: Vec<i64> = db
            .rfcs()
            .get_related_documents(a)
            .await
            .unwrap()
            .into_iter()
            .map(|rfc| rfc.number)
            .collect();
        let of_b: Vec<i64> = db
            .rfcs()
            .get_related_documents(b)
            .await
            .unwrap()
            .into_iter()
            .map(|rfc| rfc.number)
            .collect();

        assert!(of_a.contains(&b), "{} should relate to {}", a, b);
        assert!(of_b.contains(&a), "{} should relate to {}", b, a);
    }

    let unrelated = db.rfcs().get_related_documents(2246).await.unwrap();
    assert!(unrelated.is_empty());
}

#[tokio::test]
async fn test_static_page_lookup() {
    let db = seeded_database().await;

    let page = db
        .static_pages()
        .get_static_page(ABOUT_PAGE_SLUG)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.title, "About");

    assert!(db
        .static_pages()
        .get_static_page("imprint")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_ands_terms() {
    let db = seeded_database().await;
    let search = db.search();

    let lower = search.count_cipher_suite_matches("chacha").await.unwrap();
    let upper = search.count_cipher_suite_matches("CHACHA").await.unwrap();
    assert_eq!(lower, upper);
    assert_eq!(
        lower as usize,
        seed_suites()
            .iter()
            .filter(|s| s.enc == "CHACHA20 POLY1305")
            .count()
    );

    // Both terms must match
    let narrowed = search.count_cipher_suite_matches("chacha ephemeral").await.unwrap();
    let expected = seed_suites()
        .iter()
        .filter(|s| s.enc == "CHACHA20 POLY1305" && (s.kex == "DHE" || s.kex == "ECDHE"))
        .count();
    assert_eq!(narrowed as usize, expected);
    assert!(narrowed < lower);
}

#[tokio::test]
async fn test_search_matches_whole_words_only() {
    let db = seeded_database().await;
    let search = db.search();

    // Fragments of "the", "shell", "Hellman" and "ChaCha20"
    for fragment in ["he", "ell", "hellma", "chacha2"] {
        assert_eq!(search.count_cipher_suite_matches(fragment).await.unwrap(), 0, "{}", fragment);
        assert_eq!(search.count_rfc_matches(fragment).await.unwrap(), 0, "{}", fragment);
        assert!(search.search_cipher_suites(fragment, 15, 0).await.unwrap().is_empty());
    }

    // "128bit" in the long names is one word; "_128_" in the names is not
    let with_128 = seed_suites()
        .iter()
        .filter(|s| s.enc.split(' ').any(|word| word == "128"))
        .count();
    assert_eq!(search.count_cipher_suite_matches("128").await.unwrap() as usize, with_128);
    assert_eq!(search.count_cipher_suite_matches("128bit").await.unwrap() as usize, with_128);

    // Punctuation in the query splits words the same way it splits titles
    assert_eq!(search.count_rfc_matches("chacha20-poly1305").await.unwrap(), 1);
    assert_eq!(search.count_rfc_matches("diffie-hellman").await.unwrap(), 0);
}

#[tokio::test]
async fn test_search_pages_cover_count() {
    let db = seeded_database().await;
    let search = db.search();

    let total = search.count_cipher_suite_matches("secure hash").await.unwrap();
    assert_eq!(total as usize, SUITE_COUNT);

    let mut names = Vec::new();
    for offset in (0..total).step_by(15) {
        let page = search.search_cipher_suites("secure hash", 15, offset).await.unwrap();
        names.extend(page.into_iter().map(|s| s.name));
    }

    let mut expected: Vec<String> = seed_suites().into_iter().map(|s| s.name).collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_search_blank_term_runs_no_query() {
    let db = seeded_database().await;
    let search = db.search();

    assert_eq!(search.count_rfc_matches("   ").await.unwrap(), 0);
    assert!(search.search_rfcs("", 15, 0).await.unwrap().is_empty());
    assert!(search.search_cipher_suites(" ", 15, 0).await.unwrap().is_empty());
}
