mod common;

use asvsearch::domain::entities::reference_store::ReferenceStore;
use asvsearch::domain::error::DomainError;
use asvsearch::domain::seed::seed_records;
use asvsearch::AsvSearch;
use common::{k, seeded};

#[test]
fn test_short_sequence_rejected_with_minimum_length() {
    let svc = seeded();
    let err = svc.query_one("ATCG", 5).unwrap_err();
    match err {
        DomainError::InvalidInput(msg) => assert!(msg.contains("at least 6"), "{msg}"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_short_sequence_rejected_for_every_k() {
    for kv in 1..=6 {
        let svc = AsvSearch::with_store(ReferenceStore::empty(k(kv)));
        let short = "A".repeat(kv - 1);
        assert!(
            matches!(svc.query_one(&short, 1), Err(DomainError::InvalidInput(_))),
            "k={kv}"
        );
    }
}

#[test]
fn test_exact_sequence_ranks_first() {
    let svc = seeded();
    let records = seed_records();
    let result = svc.query_one(&records[0].sequence, 5).unwrap();
    assert_eq!(result.query_length, records[0].sequence.len());
    assert_eq!(result.query_sequence, records[0].sequence);
    assert_eq!(result.matches_found, 4);
    let top = &result.results[0];
    assert_eq!((top.sample_id.as_str(), top.sequence_id.as_str()), ("sample1", "asv1"));
    assert!((top.similarity_score - 1.0).abs() < 1e-9);
    assert!(result
        .results
        .windows(2)
        .all(|w| w[0].similarity_score >= w[1].similarity_score));
}

#[test]
fn test_identical_references_keep_store_order() {
    let svc = seeded();
    let records = seed_records();
    let result = svc.query_one(&records[1].sequence, 3).unwrap();
    let order: Vec<(&str, &str)> = result
        .results
        .iter()
        .map(|m| (m.sample_id.as_str(), m.sequence_id.as_str()))
        .collect();
    assert_eq!(order, vec![("sample1", "asv2"), ("sample2", "asv1"), ("sample3", "asv1")]);
    assert_eq!(
        result.results[0].taxonomy.as_deref(),
        Some("Bacteria;Firmicutes;Bacilli;Lactobacillales;Lactobacillaceae;Lactobacillus")
    );
    assert_eq!(
        result.results[2].taxonomy.as_deref(),
        Some("Bacteria;Bacteroidetes;Bacteroidia;Bacteroidales;Bacteroidaceae;Bacteroides")
    );
}

#[test]
fn test_top_k_larger_than_store() {
    let svc = seeded();
    let result = svc.query_one("TACGTAGGGGGCAAGCGTTATCCGG", 50).unwrap();
    assert_eq!(result.matches_found, 4);
}

#[test]
fn test_empty_store_returns_no_matches() {
    let svc = AsvSearch::with_store(ReferenceStore::empty(k(6)));
    let result = svc.query_one("ACGTACGTACGT", 5).unwrap();
    assert_eq!(result.matches_found, 0);
    assert!(result.results.is_empty());
}

#[test]
fn test_sequence_without_valid_kmers_scores_zero() {
    let svc = seeded();
    let result = svc.query_one("RYKMRYKMRYKM", 5).unwrap();
    assert_eq!(result.matches_found, 4);
    assert!(result.results.iter().all(|m| m.similarity_score == 0.0));
}

#[test]
fn test_lowercase_and_n_are_normalised() {
    let svc = seeded();
    let upper = svc.query_one("TACGTAGGTGGCAAGCGTTGTCCGGA", 4).unwrap();
    let lower = svc.query_one("tacgtnggtggcnagcgttgtccgga", 4).unwrap();
    assert_eq!(lower.results, upper.results);
    assert_eq!(lower.query_length, upper.query_length);
}

#[test]
fn test_concurrent_queries_share_snapshot() {
    let svc = std::sync::Arc::new(seeded());
    let records = seed_records();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let svc = svc.clone();
            let seq = records[i % records.len()].sequence.clone();
            std::thread::spawn(move || svc.query_one(&seq, 1).unwrap())
        })
        .collect();
    for h in handles {
        let result = h.join().unwrap();
        assert!((result.results[0].similarity_score - 1.0).abs() < 1e-9);
    }
}
