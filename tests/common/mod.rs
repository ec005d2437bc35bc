//! Shared test helpers.

#![allow(dead_code)]

use asvsearch::domain::entities::reference_store::ReferenceStore;
use asvsearch::domain::seed::seed_records;
use asvsearch::domain::services::encoder::KmerEncoder;
use asvsearch::domain::values::kmer_size::KmerSize;
use asvsearch::infrastructure::sqlite::reference_repo::SqliteReferenceRepo;
use asvsearch::AsvSearch;
use std::path::Path;
use std::sync::Arc;

pub fn k(value: usize) -> KmerSize {
    KmerSize::new(value).unwrap()
}

pub fn seeded() -> AsvSearch {
    AsvSearch::with_store(ReferenceStore::from_records(
        KmerEncoder::new(KmerSize::default()),
        seed_records(),
    ))
}

pub fn open_at(path: &Path) -> AsvSearch {
    AsvSearch::with_repository(Arc::new(SqliteReferenceRepo::new(path)), KmerSize::default()).unwrap()
}
