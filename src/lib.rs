pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::build::BuildUseCase;
use crate::application::query::QueryUseCase;
use crate::application::stats::{HealthStatus, StatsUseCase};
use crate::application::storage::StorageUseCase;
use crate::domain::entities::match_result::{BatchQueryResult, QueryResult};
use crate::domain::entities::reference_store::{ReferenceStore, StoreSummary};
use crate::domain::entities::sequence_record::SequenceRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::reference_repository::ReferenceRepository;
use crate::domain::values::kmer_size::KmerSize;
use crate::infrastructure::fasta::parse_fasta;
use crate::infrastructure::sqlite::reference_repo::SqliteReferenceRepo;
use crate::infrastructure::taxonomy::load_taxonomy_file;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Query service over one reference store.
///
/// The store is held as an immutable snapshot. Queries take a clone of the
/// current `Arc` and never hold the lock while scoring; rebuilds construct a
/// complete new store and swap it in.
pub struct AsvSearch {
    k: KmerSize,
    store: RwLock<Arc<ReferenceStore>>,
    storage_uc: Option<StorageUseCase>,
}

impl AsvSearch {
    /// Opens the store at `db_path`, seeding it when absent. The k used for
    /// seeding and rebuilding comes from `ASVSEARCH_K` (default 6).
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let k = match std::env::var("ASVSEARCH_K") {
            Ok(v) => v.parse::<KmerSize>()?,
            Err(_) => KmerSize::default(),
        };
        Self::with_repository(Arc::new(SqliteReferenceRepo::new(db_path)), k)
    }

    pub fn with_repository(repo: Arc<dyn ReferenceRepository>, k: KmerSize) -> Result<Self, DomainError> {
        let storage_uc = StorageUseCase::new(repo);
        let store = storage_uc.load_or_seed(k)?;
        Ok(Self {
            k,
            store: RwLock::new(Arc::new(store)),
            storage_uc: Some(storage_uc),
        })
    }

    /// In-memory service without durable storage.
    pub fn with_store(store: ReferenceStore) -> Self {
        Self {
            k: store.k(),
            store: RwLock::new(Arc::new(store)),
            storage_uc: None,
        }
    }

    pub fn snapshot(&self) -> Result<Arc<ReferenceStore>, DomainError> {
        self.store
            .read()
            .map(|s| Arc::clone(&*s))
            .map_err(|e| DomainError::State(e.to_string()))
    }

    fn swap(&self, store: ReferenceStore) -> Result<(), DomainError> {
        let mut guard = self.store.write().map_err(|e| DomainError::State(e.to_string()))?;
        *guard = Arc::new(store);
        Ok(())
    }

    fn storage(&self) -> Result<&StorageUseCase, DomainError> {
        self.storage_uc
            .as_ref()
            .ok_or_else(|| DomainError::State("no durable storage configured".into()))
    }

    pub fn query_one(&self, sequence: &str, top_k: usize) -> Result<QueryResult, DomainError> {
        QueryUseCase::new(self.snapshot()?).query_one(sequence, top_k)
    }

    pub fn query_many(&self, records: &[SequenceRecord], top_k: usize) -> Result<BatchQueryResult, DomainError> {
        QueryUseCase::new(self.snapshot()?).query_many(records, top_k)
    }

    pub fn query_fasta(&self, content: &str, top_k: usize) -> Result<BatchQueryResult, DomainError> {
        self.query_many(&parse_fasta(content), top_k)
    }

    pub async fn query_fasta_file(&self, path: &Path, top_k: usize) -> Result<BatchQueryResult, DomainError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::InvalidInput(format!("cannot read {}: {e}", path.display())))?;
        self.query_fasta(&content, top_k)
    }

    pub fn describe(&self) -> Result<StoreSummary, DomainError> {
        Ok(StatsUseCase::new(self.snapshot()?).describe())
    }

    pub fn health(&self) -> Result<HealthStatus, DomainError> {
        Ok(StatsUseCase::new(self.snapshot()?).health())
    }

    pub fn persist(&self) -> Result<(), DomainError> {
        let store = self.snapshot()?;
        self.storage()?.persist(&store)
    }

    /// Reloads from durable storage. `Ok(false)` when nothing is stored, in
    /// which case the current snapshot is kept.
    pub fn restore(&self) -> Result<bool, DomainError> {
        match self.storage()?.restore()? {
            Some(store) => {
                self.swap(store)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replaces the store with the built-in seed set and persists it.
    pub fn reseed(&self) -> Result<StoreSummary, DomainError> {
        let store = BuildUseCase::new(self.k).seed_sample();
        self.install(store)
    }

    pub fn rebuild_from_records(
        &self,
        records: Vec<SequenceRecord>,
        taxonomy: Option<&std::collections::HashMap<String, String>>,
        sample_id: Option<&str>,
    ) -> Result<StoreSummary, DomainError> {
        let store = BuildUseCase::new(self.k).build_from_records(records, taxonomy, sample_id);
        self.install(store)
    }

    /// Builds a new store from a FASTA file and optional taxonomy TSV,
    /// persists it, then swaps it in. Entries are keyed on the first word of
    /// each header, which is also the taxonomy lookup key.
    pub async fn rebuild_from_fasta(
        &self,
        fasta_path: &Path,
        taxonomy_path: Option<&Path>,
        sample_id: Option<&str>,
    ) -> Result<StoreSummary, DomainError> {
        let content = tokio::fs::read_to_string(fasta_path)
            .await
            .map_err(|e| DomainError::InvalidInput(format!("cannot read {}: {e}", fasta_path.display())))?;
        let records: Vec<SequenceRecord> = parse_fasta(&content)
            .into_iter()
            .map(|r| {
                let id = r.record_id().to_string();
                SequenceRecord::new(id, r.sequence)
            })
            .collect();
        if records.is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "No valid sequences found in {}",
                fasta_path.display()
            )));
        }
        let taxonomy = taxonomy_path.map(load_taxonomy_file).transpose()?;
        self.rebuild_from_records(records, taxonomy.as_ref(), sample_id)
    }

    fn install(&self, store: ReferenceStore) -> Result<StoreSummary, DomainError> {
        if let Some(storage) = &self.storage_uc {
            storage.persist(&store)?;
        }
        let summary = store.describe();
        self.swap(store)?;
        Ok(summary)
    }
}
