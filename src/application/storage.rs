use crate::application::build::BuildUseCase;
use crate::domain::entities::reference_store::ReferenceStore;
use crate::domain::error::DomainError;
use crate::domain::ports::reference_repository::ReferenceRepository;
use crate::domain::values::kmer_size::KmerSize;
use std::sync::Arc;

pub struct StorageUseCase {
    repo: Arc<dyn ReferenceRepository>,
}

impl StorageUseCase {
    pub fn new(repo: Arc<dyn ReferenceRepository>) -> Self {
        Self { repo }
    }

    pub fn persist(&self, store: &ReferenceStore) -> Result<(), DomainError> {
        self.repo.save(store)
    }

    pub fn restore(&self) -> Result<Option<ReferenceStore>, DomainError> {
        self.repo.load()
    }

    /// Restores the persisted store, or builds and persists the seed set when
    /// nothing is stored yet. Corrupt storage is returned as an error and is
    /// never replaced by the seed.
    pub fn load_or_seed(&self, k: KmerSize) -> Result<ReferenceStore, DomainError> {
        if let Some(store) = self.repo.load()? {
            if store.k() != k {
                log::warn!(
                    "Stored reference vectors use k={} but k={} is configured; keeping k={}. Rebuild the store to change k.",
                    store.k(),
                    k,
                    store.k()
                );
            }
            return Ok(store);
        }
        let store = BuildUseCase::new(k).seed_sample();
        log::info!(
            "No reference store at {}; seeding {} built-in entries",
            self.repo.location(),
            store.len()
        );
        self.repo.save(&store)?;
        Ok(store)
    }
}
