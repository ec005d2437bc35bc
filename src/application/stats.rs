use crate::domain::entities::reference_store::{ReferenceStore, StoreSummary};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub reference_sequences: usize,
    pub vectorizer_ready: bool,
    pub k_mer_size: usize,
}

pub struct StatsUseCase {
    store: Arc<ReferenceStore>,
}

impl StatsUseCase {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self { store }
    }

    pub fn describe(&self) -> StoreSummary {
        self.store.describe()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".into(),
            reference_sequences: self.store.len(),
            vectorizer_ready: true,
            k_mer_size: self.store.k().value(),
        }
    }
}
