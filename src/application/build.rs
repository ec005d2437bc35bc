use crate::domain::entities::reference_entry::{ReferenceRecord, DEFAULT_SAMPLE_ID};
use crate::domain::entities::reference_store::ReferenceStore;
use crate::domain::entities::sequence_record::SequenceRecord;
use crate::domain::seed::seed_records;
use crate::domain::services::encoder::KmerEncoder;
use crate::domain::values::kmer_size::KmerSize;
use std::collections::HashMap;

pub struct BuildUseCase {
    encoder: KmerEncoder,
}

impl BuildUseCase {
    pub fn new(k: KmerSize) -> Self {
        Self {
            encoder: KmerEncoder::new(k),
        }
    }

    /// Encodes `records` in input order under `sample_id` (or the default
    /// `reference` sample). Ids missing from `taxonomy` get no taxonomy.
    pub fn build_from_records(
        &self,
        records: Vec<SequenceRecord>,
        taxonomy: Option<&HashMap<String, String>>,
        sample_id: Option<&str>,
    ) -> ReferenceStore {
        let sample_id = sample_id.unwrap_or(DEFAULT_SAMPLE_ID);
        let records: Vec<ReferenceRecord> = records
            .into_iter()
            .map(|r| {
                let tax = taxonomy.and_then(|t| t.get(&r.id).cloned());
                ReferenceRecord::new(sample_id, r.id, r.sequence, tax)
            })
            .collect();
        let store = ReferenceStore::from_records(self.encoder, records);
        let labelled = store.entries().iter().filter(|e| e.taxonomy.is_some()).count();
        log::info!(
            "Built reference store: {} entries ({labelled} with taxonomy), k={}",
            store.len(),
            store.k()
        );
        store
    }

    pub fn seed_sample(&self) -> ReferenceStore {
        ReferenceStore::from_records(self.encoder, seed_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_and_taxonomy_lookup() {
        let uc = BuildUseCase::new(KmerSize::new(3).unwrap());
        let mut tax = HashMap::new();
        tax.insert("b".to_string(), "Bacteria".to_string());
        let store = uc.build_from_records(
            vec![SequenceRecord::new("a", "ACGTAC"), SequenceRecord::new("b", "GGGTTT")],
            Some(&tax),
            None,
        );
        assert_eq!(store.entries()[0].sample_id, DEFAULT_SAMPLE_ID);
        assert_eq!(store.entries()[0].taxonomy, None);
        assert_eq!(store.entries()[1].taxonomy.as_deref(), Some("Bacteria"));
    }

    #[test]
    fn test_no_mapping_means_no_taxonomy() {
        let uc = BuildUseCase::new(KmerSize::new(3).unwrap());
        let store = uc.build_from_records(vec![SequenceRecord::new("a", "ACGTAC")], None, Some("soil"));
        assert_eq!(store.entries()[0].sample_id, "soil");
        assert!(store.entries()[0].taxonomy.is_none());
    }

    #[test]
    fn test_seed_sample() {
        let store = BuildUseCase::new(KmerSize::default()).seed_sample();
        let summary = store.describe();
        assert_eq!(summary.total_sequences, 4);
        assert_eq!(summary.unique_samples, Some(3));
        assert_eq!(summary.vector_dimension, Some(4096));
        assert_eq!(store, BuildUseCase::new(KmerSize::default()).seed_sample());
    }
}
