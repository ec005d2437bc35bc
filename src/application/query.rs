use crate::domain::entities::match_result::{BatchQueryResult, Match, QueryResult, SequenceMatches};
use crate::domain::entities::reference_store::ReferenceStore;
use crate::domain::entities::sequence_record::SequenceRecord;
use crate::domain::error::DomainError;
use crate::domain::services::similarity::cosine_similarity;
use crate::domain::values::frequency_vector::FrequencyVector;
use rayon::prelude::*;
use std::sync::Arc;

pub const DEFAULT_TOP_K: usize = 5;

/// Exact brute-force ranking of query sequences against one store snapshot.
pub struct QueryUseCase {
    store: Arc<ReferenceStore>,
}

impl QueryUseCase {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self { store }
    }

    pub fn query_one(&self, sequence: &str, top_k: usize) -> Result<QueryResult, DomainError> {
        check_top_k(top_k)?;
        let query_length = sequence.chars().count();
        let k = self.store.k().value();
        if query_length < k {
            return Err(DomainError::InvalidInput(format!(
                "Sequence must be at least {k} bases long, got {query_length}"
            )));
        }

        let query_vector = self.store.encoder().encode(sequence);
        let results = self.rank(&query_vector, top_k)?;
        log::debug!(
            "Query of length {query_length} scored against {} entries, {} returned",
            self.store.len(),
            results.len()
        );
        Ok(QueryResult {
            query_sequence: sequence.to_string(),
            query_length,
            matches_found: results.len(),
            results,
        })
    }

    /// Ranks every record independently. The batch is all-or-nothing: all
    /// records are length-checked in input order before any scoring, and the
    /// first undersized one fails the whole call.
    pub fn query_many(&self, records: &[SequenceRecord], top_k: usize) -> Result<BatchQueryResult, DomainError> {
        if records.is_empty() {
            return Err(DomainError::InvalidInput(
                "No valid sequences found in FASTA content".into(),
            ));
        }
        check_top_k(top_k)?;
        let k = self.store.k().value();
        for record in records {
            let len = record.sequence.chars().count();
            if len < k {
                return Err(DomainError::InvalidInput(format!(
                    "Sequence '{}' must be at least {k} bases long, got {len}",
                    record.id
                )));
            }
        }

        let results = records
            .par_iter()
            .map(|record| -> Result<SequenceMatches, DomainError> {
                let query_vector = self.store.encoder().encode(&record.sequence);
                Ok(SequenceMatches {
                    query_sequence_id: record.id.clone(),
                    query_length: record.sequence.chars().count(),
                    matches: self.rank(&query_vector, top_k)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Batch of {} sequences scored against {} entries",
            results.len(),
            self.store.len()
        );
        Ok(BatchQueryResult {
            total_sequences: records.len(),
            results,
        })
    }

    /// One match per entry, sorted by descending score. The sort is stable so
    /// equal scores keep store order.
    fn rank(&self, query_vector: &FrequencyVector, top_k: usize) -> Result<Vec<Match>, DomainError> {
        let mut matches = self
            .store
            .entries()
            .par_iter()
            .map(|entry| -> Result<Match, DomainError> {
                let similarity_score = cosine_similarity(query_vector, &entry.vector)?;
                log::trace!("{}/{} -> {similarity_score}", entry.sample_id, entry.sequence_id);
                Ok(Match {
                    sample_id: entry.sample_id.clone(),
                    sequence_id: entry.sequence_id.clone(),
                    similarity_score,
                    taxonomy: entry.taxonomy.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        matches.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        matches.truncate(top_k);
        Ok(matches)
    }
}

fn check_top_k(top_k: usize) -> Result<(), DomainError> {
    if top_k == 0 {
        return Err(DomainError::InvalidInput("top_k must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::reference_entry::ReferenceEntry;
    use crate::domain::values::kmer_size::KmerSize;

    /// k=1 store with hand-picked vectors over (A, T, C, G).
    fn store(vectors: &[(&str, [f64; 4])]) -> Arc<ReferenceStore> {
        let entries = vectors
            .iter()
            .map(|(id, v)| ReferenceEntry {
                sample_id: "s".into(),
                sequence_id: id.to_string(),
                sequence: String::new(),
                taxonomy: None,
                vector: FrequencyVector::from_values(v.to_vec()),
            })
            .collect();
        Arc::new(ReferenceStore::from_entries(KmerSize::new(1).unwrap(), entries).unwrap())
    }

    fn ids(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.sequence_id.as_str()).collect()
    }

    #[test]
    fn test_ranking_descending_and_stable() {
        // Query "AAAA" encodes to (1, 0, 0, 0).
        let uc = QueryUseCase::new(store(&[
            ("zero", [0.0, 1.0, 0.0, 0.0]),
            ("half_a", [0.5, 0.5, 0.0, 0.0]),
            ("exact", [1.0, 0.0, 0.0, 0.0]),
            ("half_b", [0.5, 0.0, 0.5, 0.0]),
        ]));
        let result = uc.query_one("AAAA", 4).unwrap();
        assert_eq!(ids(&result.results), vec!["exact", "half_a", "half_b", "zero"]);
        assert!((result.results[0].similarity_score - 1.0).abs() < 1e-12);
        assert!((result.results[1].similarity_score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(result.results[3].similarity_score, 0.0);
    }

    #[test]
    fn test_top_k_truncates() {
        let uc = QueryUseCase::new(store(&[
            ("a", [1.0, 0.0, 0.0, 0.0]),
            ("b", [0.0, 1.0, 0.0, 0.0]),
            ("c", [0.5, 0.5, 0.0, 0.0]),
        ]));
        let result = uc.query_one("AAAA", 2).unwrap();
        assert_eq!(ids(&result.results), vec!["a", "c"]);
        assert_eq!(result.matches_found, 2);
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let uc = QueryUseCase::new(store(&[("a", [1.0, 0.0, 0.0, 0.0])]));
        assert!(matches!(uc.query_one("AAAA", 0), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_batch_rejects_before_scoring() {
        let uc = QueryUseCase::new(store(&[("a", [1.0, 0.0, 0.0, 0.0])]));
        let records = vec![SequenceRecord::new("ok", "ACGT"), SequenceRecord::new("bad", "")];
        let err = uc.query_many(&records, 5).unwrap_err();
        assert!(err.to_string().contains("'bad'"));
    }
}
