use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::entities::reference_entry::{ReferenceEntry, ReferenceRecord};
use crate::domain::error::DomainError;
use crate::domain::services::encoder::KmerEncoder;
use crate::domain::values::kmer_size::KmerSize;

/// Ordered reference collection plus the encoder every vector was built with.
///
/// Every entry's vector has exactly `4^k` dimensions; stores are built in one
/// go and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStore {
    encoder: KmerEncoder,
    entries: Vec<ReferenceEntry>,
}

/// Read-only summary of a store. Fields that depend on at least one entry
/// are omitted for an empty store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    pub total_sequences: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_dimension: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k_mer_size: Option<usize>,
}

impl ReferenceStore {
    pub fn empty(k: KmerSize) -> Self {
        Self {
            encoder: KmerEncoder::new(k),
            entries: Vec::new(),
        }
    }

    /// Encodes every record with `encoder`, keeping input order.
    pub fn from_records(encoder: KmerEncoder, records: Vec<ReferenceRecord>) -> Self {
        let entries = records
            .into_par_iter()
            .map(|record| {
                let vector = encoder.encode(&record.sequence);
                ReferenceEntry {
                    sample_id: record.sample_id,
                    sequence_id: record.sequence_id,
                    sequence: record.sequence,
                    taxonomy: record.taxonomy,
                    vector,
                }
            })
            .collect();
        Self { encoder, entries }
    }

    /// Reassembles a store from already-encoded entries, rejecting any entry
    /// whose vector was not built for `k` or holds NaN, infinite or negative
    /// values.
    pub fn from_entries(k: KmerSize, entries: Vec<ReferenceEntry>) -> Result<Self, DomainError> {
        let encoder = KmerEncoder::new(k);
        let dimension = encoder.dimension();
        if let Some((pos, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.vector.dimension() != dimension)
        {
            return Err(DomainError::InvalidInput(format!(
                "Entry {pos} ({}/{}) has vector dimension {}, expected {dimension} for k={k}",
                entry.sample_id,
                entry.sequence_id,
                entry.vector.dimension()
            )));
        }
        if let Some((pos, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, e)| !e.vector.is_well_formed())
        {
            return Err(DomainError::InvalidInput(format!(
                "Entry {pos} ({}/{}) has NaN, infinite or negative vector values",
                entry.sample_id, entry.sequence_id
            )));
        }
        Ok(Self { encoder, entries })
    }

    pub fn encoder(&self) -> &KmerEncoder {
        &self.encoder
    }

    pub fn k(&self) -> KmerSize {
        self.encoder.k()
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn describe(&self) -> StoreSummary {
        let Some(first) = self.entries.first() else {
            return StoreSummary {
                total_sequences: 0,
                unique_samples: None,
                sample_ids: None,
                vector_dimension: None,
                k_mer_size: None,
            };
        };
        let samples: BTreeSet<&str> = self.entries.iter().map(|e| e.sample_id.as_str()).collect();
        StoreSummary {
            total_sequences: self.entries.len(),
            unique_samples: Some(samples.len()),
            sample_ids: Some(samples.into_iter().map(String::from).collect()),
            vector_dimension: Some(first.vector.dimension()),
            k_mer_size: Some(self.k().value()),
        }
    }
}
