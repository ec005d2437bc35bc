use crate::domain::values::frequency_vector::FrequencyVector;
use serde::{Deserialize, Serialize};

/// Sample id given to records ingested without an explicit sample.
pub const DEFAULT_SAMPLE_ID: &str = "reference";

/// Input to a reference build: one sequence plus its labels, not yet encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub sample_id: String,
    pub sequence_id: String,
    pub sequence: String,
    pub taxonomy: Option<String>,
}

impl ReferenceRecord {
    pub fn new(
        sample_id: impl Into<String>,
        sequence_id: impl Into<String>,
        sequence: impl Into<String>,
        taxonomy: Option<String>,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            sequence_id: sequence_id.into(),
            sequence: sequence.into(),
            taxonomy,
        }
    }
}

/// A reference sequence together with its precomputed frequency vector.
///
/// `sequence_id` is not unique across samples: the same ASV may appear in
/// several of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub sample_id: String,
    pub sequence_id: String,
    pub sequence: String,
    pub taxonomy: Option<String>,
    pub vector: FrequencyVector,
}
