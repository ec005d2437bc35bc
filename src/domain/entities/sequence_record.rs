use serde::{Deserialize, Serialize};

/// An identified raw sequence, as produced by the FASTA reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// First whitespace-separated word of the header, without the description.
    pub fn record_id(&self) -> &str {
        self.id.split_whitespace().next().unwrap_or("")
    }
}
