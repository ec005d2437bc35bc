use serde::{Deserialize, Serialize};

/// Dense k-mer frequency vector. Entries sum to 1.0 when the source sequence
/// produced at least one valid k-mer, otherwise every entry is 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyVector(Vec<f64>);

impl FrequencyVector {
    pub fn zeros(dimension: usize) -> Self {
        FrequencyVector(vec![0.0; dimension])
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        FrequencyVector(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    /// Every entry is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.0.iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Little-endian `f64` bytes; decoding gives back the exact same bits.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    pub fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() % 8 != 0 {
            return None;
        }
        let values = bytes
            .chunks_exact(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(chunk);
                f64::from_le_bytes(buf)
            })
            .collect();
        Some(FrequencyVector(values))
    }
}
