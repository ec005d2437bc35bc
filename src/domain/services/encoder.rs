//! Sequence to k-mer frequency vector encoding.

use crate::domain::values::frequency_vector::FrequencyVector;
use crate::domain::values::kmer_size::KmerSize;
use crate::domain::values::kmer_vocabulary::KmerVocabulary;

/// Encodes nucleotide strings into frequency vectors over a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerEncoder {
    vocabulary: KmerVocabulary,
}

impl KmerEncoder {
    pub fn new(k: KmerSize) -> Self {
        Self {
            vocabulary: KmerVocabulary::new(k),
        }
    }

    pub fn k(&self) -> KmerSize {
        self.vocabulary.k()
    }

    pub fn vocabulary(&self) -> &KmerVocabulary {
        &self.vocabulary
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// Uppercases and maps the ambiguity symbol `N` to `A`. Lossy on purpose:
    /// other IUPAC codes are left alone and later invalidate their windows.
    pub fn normalize(sequence: &str) -> String {
        sequence
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'N' => 'A',
                other => other,
            })
            .collect()
    }

    /// Vocabulary indices of every valid window, in sequence order.
    pub fn tokenize(&self, sequence: &str) -> Vec<usize> {
        let normalized = Self::normalize(sequence);
        let bytes = normalized.as_bytes();
        let k = self.k().value();
        if bytes.len() < k {
            return Vec::new();
        }
        bytes
            .windows(k)
            .filter_map(|window| self.vocabulary.index_of(window))
            .collect()
    }

    /// Frequency of each vocabulary k-mer, normalised by the number of valid
    /// k-mers. Sequences without a single valid window give the zero vector.
    pub fn encode(&self, sequence: &str) -> FrequencyVector {
        let mut counts = vec![0u64; self.dimension()];
        let mut total = 0u64;
        for index in self.tokenize(sequence) {
            counts[index] += 1;
            total += 1;
        }
        if total == 0 {
            return FrequencyVector::zeros(self.dimension());
        }
        let total = total as f64;
        FrequencyVector::from_values(counts.into_iter().map(|c| c as f64 / total).collect())
    }
}

impl Default for KmerEncoder {
    fn default() -> Self {
        Self::new(KmerSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(k: usize) -> KmerEncoder {
        KmerEncoder::new(KmerSize::new(k).unwrap())
    }

    #[test]
    fn test_single_kmer_sequence() {
        let enc = encoder(6);
        let v = enc.encode("AAAAAA");
        assert_eq!(v.dimension(), 4096);
        assert_eq!(v.as_slice()[0], 1.0);
        assert_eq!(v.as_slice().iter().filter(|x| **x != 0.0).count(), 1);
    }

    #[test]
    fn test_sums_to_one() {
        let enc = encoder(3);
        let v = enc.encode("ACGTTGCAACGGT");
        let sum: f64 = v.as_slice().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lowercase_and_n_normalisation() {
        let enc = encoder(3);
        assert_eq!(enc.encode("acgnt"), enc.encode("ACGAT"));
    }

    #[test]
    fn test_invalid_symbols_drop_windows() {
        let enc = encoder(3);
        // Windows: AAR, ARA, RAA are invalid; AAA is the only valid one.
        let v = enc.encode("AAARAA");
        let idx = enc.vocabulary().index_of(b"AAA").unwrap();
        assert_eq!(v.as_slice()[idx], 1.0);
        assert_eq!(enc.tokenize("AAARAA").len(), 1);
    }

    #[test]
    fn test_normalised_by_valid_kmers_not_windows() {
        let enc = encoder(2);
        // Windows: AC, CY, YA, AC -> two valid, both AC.
        let v = enc.encode("ACYAC");
        let idx = enc.vocabulary().index_of(b"AC").unwrap();
        assert_eq!(v.as_slice()[idx], 1.0);
    }

    #[test]
    fn test_no_valid_kmer_gives_zero_vector() {
        let enc = encoder(4);
        assert!(enc.encode("ACG").is_zero());
        assert!(enc.encode("").is_zero());
        assert!(enc.encode("RYKMRYKM").is_zero());
    }

    #[test]
    fn test_deterministic() {
        let enc = encoder(5);
        let seq = "TACGTAGGGGGCAAGCGTTATCCGGATTTACTGGG";
        let a = enc.encode(seq);
        let b = enc.encode(seq);
        let bits_a: Vec<u64> = a.as_slice().iter().map(|x| x.to_bits()).collect();
        let bits_b: Vec<u64> = b.as_slice().iter().map(|x| x.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }
}
