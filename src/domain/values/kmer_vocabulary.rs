//! Fixed enumeration of every k-mer over the nucleotide alphabet.
//!
//! Index `i` maps to the `i`-th string of the lexicographic product over
//! [`ALPHABET`] (`A < T < C < G`), so `AAA…A` is index 0 and `GGG…G` is
//! `4^k - 1`. The mapping is positional arithmetic, not a lookup table, so it
//! is identical in every process that uses the same k.

use crate::domain::values::kmer_size::KmerSize;

/// Nucleotides in vocabulary order.
pub const ALPHABET: [u8; 4] = [b'A', b'T', b'C', b'G'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerVocabulary {
    k: KmerSize,
}

impl KmerVocabulary {
    pub fn new(k: KmerSize) -> Self {
        Self { k }
    }

    pub fn k(&self) -> KmerSize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.k.vocabulary_size()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Vocabulary index of an uppercase k-mer, or `None` when the window has
    /// the wrong length or holds a symbol outside the alphabet.
    pub fn index_of(&self, kmer: &[u8]) -> Option<usize> {
        if kmer.len() != self.k.value() {
            return None;
        }
        kmer.iter().try_fold(0usize, |acc, &b| {
            base_rank(b).map(|rank| acc * ALPHABET.len() + rank)
        })
    }

    pub fn kmer_at(&self, index: usize) -> Option<String> {
        if index >= self.len() {
            return None;
        }
        let k = self.k.value();
        let mut kmer = vec![b'A'; k];
        let mut rest = index;
        for slot in kmer.iter_mut().rev() {
            *slot = ALPHABET[rest % ALPHABET.len()];
            rest /= ALPHABET.len();
        }
        String::from_utf8(kmer).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.len()).filter_map(move |i| self.kmer_at(i))
    }
}

fn base_rank(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'T' => Some(1),
        b'C' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}
