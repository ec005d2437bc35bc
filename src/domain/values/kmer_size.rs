use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Length of the k-mers a vocabulary is built over.
///
/// Bounded above because the vocabulary (and every vector) has `4^k` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct KmerSize(usize);

impl KmerSize {
    pub const MIN: usize = 1;
    pub const MAX: usize = 10;

    pub fn new(value: usize) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidInput(format!(
                "k-mer size must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(KmerSize(value))
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// Number of distinct k-mers over the four-letter alphabet.
    pub fn vocabulary_size(&self) -> usize {
        4usize.pow(self.0 as u32)
    }
}

impl Default for KmerSize {
    fn default() -> Self {
        KmerSize(6)
    }
}

impl fmt::Display for KmerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KmerSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| DomainError::Parse(format!("Invalid k-mer size: '{s}'")))?;
        KmerSize::new(value)
    }
}

impl TryFrom<usize> for KmerSize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        KmerSize::new(value)
    }
}

impl From<KmerSize> for usize {
    fn from(k: KmerSize) -> Self {
        k.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(KmerSize::new(0).is_err());
        assert!(KmerSize::new(1).is_ok());
        assert!(KmerSize::new(10).is_ok());
        assert!(KmerSize::new(11).is_err());
    }

    #[test]
    fn test_default_is_six() {
        let k = KmerSize::default();
        assert_eq!(k.value(), 6);
        assert_eq!(k.vocabulary_size(), 4096);
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<KmerSize>().unwrap().value(), 4);
        assert!(matches!("abc".parse::<KmerSize>(), Err(DomainError::Parse(_))));
        assert!(matches!("42".parse::<KmerSize>(), Err(DomainError::InvalidInput(_))));
    }
}
