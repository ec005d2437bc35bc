pub mod frequency_vector;
pub mod kmer_size;
pub mod kmer_vocabulary;
