pub mod fasta;
pub mod sqlite;
pub mod taxonomy;
