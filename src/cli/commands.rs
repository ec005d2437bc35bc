use crate::application::query::DEFAULT_TOP_K;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "asvsearch",
    about = "Compare ASV sequences against a reference set using k-mer vectors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank reference entries against a single sequence
    Query {
        /// DNA sequence (A/C/G/T, N treated as A)
        sequence: String,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// Rank reference entries against every record of a FASTA file
    Fasta {
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// Show reference store summary
    Info,
    /// Report whether the service is ready to answer queries
    Health,
    /// Rebuild the reference store from a FASTA file
    Build {
        fasta: PathBuf,
        /// Tab-separated sequence_id/taxonomy mapping
        #[arg(long)]
        taxonomy: Option<PathBuf>,
        /// Sample id for every record (default: reference)
        #[arg(long)]
        sample_id: Option<String>,
    },
    /// Replace the reference store with the built-in sample set
    Seed,
}
