use serde::Serialize;

/// One scored reference entry in a query's ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub sample_id: String,
    pub sequence_id: String,
    pub similarity_score: f64,
    pub taxonomy: Option<String>,
}

/// Ranking for a single query sequence.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub query_sequence: String,
    pub query_length: usize,
    pub matches_found: usize,
    pub results: Vec<Match>,
}

/// Ranking for one record of a batch query.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceMatches {
    pub query_sequence_id: String,
    pub query_length: usize,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchQueryResult {
    pub total_sequences: usize,
    pub results: Vec<SequenceMatches>,
}
