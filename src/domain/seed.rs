//! Built-in fallback reference set used when no persisted store exists.

use crate::domain::entities::reference_entry::ReferenceRecord;

const ESCHERICHIA_V4: &str = concat!(
    "TACGTAGGGGGCAAGCGTTATCCGGATTTACTGGGTGTAAAGGGAGCGTAGACGGTGAGTTAAGTCTGAAGTAAAGGCAG",
    "TGGCTCAACCACTGTACGTGTTGGAAACTGACTCACTTGAGTGCAGAAGAGGAGAGTGGAACTCCATGTGTAGCGGTGAA",
    "ATGCGTAGATATATGGAGGAACACCAGTGGCGAAGGCGACTCTCTGGTCTGTAACTGACGCTGAGGCGCGAAAGCGTGGG",
    "GAGCAAACAGG",
);

const LACTOBACILLUS_V4: &str = concat!(
    "TACGTAGGTGGCAAGCGTTGTCCGGATTTACTGGGTGTAAAGGGAGCGTAGACGGCTTTGTAAGTCTGATGTGAAAGCCC",
    "GGGGCTCAACCCCGGGACTGCATTGGAAACTGGCATACTTGAGTGCAGGAGAGGAGAGTGGAACTCCATGTGTAGCGGTG",
    "AAATGCGTAGATATATGGAGGAACACCAGTGGCGAAGGCGACTCTCTGGTCTGTAACTGACGCTGAGGCGCGAAAGCGTG",
    "GGGAGCAAACAGG",
);

/// Four 16S V4 amplicons over three samples. The second variant recurs in
/// every sample, each time with its own taxonomy label.
pub fn seed_records() -> Vec<ReferenceRecord> {
    vec![
        ReferenceRecord::new(
            "sample1",
            "asv1",
            ESCHERICHIA_V4,
            Some("Bacteria;Proteobacteria;Gammaproteobacteria;Enterobacteriales;Enterobacteriaceae;Escherichia".to_string()),
        ),
        ReferenceRecord::new(
            "sample1",
            "asv2",
            LACTOBACILLUS_V4,
            Some("Bacteria;Firmicutes;Bacilli;Lactobacillales;Lactobacillaceae;Lactobacillus".to_string()),
        ),
        ReferenceRecord::new(
            "sample2",
            "asv1",
            LACTOBACILLUS_V4,
            Some("Bacteria;Firmicutes;Bacilli;Lactobacillales;Lactobacillaceae;Lactobacillus".to_string()),
        ),
        ReferenceRecord::new(
            "sample3",
            "asv1",
            LACTOBACILLUS_V4,
            Some("Bacteria;Bacteroidetes;Bacteroidia;Bacteroidales;Bacteroidaceae;Bacteroides".to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_records(), seed_records());
    }

    #[test]
    fn test_seed_shape() {
        let records = seed_records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.taxonomy.is_some()));
        assert!(records
            .iter()
            .all(|r| r.sequence.bytes().all(|b| b"ACGT".contains(&b))));
        assert_eq!(records[1].sequence, records[3].sequence);
    }
}
