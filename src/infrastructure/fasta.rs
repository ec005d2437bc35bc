//! Minimal FASTA text reader.
//!
//! Headers are lines starting with `>`; the id is the rest of the line,
//! trimmed. Sequence lines are trimmed and concatenated until the next
//! header. Blank lines and anything before the first header are ignored.
//! A header with no sequence lines yields an empty sequence rather than an
//! error, leaving length checks to the query engine.

use crate::domain::entities::sequence_record::SequenceRecord;

pub fn parse_fasta(content: &str) -> Vec<SequenceRecord> {
    let mut records = Vec::new();
    let mut current: Option<SequenceRecord> = None;

    for line in content.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                records.push(done);
            }
            current = Some(SequenceRecord::new(header.trim(), String::new()));
        } else if !line.is_empty() {
            if let Some(record) = current.as_mut() {
                record.sequence.push_str(line);
            }
        }
    }
    if let Some(done) = current {
        records.push(done);
    }
    records
}
