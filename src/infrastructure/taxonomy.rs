//! Loader for `sequence_id<TAB>taxonomy` mapping files.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::domain::error::DomainError;

pub type TaxonomyMap = HashMap<String, String>;

/// Reads a headerless two-column TSV. Lines starting with `#` are skipped;
/// later duplicates of an id replace earlier ones.
pub fn read_taxonomy<R: Read>(reader: R) -> Result<TaxonomyMap, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut map = TaxonomyMap::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| DomainError::Parse(format!("taxonomy line {}: {e}", line + 1)))?;
        match (record.get(0), record.get(1)) {
            (Some(id), Some(taxonomy)) if !id.is_empty() => {
                map.insert(id.to_string(), taxonomy.to_string());
            }
            (Some(""), None) | (None, _) => {}
            _ => {
                return Err(DomainError::Parse(format!(
                    "taxonomy line {}: expected 'sequence_id<TAB>taxonomy'",
                    line + 1
                )))
            }
        }
    }
    Ok(map)
}

pub fn load_taxonomy_file(path: &Path) -> Result<TaxonomyMap, DomainError> {
    let file = std::fs::File::open(path)
        .map_err(|e| DomainError::Parse(format!("cannot open taxonomy file {}: {e}", path.display())))?;
    let map = read_taxonomy(file)?;
    log::info!("Loaded {} taxonomy assignments from {}", map.len(), path.display());
    Ok(map)
}
