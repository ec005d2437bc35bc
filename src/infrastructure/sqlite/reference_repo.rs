use crate::domain::entities::reference_entry::ReferenceEntry;
use crate::domain::entities::reference_store::ReferenceStore;
use crate::domain::error::DomainError;
use crate::domain::ports::reference_repository::ReferenceRepository;
use crate::domain::values::frequency_vector::FrequencyVector;
use crate::domain::values::kmer_size::KmerSize;
use crate::infrastructure::sqlite::migrations::{run_migrations, FORMAT_VERSION};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

const META_FORMAT_VERSION: &str = "format_version";
const META_K: &str = "k";
const META_SAVED_AT: &str = "saved_at";

/// Stores a whole reference set in one SQLite file.
///
/// Saves go to a sibling `.tmp` file which is renamed over the target once
/// committed, so an interrupted save never clobbers the previous copy.
pub struct SqliteReferenceRepo {
    path: PathBuf,
}

type RawRow = (String, String, String, Option<String>, Vec<u8>);

impl SqliteReferenceRepo {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_snapshot(&self, target: &Path, store: &ReferenceStore) -> Result<(), DomainError> {
        let mut conn = Connection::open(target)?;
        run_migrations(&conn)?;
        let tx = conn.transaction()?;
        {
            let mut meta = tx.prepare("INSERT INTO store_meta (key, value) VALUES (?1, ?2)")?;
            meta.execute(params![META_FORMAT_VERSION, FORMAT_VERSION.to_string()])?;
            meta.execute(params![META_K, store.k().to_string()])?;
            meta.execute(params![META_SAVED_AT, Utc::now().to_rfc3339()])?;

            let mut insert = tx.prepare(
                "INSERT INTO reference_entries (position, sample_id, sequence_id, sequence, taxonomy, vector)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (pos, entry) in store.entries().iter().enumerate() {
                insert.execute(params![
                    pos as i64,
                    entry.sample_id,
                    entry.sequence_id,
                    entry.sequence,
                    entry.taxonomy,
                    entry.vector.to_le_bytes(),
                ])?;
            }
        }
        tx.commit()?;
        conn.close()
            .map_err(|(_, e)| DomainError::Database(format!("Failed to close {}: {e}", target.display())))
    }

    fn read_meta(conn: &Connection, key: &str) -> Result<Option<String>, DomainError> {
        conn.query_row(
            "SELECT value FROM store_meta WHERE key = ?1",
            params![key],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| corrupt(format!("cannot read '{key}' metadata: {e}")))
    }

    fn read_store(&self, conn: &Connection) -> Result<ReferenceStore, DomainError> {
        let version = Self::read_meta(conn, META_FORMAT_VERSION)?
            .ok_or_else(|| corrupt("missing format_version".into()))?;
        if version.trim() != FORMAT_VERSION.to_string() {
            return Err(corrupt(format!(
                "unsupported format_version {version}, expected {FORMAT_VERSION}"
            )));
        }

        let k: KmerSize = Self::read_meta(conn, META_K)?
            .ok_or_else(|| corrupt("missing k".into()))?
            .parse::<KmerSize>()
            .map_err(|e| corrupt(e.to_string()))?;

        if let Some(saved_at) = Self::read_meta(conn, META_SAVED_AT)? {
            match DateTime::parse_from_rfc3339(&saved_at) {
                Ok(ts) => log::debug!("{} saved at {}", self.path.display(), ts.with_timezone(&Utc)),
                Err(_) => log::debug!("{} has unparseable saved_at '{saved_at}'", self.path.display()),
            }
        }

        let mut stmt = conn
            .prepare(
                "SELECT sample_id, sequence_id, sequence, taxonomy, vector
                 FROM reference_entries ORDER BY position",
            )
            .map_err(|e| corrupt(e.to_string()))?;
        let rows: Vec<RawRow> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })
            .map_err(|e| corrupt(e.to_string()))?
            .collect::<Result<Vec<RawRow>, _>>()
            .map_err(|e| corrupt(e.to_string()))?;

        let mut entries = Vec::with_capacity(rows.len());
        for (sample_id, sequence_id, sequence, taxonomy, blob) in rows {
            let vector = FrequencyVector::from_le_bytes(&blob).ok_or_else(|| {
                corrupt(format!(
                    "vector blob of {sample_id}/{sequence_id} has {} bytes, not a multiple of 8",
                    blob.len()
                ))
            })?;
            if !vector.is_well_formed() {
                return Err(corrupt(format!(
                    "vector of {sample_id}/{sequence_id} holds NaN, infinite or negative values"
                )));
            }
            entries.push(ReferenceEntry {
                sample_id,
                sequence_id,
                sequence,
                taxonomy,
                vector,
            });
        }

        ReferenceStore::from_entries(k, entries).map_err(|e| corrupt(e.to_string()))
    }
}

fn corrupt(msg: String) -> DomainError {
    DomainError::StorageCorrupt(msg)
}

impl ReferenceRepository for SqliteReferenceRepo {
    fn save(&self, store: &ReferenceStore) -> Result<(), DomainError> {
        let tmp = self.temp_path();
        if tmp.exists() {
            fs::remove_file(&tmp)?;
        }
        if let Err(e) = self.write_snapshot(&tmp, store) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        fs::rename(&tmp, &self.path)?;
        log::info!(
            "Persisted {} reference entries (k={}) to {}",
            store.len(),
            store.k(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<ReferenceStore>, DomainError> {
        if !self.path.try_exists()? {
            log::debug!("No reference store at {}", self.path.display());
            return Ok(None);
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| corrupt(format!("cannot open {}: {e}", self.path.display())))?;
        let store = self.read_store(&conn)?;
        log::info!(
            "Restored {} reference entries (k={}) from {}",
            store.len(),
            store.k(),
            self.path.display()
        );
        Ok(Some(store))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
