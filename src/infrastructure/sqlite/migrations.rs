use rusqlite::Connection;

use crate::domain::error::DomainError;

/// Bumped whenever the table layout below changes incompatibly.
pub const FORMAT_VERSION: u32 = 1;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS store_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reference_entries (
            position INTEGER PRIMARY KEY,
            sample_id TEXT NOT NULL,
            sequence_id TEXT NOT NULL,
            sequence TEXT NOT NULL,
            taxonomy TEXT,
            vector BLOB NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_sample ON reference_entries(sample_id);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
