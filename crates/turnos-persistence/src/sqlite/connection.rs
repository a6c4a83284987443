//! SQLite connection setup and schema migrations

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Connection shared by the SQLite repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

const MIGRATIONS: &[(i64, &str)] = &[(1, include_str!("../../migrations/001_initial.sql"))];

/// Open a SQLite database at `path` and run migrations
pub fn open_database(path: &Path) -> Result<SharedConnection, PersistenceError> {
    info!(path = %path.display(), "opening sqlite database");
    let conn = Connection::open(path)?;
    prepare(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<SharedConnection, PersistenceError> {
    let conn = Connection::open_in_memory()?;
    prepare(conn)
}

fn prepare(conn: Connection) -> Result<SharedConnection, PersistenceError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), PersistenceError> {
    let current = current_version(conn);

    for &(version, sql) in MIGRATIONS {
        if version > current {
            info!("Running migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| PersistenceError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Current schema version, 0 before the first migration
fn current_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, Option<i64>>(0)
    })
    .ok()
    .flatten()
    .unwrap_or(0)
}
