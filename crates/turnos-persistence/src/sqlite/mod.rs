//! SQLite Repository Implementations
//!
//! Both repositories share one connection behind a mutex. Every call runs on
//! the blocking pool and checks the request context again once it holds the
//! connection, so a request cancelled while queued never writes.

mod cliente_repository;
mod connection;
mod turno_repository;

use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::Connection;
use turnos_domain::{errors::DomainError, DomainResult, RequestContext};

use crate::error::PersistenceError;

pub use cliente_repository::SqliteClienteRepository;
pub use connection::{open_database, open_memory_database, run_migrations, SharedConnection};
pub use turno_repository::SqliteTurnoRepository;

pub(crate) const FECHA_COLUMN_FORMAT: &str = "%Y-%m-%d";

/// Run `op` against the shared connection on the blocking pool
pub(crate) async fn with_connection<T, F>(
    conn: &SharedConnection,
    ctx: &RequestContext,
    op: F,
) -> DomainResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Connection) -> Result<T, PersistenceError> + Send + 'static,
{
    ctx.check()?;

    let conn: Arc<Mutex<Connection>> = Arc::clone(conn);
    let ctx = ctx.clone();
    tokio::task::spawn_blocking(move || {
        let mut guard = conn.lock();
        ctx.check()?;
        op(&mut *guard).map_err(DomainError::from)
    })
    .await
    .map_err(|e| DomainError::from(PersistenceError::Task(e.to_string())))?
}
