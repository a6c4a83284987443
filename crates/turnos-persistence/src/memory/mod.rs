//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Both repositories share one [`MemoryStore`], so appointment reads join the
//! live client rows and client deletes respect appointment references, the
//! same way the relational store behaves.
//!
//! Lock order is always clientes before turnos.

mod cliente_repository;
mod turno_repository;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use turnos_domain::{Cliente, TimeOfDay};

pub use cliente_repository::InMemoryClienteRepository;
pub use turno_repository::InMemoryTurnoRepository;

/// Stored appointment: only the client id is kept
#[derive(Debug, Clone)]
pub(crate) struct TurnoRow {
    pub id: String,
    pub fecha: NaiveDate,
    pub hora: TimeOfDay,
    pub cliente_id: String,
}

/// Tables shared by the in-memory repositories
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) clientes: RwLock<BTreeMap<String, Cliente>>,
    pub(crate) turnos: RwLock<BTreeMap<String, TurnoRow>>,
}

impl MemoryStore {
    /// Create an empty store ready to be shared
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }
}
