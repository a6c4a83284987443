//! In-Memory Turno Repository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use turnos_domain::{
    errors::{DomainError, DomainResult},
    repositories::TurnoRepository,
    Cliente, RequestContext, Turno,
};

use super::{MemoryStore, TurnoRow};
use crate::error::PersistenceError;

/// Thread-safe in-memory implementation of TurnoRepository
///
/// Rows hold only the client id; reads join the current client. Results
/// are ordered by date, time and id.
#[derive(Debug, Clone)]
pub struct InMemoryTurnoRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryTurnoRepository {
    /// Create a repository over a store shared with an `InMemoryClienteRepository`
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Get the current count of appointments (for testing)
    pub fn count(&self) -> usize {
        self.store.turnos.read().len()
    }

    fn joined<'a>(
        clientes: &BTreeMap<String, Cliente>,
        rows: impl Iterator<Item = &'a TurnoRow>,
    ) -> Vec<Turno> {
        let mut turnos: Vec<Turno> = rows
            .filter_map(|row| {
                let cliente = clientes.get(&row.cliente_id)?;
                Some(Turno::new(row.id.clone(), row.fecha, row.hora, cliente.clone()))
            })
            .collect();
        turnos.sort_by(|a, b| (a.fecha, a.hora, &a.id).cmp(&(b.fecha, b.hora, &b.id)));
        turnos
    }
}

#[async_trait]
impl TurnoRepository for InMemoryTurnoRepository {
    async fn create_or_update(&self, ctx: &RequestContext, turno: &Turno) -> DomainResult<Turno> {
        ctx.check()?;
        let fecha = turno.fecha.ok_or(DomainError::ZeroDate)?;
        debug!(turno_id = %turno.id, cliente_id = %turno.cliente_id(), "upserting turno");

        let clientes = self.store.clientes.read();
        let cliente = clientes.get(turno.cliente_id()).ok_or_else(|| {
            DomainError::from(PersistenceError::UnknownCliente(turno.cliente_id().to_string()))
        })?;

        let mut turnos = self.store.turnos.write();
        turnos.insert(
            turno.id.clone(),
            TurnoRow {
                id: turno.id.clone(),
                fecha,
                hora: turno.hora,
                cliente_id: cliente.id.clone(),
            },
        );
        Ok(turno.clone())
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()> {
        ctx.check()?;
        debug!(turno_id = %id, "deleting turno");
        self.store.turnos.write().remove(id);
        Ok(())
    }

    async fn get_by_fecha(
        &self,
        ctx: &RequestContext,
        fecha: NaiveDate,
    ) -> DomainResult<Vec<Turno>> {
        ctx.check()?;
        let clientes = self.store.clientes.read();
        let turnos = self.store.turnos.read();
        Ok(Self::joined(
            &clientes,
            turnos.values().filter(|row| row.fecha == fecha),
        ))
    }

    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Turno>> {
        ctx.check()?;
        let clientes = self.store.clientes.read();
        let turnos = self.store.turnos.read();
        Ok(Self::joined(&clientes, turnos.values()))
    }
}
