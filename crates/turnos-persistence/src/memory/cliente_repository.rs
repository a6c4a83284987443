//! In-Memory Cliente Repository Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use turnos_domain::{
    errors::{DomainError, DomainResult},
    repositories::ClienteRepository,
    Cliente, RequestContext,
};

use super::MemoryStore;
use crate::error::PersistenceError;

/// Thread-safe in-memory implementation of ClienteRepository
///
/// Results of `get_all` come back ordered by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClienteRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryClienteRepository {
    /// Create a repository over its own empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository over a shared store
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for wiring an `InMemoryTurnoRepository`
    pub fn store(&self) -> Arc<MemoryStore> {
        Arc::clone(&self.store)
    }

    /// Get the current count of clients (for testing)
    pub fn count(&self) -> usize {
        self.store.clientes.read().len()
    }

    /// Clear all clients (for testing). Appointments are cleared too.
    pub fn clear(&self) {
        let mut clientes = self.store.clientes.write();
        self.store.turnos.write().clear();
        clientes.clear();
    }
}

#[async_trait]
impl ClienteRepository for InMemoryClienteRepository {
    async fn create_or_update(
        &self,
        ctx: &RequestContext,
        cliente: &Cliente,
    ) -> DomainResult<Cliente> {
        ctx.check()?;
        debug!(cliente_id = %cliente.id, "upserting cliente");
        let mut clientes = self.store.clientes.write();
        clientes.insert(cliente.id.clone(), cliente.clone());
        Ok(cliente.clone())
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()> {
        ctx.check()?;
        debug!(cliente_id = %id, "deleting cliente");
        let mut clientes = self.store.clientes.write();
        let turnos = self.store.turnos.read();
        if let Some(turno) = turnos.values().find(|t| t.cliente_id == id) {
            return Err(PersistenceError::ForeignKey(format!(
                "turno {} referencia al cliente {}",
                turno.id, id
            ))
            .into());
        }
        clientes.remove(id);
        Ok(())
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> DomainResult<Cliente> {
        ctx.check()?;
        let clientes = self.store.clientes.read();
        clientes
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("cliente", id))
    }

    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Cliente>> {
        ctx.check()?;
        let clientes = self.store.clientes.read();
        Ok(clientes.values().cloned().collect())
    }
}
