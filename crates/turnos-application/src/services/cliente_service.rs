//! Cliente Application Service
//!
//! Validates clients, assigns identifiers and upserts them through the
//! injected repository.

use std::sync::Arc;

use tracing::info;
use turnos_domain::errors::DomainError;
use turnos_domain::repositories::ClienteRepository;
use turnos_domain::{Cliente, RequestContext};

use crate::errors::ApplicationResult;

/// Cliente Application Service
///
/// Stateless: all mutable state is persisted via the repository.
pub struct ClienteService {
    repository: Arc<dyn ClienteRepository>,
}

impl ClienteService {
    /// Create a new ClienteService with injected repository
    pub fn new(repository: Arc<dyn ClienteRepository>) -> Self {
        Self { repository }
    }

    /// Validate, assign an id when empty, and upsert
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut cliente: Cliente,
    ) -> ApplicationResult<Cliente> {
        cliente.validate()?;
        if cliente.id.is_empty() {
            cliente.id = uuid::Uuid::new_v4().to_string();
        }

        let saved = self.repository.create_or_update(ctx, &cliente).await?;
        info!(cliente_id = %saved.id, "cliente created");
        Ok(saved)
    }

    /// Require an id, validate, and upsert
    pub async fn update(
        &self,
        ctx: &RequestContext,
        cliente: Cliente,
    ) -> ApplicationResult<Cliente> {
        if cliente.id.is_empty() {
            return Err(DomainError::IdRequired.into());
        }
        cliente.validate()?;

        let saved = self.repository.create_or_update(ctx, &cliente).await?;
        info!(cliente_id = %saved.id, "cliente updated");
        Ok(saved)
    }

    /// Delete by id, without checking that it exists
    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> ApplicationResult<()> {
        self.repository.delete(ctx, id).await?;
        info!(cliente_id = %id, "cliente deleted");
        Ok(())
    }

    /// Get client by ID
    pub async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> ApplicationResult<Cliente> {
        Ok(self.repository.get_by_id(ctx, id).await?)
    }

    /// List all clients
    pub async fn get_all(&self, ctx: &RequestContext) -> ApplicationResult<Vec<Cliente>> {
        Ok(self.repository.get_all(ctx).await?)
    }
}
