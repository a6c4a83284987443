//! Repository interfaces for data persistence
//!
//! The domain layer defines only the contracts; implementations live in
//! `turnos-persistence`. Every operation takes the caller's
//! [`RequestContext`] and must reject it up front if it is cancelled or
//! expired.
//!
//! Upserts are keyed by id and overwrite the whole row on conflict. Concurrent
//! writers to the same id are last-writer-wins.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    context::RequestContext,
    entities::{Cliente, Turno},
    errors::*,
};

/// Repository for client entities
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Insert or fully overwrite the client with `cliente.id`
    async fn create_or_update(&self, ctx: &RequestContext, cliente: &Cliente)
        -> DomainResult<Cliente>;

    /// Delete by id; deleting a missing id is not an error
    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()>;

    /// Find by id, failing with `EntityNotFound` when absent
    async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> DomainResult<Cliente>;

    /// All clients
    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Cliente>>;
}

/// Repository for appointment entities
///
/// Only the client id is stored with an appointment. Reads join the live
/// client row, so every returned `Turno` carries the client's current data.
#[async_trait]
pub trait TurnoRepository: Send + Sync {
    /// Insert or fully overwrite the appointment with `turno.id`
    async fn create_or_update(&self, ctx: &RequestContext, turno: &Turno) -> DomainResult<Turno>;

    /// Delete by id; deleting a missing id is not an error
    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()>;

    /// Appointments whose date equals `fecha` exactly
    async fn get_by_fecha(&self, ctx: &RequestContext, fecha: NaiveDate)
        -> DomainResult<Vec<Turno>>;

    /// All appointments
    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Turno>>;
}
