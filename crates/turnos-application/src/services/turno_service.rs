//! Turno Application Service
//!
//! Appointment lifecycle plus resolution of a wire request into a `Turno`
//! carrying the referenced client.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use turnos_domain::errors::{DomainError, ErrorKind};
use turnos_domain::repositories::TurnoRepository;
use turnos_domain::{RequestContext, TimeOfDay, Turno};

use crate::dto::{parse_fecha, TurnoRequest};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::services::ClienteService;

/// Turno Application Service
pub struct TurnoService {
    repository: Arc<dyn TurnoRepository>,
    clientes: Arc<ClienteService>,
}

impl TurnoService {
    /// Create a new TurnoService with injected dependencies
    pub fn new(repository: Arc<dyn TurnoRepository>, clientes: Arc<ClienteService>) -> Self {
        Self {
            repository,
            clientes,
        }
    }

    /// Validate, assign an id when empty, and upsert
    pub async fn create(&self, ctx: &RequestContext, mut turno: Turno) -> ApplicationResult<Turno> {
        turno.validate()?;
        if turno.id.is_empty() {
            turno.id = uuid::Uuid::new_v4().to_string();
        }

        let saved = self.repository.create_or_update(ctx, &turno).await?;
        info!(turno_id = %saved.id, cliente_id = %saved.cliente_id(), "turno created");
        Ok(saved)
    }

    /// Validate first, then require an id, then upsert
    pub async fn update(&self, ctx: &RequestContext, turno: Turno) -> ApplicationResult<Turno> {
        turno.validate()?;
        if turno.id.is_empty() {
            return Err(DomainError::IdRequired.into());
        }

        let saved = self.repository.create_or_update(ctx, &turno).await?;
        info!(turno_id = %saved.id, "turno updated");
        Ok(saved)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> ApplicationResult<()> {
        self.repository.delete(ctx, id).await?;
        info!(turno_id = %id, "turno deleted");
        Ok(())
    }

    /// Appointments on exactly `fecha`
    pub async fn get_by_fecha(
        &self,
        ctx: &RequestContext,
        fecha: NaiveDate,
    ) -> ApplicationResult<Vec<Turno>> {
        Ok(self.repository.get_by_fecha(ctx, fecha).await?)
    }

    pub async fn get_all(&self, ctx: &RequestContext) -> ApplicationResult<Vec<Turno>> {
        Ok(self.repository.get_all(ctx).await?)
    }

    /// Build a `Turno` from a wire request, resolving its client reference
    ///
    /// Nothing is written. The request id is carried over as is.
    pub async fn materialize(
        &self,
        ctx: &RequestContext,
        request: &TurnoRequest,
    ) -> ApplicationResult<Turno> {
        let fecha = parse_fecha(&request.fecha)?;
        let hora = TimeOfDay::parse(&request.hora)
            .map_err(|e| DomainError::InvalidTimeOfDay(Box::new(e)))?;

        let client_not_found = || {
            ApplicationError::from(DomainError::ClientNotFound {
                id: request.cliente_id.clone(),
            })
        };

        if request.cliente_id.is_empty() {
            return Err(client_not_found());
        }

        let cliente = match self.clientes.get_by_id(ctx, &request.cliente_id).await {
            Ok(cliente) => cliente,
            Err(e) if e.domain_error().kind() == ErrorKind::NotFound => {
                debug!(cliente_id = %request.cliente_id, "referenced cliente missing");
                return Err(client_not_found());
            }
            Err(e) => return Err(e),
        };

        Ok(Turno::new(request.id.clone(), fecha, hora, cliente))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use turnos_domain::errors::DomainResult;
    use turnos_domain::repositories::ClienteRepository;
    use turnos_domain::{Cliente, PreferenciaHoraria};

    #[derive(Default)]
    struct InMemoryClienteRepository {
        clientes: Mutex<HashMap<String, Cliente>>,
        fail_reads: bool,
    }

    #[async_trait]
    impl ClienteRepository for InMemoryClienteRepository {
        async fn create_or_update(
            &self,
            _ctx: &RequestContext,
            cliente: &Cliente,
        ) -> DomainResult<Cliente> {
            self.clientes.lock().insert(cliente.id.clone(), cliente.clone());
            Ok(cliente.clone())
        }

        async fn delete(&self, _ctx: &RequestContext, id: &str) -> DomainResult<()> {
            self.clientes.lock().remove(id);
            Ok(())
        }

        async fn get_by_id(&self, _ctx: &RequestContext, id: &str) -> DomainResult<Cliente> {
            if self.fail_reads {
                return Err(DomainError::persistence("connection reset"));
            }
            self.clientes
                .lock()
                .get(id)
                .cloned()
                .ok_or_else(|| DomainError::not_found("cliente", id))
        }

        async fn get_all(&self, _ctx: &RequestContext) -> DomainResult<Vec<Cliente>> {
            Ok(self.clientes.lock().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct InMemoryTurnoRepository {
        turnos: Mutex<HashMap<String, Turno>>,
    }

    #[async_trait]
    impl TurnoRepository for InMemoryTurnoRepository {
        async fn create_or_update(
            &self,
            ctx: &RequestContext,
            turno: &Turno,
        ) -> DomainResult<Turno> {
            ctx.check()?;
            self.turnos.lock().insert(turno.id.clone(), turno.clone());
            Ok(turno.clone())
        }

        async fn delete(&self, _ctx: &RequestContext, id: &str) -> DomainResult<()> {
            self.turnos.lock().remove(id);
            Ok(())
        }

        async fn get_by_fecha(
            &self,
            _ctx: &RequestContext,
            fecha: NaiveDate,
        ) -> DomainResult<Vec<Turno>> {
            Ok(self
                .turnos
                .lock()
                .values()
                .filter(|t| t.fecha == Some(fecha))
                .cloned()
                .collect())
        }

        async fn get_all(&self, _ctx: &RequestContext) -> DomainResult<Vec<Turno>> {
            Ok(self.turnos.lock().values().cloned().collect())
        }
    }

    struct Fixture {
        service: TurnoService,
        turnos: Arc<InMemoryTurnoRepository>,
    }

    fn fixture_with(clientes: InMemoryClienteRepository) -> Fixture {
        clientes.clientes.lock().insert(
            "c-1".into(),
            Cliente::new("c-1", "Ivan", "123456789", PreferenciaHoraria::Tarde),
        );
        let turnos = Arc::new(InMemoryTurnoRepository::default());
        let clientes = Arc::new(ClienteService::new(Arc::new(clientes)));
        Fixture {
            service: TurnoService::new(turnos.clone(), clientes),
            turnos,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(InMemoryClienteRepository::default())
    }

    fn request(fecha: &str, hora: &str, cliente_id: &str) -> TurnoRequest {
        TurnoRequest {
            id: String::new(),
            fecha: fecha.into(),
            hora: hora.into(),
            cliente_id: cliente_id.into(),
        }
    }

    #[tokio::test]
    async fn test_materialize_resolves_client() {
        let f = fixture();
        let ctx = RequestContext::new();

        let turno = f
            .service
            .materialize(&ctx, &request("2025/08/15", "10:30", "c-1"))
            .await
            .unwrap();

        assert_eq!(turno.fecha, NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(turno.hora.to_string(), "10:30");
        assert_eq!(turno.cliente.nombre, "Ivan");
        assert!(f.turnos.turnos.lock().is_empty());
    }

    #[tokio::test]
    async fn test_materialize_unknown_client_is_reference_error() {
        let f = fixture();
        let err = f
            .service
            .materialize(&RequestContext::new(), &request("2025/08/15", "10:30", "nope"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ReferenceNotFound(_)));
        assert_eq!(err.to_string(), "cliente vacio");
        assert!(f.turnos.turnos.lock().is_empty());
    }

    #[tokio::test]
    async fn test_materialize_empty_client_id() {
        let f = fixture();
        let err = f
            .service
            .materialize(&RequestContext::new(), &request("2025/08/15", "10:30", ""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "cliente vacio");
    }

    #[tokio::test]
    async fn test_materialize_propagates_store_failure() {
        let f = fixture_with(InMemoryClienteRepository {
            fail_reads: true,
            ..Default::default()
        });
        let err = f
            .service
            .materialize(&RequestContext::new(), &request("2025/08/15", "10:30", "c-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }

    #[tokio::test]
    async fn test_materialize_bad_date_and_time() {
        let f = fixture();
        let ctx = RequestContext::new();

        let err = f
            .service
            .materialize(&ctx, &request("15/08/2025", "10:30", "c-1"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("error de parse de fecha"));

        let err = f
            .service
            .materialize(&ctx, &request("2025/08/15", "25:00", "c-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));
        assert_eq!(err.to_string(), "error de parse de hora: hora inválida: 25:00");
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_persists() {
        let f = fixture();
        let ctx = RequestContext::new();
        let turno = f
            .service
            .materialize(&ctx, &request("2025/08/15", "10:30", "c-1"))
            .await
            .unwrap();

        let saved = f.service.create(&ctx, turno).await.unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(f.turnos.turnos.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_update_validates_before_id_check() {
        let f = fixture();
        let ctx = RequestContext::new();
        let mut turno = f
            .service
            .materialize(&ctx, &request("2025/08/15", "10:30", "c-1"))
            .await
            .unwrap();

        let err = f.service.update(&ctx, turno.clone()).await.unwrap_err();
        assert_eq!(err.to_string(), "ID requerido para actualizar");

        turno.fecha = None;
        let err = f.service.update(&ctx, turno).await.unwrap_err();
        assert_eq!(err.to_string(), "fecha no puede ser cero");
    }

    #[tokio::test]
    async fn test_get_by_fecha_exact_match() {
        let f = fixture();
        let ctx = RequestContext::new();
        let slots = [("2025/08/15", "10:00"), ("2025/08/15", "11:00"), ("2025/08/16", "10:00")];
        for (fecha, hora) in slots {
            let turno = f
                .service
                .materialize(&ctx, &request(fecha, hora, "c-1"))
                .await
                .unwrap();
            f.service.create(&ctx, turno).await.unwrap();
        }

        let day = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let found = f.service.get_by_fecha(&ctx, day).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| t.fecha == Some(day)));
        assert_eq!(f.service.get_all(&ctx).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_cancelled_create_writes_nothing() {
        let f = fixture();
        let ctx = RequestContext::new();
        let turno = f
            .service
            .materialize(&ctx, &request("2025/08/15", "10:30", "c-1"))
            .await
            .unwrap();

        ctx.cancel();
        let err = f.service.create(&ctx, turno).await.unwrap_err();
        assert_eq!(err.to_string(), "operación cancelada");
        assert!(f.turnos.turnos.lock().is_empty());
    }
}
