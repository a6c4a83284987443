//! Integration tests for application services
//!
//! These tests drive both services through the public API with mock
//! repositories, going from wire DTOs to domain entities and back.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use turnos_application::dto::{ClienteRequest, ClienteResponse, TurnoRequest, TurnoResponse};
use turnos_application::errors::ApplicationError;
use turnos_application::services::{ClienteService, TurnoService};

use turnos_domain::errors::{DomainError, DomainResult};
use turnos_domain::repositories::{ClienteRepository, TurnoRepository};
use turnos_domain::{Cliente, RequestContext, Turno};

// ============================================================================
// Mock Implementations
// ============================================================================

/// Shared client table, so the turno mock can join live client rows
type ClienteTable = Arc<RwLock<HashMap<String, Cliente>>>;

#[derive(Default)]
struct MockClienteRepository {
    clientes: ClienteTable,
}

#[async_trait]
impl ClienteRepository for MockClienteRepository {
    async fn create_or_update(
        &self,
        ctx: &RequestContext,
        cliente: &Cliente,
    ) -> DomainResult<Cliente> {
        ctx.check()?;
        let mut clientes = self.clientes.write().unwrap();
        clientes.insert(cliente.id.clone(), cliente.clone());
        Ok(cliente.clone())
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()> {
        ctx.check()?;
        self.clientes.write().unwrap().remove(id);
        Ok(())
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> DomainResult<Cliente> {
        ctx.check()?;
        let clientes = self.clientes.read().unwrap();
        clientes
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("cliente", id))
    }

    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Cliente>> {
        ctx.check()?;
        Ok(self.clientes.read().unwrap().values().cloned().collect())
    }
}

/// Stores `(id, fecha, hora, cliente_id)` and joins on read
struct MockTurnoRepository {
    clientes: ClienteTable,
    turnos: RwLock<HashMap<String, Turno>>,
}

impl MockTurnoRepository {
    fn joined(&self, turno: &Turno) -> Option<Turno> {
        let clientes = self.clientes.read().unwrap();
        let cliente = clientes.get(turno.cliente_id())?.clone();
        Some(Turno { cliente, ..turno.clone() })
    }
}

#[async_trait]
impl TurnoRepository for MockTurnoRepository {
    async fn create_or_update(&self, ctx: &RequestContext, turno: &Turno) -> DomainResult<Turno> {
        ctx.check()?;
        self.turnos.write().unwrap().insert(turno.id.clone(), turno.clone());
        Ok(turno.clone())
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> DomainResult<()> {
        ctx.check()?;
        self.turnos.write().unwrap().remove(id);
        Ok(())
    }

    async fn get_by_fecha(
        &self,
        ctx: &RequestContext,
        fecha: NaiveDate,
    ) -> DomainResult<Vec<Turno>> {
        ctx.check()?;
        let turnos = self.turnos.read().unwrap();
        Ok(turnos
            .values()
            .filter(|t| t.fecha == Some(fecha))
            .filter_map(|t| self.joined(t))
            .collect())
    }

    async fn get_all(&self, ctx: &RequestContext) -> DomainResult<Vec<Turno>> {
        ctx.check()?;
        let turnos = self.turnos.read().unwrap();
        Ok(turnos.values().filter_map(|t| self.joined(t)).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

struct Services {
    clientes: Arc<ClienteService>,
    turnos: TurnoService,
    turno_repo: Arc<MockTurnoRepository>,
}

fn create_services() -> Services {
    let table = ClienteTable::default();
    let cliente_repo = Arc::new(MockClienteRepository {
        clientes: table.clone(),
    });
    let turno_repo = Arc::new(MockTurnoRepository {
        clientes: table,
        turnos: RwLock::default(),
    });
    let clientes = Arc::new(ClienteService::new(cliente_repo));
    let turnos = TurnoService::new(turno_repo.clone(), clientes.clone());
    Services {
        clientes,
        turnos,
        turno_repo,
    }
}

fn cliente_request(nombre: &str, telefono: &str, preferencia: &str) -> ClienteRequest {
    ClienteRequest {
        id: String::new(),
        nombre: nombre.into(),
        telefono: telefono.into(),
        preferencia_horaria: preferencia.into(),
    }
}

fn turno_request(fecha: &str, hora: &str, cliente_id: &str) -> TurnoRequest {
    TurnoRequest {
        id: String::new(),
        fecha: fecha.into(),
        hora: hora.into(),
        cliente_id: cliente_id.into(),
    }
}

// ============================================================================
// ClienteService Tests
// ============================================================================

#[tokio::test]
async fn test_create_cliente_from_request() {
    let s = create_services();
    let ctx = RequestContext::new();

    let cliente = cliente_request("Ivan", "123456789", "Tarde").to_domain().unwrap();
    let saved = s.clientes.create(&ctx, cliente).await.unwrap();
    let response = ClienteResponse::from_domain(&saved);

    assert!(!response.id.is_empty());
    assert_eq!(response.nombre, "Ivan");
    assert_eq!(response.telefono, "123456789");
    assert_eq!(response.preferencia_horaria, "Tarde");
}

#[tokio::test]
async fn test_create_cliente_with_empty_name() {
    let s = create_services();
    let cliente = cliente_request("", "123", "Tarde").to_domain().unwrap();

    let err = s.clientes.create(&RequestContext::new(), cliente).await.unwrap_err();
    assert_eq!(err.to_string(), "campos no válidos");
    assert!(s.clientes.get_all(&RequestContext::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_preferencia_rejected_at_conversion() {
    let err = cliente_request("Ivan", "1", "Madrugada").to_domain().unwrap_err();
    assert_eq!(
        ApplicationError::from(err).to_string(),
        "preferencia horaria no valida: Madrugada"
    );
}

#[tokio::test]
async fn test_delete_missing_cliente_is_ok() {
    let s = create_services();
    assert!(s.clientes.delete(&RequestContext::new(), "ghost").await.is_ok());
}

// ============================================================================
// TurnoService Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_client_performs_no_write() {
    let s = create_services();
    let ctx = RequestContext::new();

    let err = s
        .turnos
        .materialize(&ctx, &turno_request("2025/08/15", "10:30", "unknown"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ReferenceNotFound(_)));
    assert_eq!(err.to_string(), "cliente vacio");
    assert!(s.turno_repo.turnos.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_fecha_returns_joined_clients() {
    let s = create_services();
    let ctx = RequestContext::new();

    let cliente = cliente_request("Ivan", "123456789", "Mañana").to_domain().unwrap();
    let cliente = s.clientes.create(&ctx, cliente).await.unwrap();

    let slots = [("2025/08/15", "09:00"), ("2025/08/15", "10:30"), ("2025/08/16", "09:00")];

    for (fecha, hora) in slots {
        let turno = s
            .turnos
            .materialize(&ctx, &turno_request(fecha, hora, &cliente.id))
            .await
            .unwrap();
        s.turnos.create(&ctx, turno).await.unwrap();
    }

    let day = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
    let mut found = s.turnos.get_by_fecha(&ctx, day).await.unwrap();
    found.sort_by_key(|t| t.hora);

    let responses: Vec<TurnoResponse> = found.iter().map(TurnoResponse::from_domain).collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].hora, "09:00");
    assert_eq!(responses[1].hora, "10:30");
    for r in &responses {
        assert_eq!(r.fecha, "2025/08/15");
        assert_eq!(r.cliente_id, cliente.id);
        assert_eq!(r.cliente.nombre, "Ivan");
        assert_eq!(r.cliente.preferencia_horaria, "Mañana");
    }
}

#[tokio::test]
async fn test_client_edit_shows_on_existing_turnos() {
    let s = create_services();
    let ctx = RequestContext::new();

    let cliente = cliente_request("Ivan", "123", "Noche").to_domain().unwrap();
    let mut cliente = s.clientes.create(&ctx, cliente).await.unwrap();
    let turno = s
        .turnos
        .materialize(&ctx, &turno_request("2025/08/15", "20:00", &cliente.id))
        .await
        .unwrap();
    s.turnos.create(&ctx, turno).await.unwrap();

    cliente.telefono = "999".into();
    s.clientes.update(&ctx, cliente).await.unwrap();

    let all = s.turnos.get_all(&ctx).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].cliente.telefono, "999");
}

#[tokio::test]
async fn test_expired_deadline_fails_fast() {
    let s = create_services();
    let ctx = RequestContext::with_deadline(std::time::Instant::now());

    let err = s.clientes.get_all(&ctx).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Cancelled(DomainError::DeadlineExceeded)));
}
