//! Application state for the API server

use std::sync::Arc;
use std::time::{Duration, Instant};

use turnos_application::{ClienteService, TurnoService};
use turnos_domain::{ClienteRepository, RequestContext, TurnoRepository};
use turnos_persistence::{InMemoryClienteRepository, InMemoryTurnoRepository};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Client use cases
    pub clientes: Arc<ClienteService>,
    /// Appointment use cases
    pub turnos: Arc<TurnoService>,
    /// Deadline applied to every request
    pub request_timeout: Duration,
    /// Name of the storage backend, reported by `/health`
    pub backend: &'static str,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Wire services over the given repositories
    pub fn new(
        cliente_repository: Arc<dyn ClienteRepository>,
        turno_repository: Arc<dyn TurnoRepository>,
        request_timeout: Duration,
        backend: &'static str,
    ) -> Self {
        let clientes = Arc::new(ClienteService::new(cliente_repository));
        let turnos = Arc::new(TurnoService::new(turno_repository, Arc::clone(&clientes)));
        Self {
            clientes,
            turnos,
            request_timeout,
            backend,
            start_time: Instant::now(),
        }
    }

    /// State backed by the in-memory repositories
    pub fn in_memory(request_timeout: Duration) -> Self {
        let clientes = InMemoryClienteRepository::new();
        let turnos = InMemoryTurnoRepository::new(clientes.store());
        Self::new(Arc::new(clientes), Arc::new(turnos), request_timeout, "memory")
    }

    /// Fresh context expiring after the configured timeout
    pub fn request_context(&self) -> RequestContext {
        RequestContext::with_timeout(self.request_timeout)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
