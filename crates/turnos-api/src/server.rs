//! Server startup and shutdown

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use turnos_persistence::{
    open_database, PersistenceError, SqliteClienteRepository, SqliteTurnoRepository,
};

use crate::{
    config::{ApiConfig, DatabaseBackend},
    routes,
    state::AppState,
};

/// Configured API server, ready to bind
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    /// Open the configured backend and wire the services
    pub fn from_config(config: ApiConfig) -> Result<Self, PersistenceError> {
        let state = build_state(&config)?;
        Ok(Self { config, state })
    }

    /// Shared handler state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        info!(addr = %listener.local_addr()?, backend = self.state.backend, "turnos api listening");

        axum::serve(listener, routes::router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Build handler state for the configured backend
pub fn build_state(config: &ApiConfig) -> Result<AppState, PersistenceError> {
    let timeout = config.request_timeout();
    match config.database.backend {
        DatabaseBackend::Memory => Ok(AppState::in_memory(timeout)),
        DatabaseBackend::Sqlite => {
            let conn = open_database(&config.database.path)?;
            Ok(AppState::new(
                Arc::new(SqliteClienteRepository::new(conn.clone())),
                Arc::new(SqliteTurnoRepository::new(conn)),
                timeout,
                "sqlite",
            ))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
