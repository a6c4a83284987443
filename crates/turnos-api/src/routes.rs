//! API route definitions

use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::{
    handlers::{clientes, health, turnos},
    middleware::logging_middleware,
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Clients
        .route(
            "/cliente",
            get(clientes::list_clientes).post(clientes::create_cliente),
        )
        .route(
            "/cliente/:id",
            get(clientes::get_cliente)
                .put(clientes::update_cliente)
                .delete(clientes::delete_cliente),
        )
        // Appointments; GET on the single segment is the date lookup
        .route(
            "/turno",
            get(turnos::list_turnos).post(turnos::create_turno),
        )
        .route(
            "/turno/:id",
            get(turnos::get_turnos_by_fecha)
                .put(turnos::update_turno)
                .delete(turnos::delete_turno),
        )
        .route(
            "/turno/:anio/:mes/:dia",
            get(turnos::get_turnos_by_fecha_parts),
        )
}

/// OpenAPI document route
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

/// Complete application with logging and CORS
pub fn router(state: AppState) -> Router {
    api_routes()
        .merge(openapi_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// OpenAPI description of every endpoint
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        clientes::create_cliente,
        clientes::list_clientes,
        clientes::get_cliente,
        clientes::update_cliente,
        clientes::delete_cliente,
        turnos::create_turno,
        turnos::list_turnos,
        turnos::get_turnos_by_fecha,
        turnos::get_turnos_by_fecha_parts,
        turnos::update_turno,
        turnos::delete_turno,
    ),
    components(schemas(
        turnos_application::ClienteRequest,
        turnos_application::ClienteResponse,
        turnos_application::TurnoRequest,
        turnos_application::TurnoResponse,
        crate::models::ErrorResponse,
        crate::models::HealthResponse,
    )),
    info(
        title = "Turnos API",
        version = "1.0.0",
        description = "Client records and appointment booking for a single-operator salon"
    )
)]
pub struct ApiDoc;
