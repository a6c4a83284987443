//! Client management API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use turnos_application::{ClienteRequest, ClienteResponse};

use crate::{error::ApiResult, state::AppState};

/// Create a client
#[utoipa::path(
    post,
    path = "/cliente",
    request_body = ClienteRequest,
    responses(
        (status = 201, description = "Client created", body = ClienteResponse),
        (status = 400, description = "Invalid fields", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_cliente(
    State(state): State<AppState>,
    payload: Result<Json<ClienteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ClienteResponse>)> {
    let Json(request) = payload?;
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let cliente = request.to_domain()?;
    let saved = state.clientes.create(&ctx, cliente).await?;
    Ok((StatusCode::CREATED, Json(ClienteResponse::from_domain(&saved))))
}

/// Replace a client. The path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/cliente/{id}",
    params(("id" = String, Path, description = "Client ID")),
    request_body = ClienteRequest,
    responses(
        (status = 200, description = "Client updated", body = ClienteResponse),
        (status = 400, description = "Invalid fields", body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ClienteRequest>, JsonRejection>,
) -> ApiResult<Json<ClienteResponse>> {
    let Json(mut request) = payload?;
    request.id = id;
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let cliente = request.to_domain()?;
    let saved = state.clientes.update(&ctx, cliente).await?;
    Ok(Json(ClienteResponse::from_domain(&saved)))
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/cliente/{id}",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ClienteResponse),
        (status = 404, description = "Client not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ClienteResponse>> {
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let cliente = state.clientes.get_by_id(&ctx, &id).await?;
    Ok(Json(ClienteResponse::from_domain(&cliente)))
}

/// List clients
#[utoipa::path(
    get,
    path = "/cliente",
    responses(
        (status = 200, description = "All clients", body = [ClienteResponse]),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_clientes(State(state): State<AppState>) -> ApiResult<Json<Vec<ClienteResponse>>> {
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let clientes = state.clientes.get_all(&ctx).await?;
    Ok(Json(clientes.iter().map(ClienteResponse::from_domain).collect()))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/cliente/{id}",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 500, description = "Storage failure, e.g. the client still has appointments",
            body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    state.clientes.delete(&ctx, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
