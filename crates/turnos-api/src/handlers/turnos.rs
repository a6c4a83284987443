//! Appointment API handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use turnos_application::{parse_fecha, TurnoRequest, TurnoResponse};
use turnos_domain::Turno;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

fn responses(turnos: &[Turno]) -> Json<Vec<TurnoResponse>> {
    Json(turnos.iter().map(TurnoResponse::from_domain).collect())
}

fn path_fecha(raw: &str) -> ApiResult<NaiveDate> {
    parse_fecha(raw).map_err(|_| ApiError::InvalidFecha)
}

/// Book an appointment for an existing client
#[utoipa::path(
    post,
    path = "/turno",
    request_body = TurnoRequest,
    responses(
        (status = 201, description = "Appointment created", body = TurnoResponse),
        (status = 400, description = "Invalid date, time or unknown client",
            body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_turno(
    State(state): State<AppState>,
    payload: Result<Json<TurnoRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TurnoResponse>)> {
    let Json(request) = payload?;
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let turno = state.turnos.materialize(&ctx, &request).await?;
    let saved = state.turnos.create(&ctx, turno).await?;
    Ok((StatusCode::CREATED, Json(TurnoResponse::from_domain(&saved))))
}

/// Replace an appointment. The path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/turno/{id}",
    params(("id" = String, Path, description = "Appointment ID")),
    request_body = TurnoRequest,
    responses(
        (status = 200, description = "Appointment updated", body = TurnoResponse),
        (status = 400, description = "Invalid date, time or unknown client",
            body = crate::models::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_turno(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TurnoRequest>, JsonRejection>,
) -> ApiResult<Json<TurnoResponse>> {
    let Json(mut request) = payload?;
    request.id = id;
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let turno = state.turnos.materialize(&ctx, &request).await?;
    let saved = state.turnos.update(&ctx, turno).await?;
    Ok(Json(TurnoResponse::from_domain(&saved)))
}

/// Appointments on a date given as one percent-encoded segment (`2025%2F08%2F15`)
#[utoipa::path(
    get,
    path = "/turno/{fecha}",
    params(("fecha" = String, Path, description = "Date as YYYY/MM/DD, percent-encoded")),
    responses(
        (status = 200, description = "Appointments on that date", body = [TurnoResponse]),
        (status = 400, description = "Malformed date", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_turnos_by_fecha(
    State(state): State<AppState>,
    Path(fecha): Path<String>,
) -> ApiResult<Json<Vec<TurnoResponse>>> {
    let fecha = path_fecha(&fecha)?;
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let turnos = state.turnos.get_by_fecha(&ctx, fecha).await?;
    Ok(responses(&turnos))
}

/// Appointments on a date given as three segments (`/turno/2025/08/15`)
#[utoipa::path(
    get,
    path = "/turno/{anio}/{mes}/{dia}",
    params(
        ("anio" = String, Path, description = "Year, four digits"),
        ("mes" = String, Path, description = "Month"),
        ("dia" = String, Path, description = "Day of month")
    ),
    responses(
        (status = 200, description = "Appointments on that date", body = [TurnoResponse]),
        (status = 400, description = "Malformed date", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_turnos_by_fecha_parts(
    State(state): State<AppState>,
    Path((anio, mes, dia)): Path<(String, String, String)>,
) -> ApiResult<Json<Vec<TurnoResponse>>> {
    let fecha = path_fecha(&format!("{anio}/{mes}/{dia}"))?;
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let turnos = state.turnos.get_by_fecha(&ctx, fecha).await?;
    Ok(responses(&turnos))
}

/// List appointments
#[utoipa::path(
    get,
    path = "/turno",
    responses(
        (status = 200, description = "All appointments", body = [TurnoResponse]),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_turnos(State(state): State<AppState>) -> ApiResult<Json<Vec<TurnoResponse>>> {
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    let turnos = state.turnos.get_all(&ctx).await?;
    Ok(responses(&turnos))
}

/// Delete an appointment
#[utoipa::path(
    delete,
    path = "/turno/{id}",
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_turno(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let ctx = state.request_context();
    let _cancel_on_drop = ctx.drop_guard();

    state.turnos.delete(&ctx, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
