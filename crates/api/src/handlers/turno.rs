//! Handlers for the `/turnos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use oficio_db::models::turno::{
    AsignarAbogado, CreateRotacion, CreateTurno, SwapTurnos, SwappedTurnos, Turno, TurnoFilter,
    UpdateEstadoTurno,
};
use oficio_db::repositories::TurnoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/turnos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTurno>,
) -> AppResult<(StatusCode, Json<Turno>)> {
    input.validate_input()?;
    let turno = TurnoRepo::create(&state.store, &input).await;
    Ok((StatusCode::CREATED, Json(turno)))
}

/// GET /api/v1/turnos
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TurnoFilter>,
) -> AppResult<Json<DataResponse<Vec<Turno>>>> {
    let turnos = TurnoRepo::list(&state.store, &filter).await;
    Ok(Json(DataResponse { data: turnos }))
}

/// GET /api/v1/turnos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Turno>> {
    let turno = TurnoRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| AppError::not_found("Turno", &id))?;
    Ok(Json(turno))
}

/// PATCH /api/v1/turnos/{id}/estado
pub async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEstadoTurno>,
) -> AppResult<Json<Turno>> {
    let turno = TurnoRepo::update_estado(&state.store, &id, input.estado)
        .await
        .ok_or_else(|| AppError::not_found("Turno", &id))?;
    Ok(Json(turno))
}

/// PATCH /api/v1/turnos/{id}/abogado
///
/// The lawyer's registration and availability are not checked.
pub async fn assign_lawyer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<AsignarAbogado>,
) -> AppResult<Json<Turno>> {
    input.validate()?;
    let turno = TurnoRepo::assign_lawyer(&state.store, &id, &input)
        .await
        .ok_or_else(|| AppError::not_found("Turno", &id))?;
    Ok(Json(turno))
}

/// POST /api/v1/turnos/intercambio
///
/// Exchanges the assigned lawyers of two turnos.
pub async fn swap(
    State(state): State<AppState>,
    Json(input): Json<SwapTurnos>,
) -> AppResult<Json<SwappedTurnos>> {
    input.validate()?;
    let swapped = TurnoRepo::swap_lawyers(&state.store, &input.turno_a, &input.turno_b).await;
    if let Some(swapped) = swapped {
        return Ok(Json(swapped));
    }
    // Report whichever side is missing.
    let missing = if TurnoRepo::find_by_id(&state.store, &input.turno_a).await.is_none() {
        &input.turno_a
    } else {
        &input.turno_b
    };
    Err(AppError::not_found("Turno", missing))
}

/// POST /api/v1/turnos/rotacion
///
/// Plans and creates consecutive turnos using the roster configuration's
/// frequency, jurisdiction and no-consecutive rule.
pub async fn create_rotation(
    State(state): State<AppState>,
    Json(input): Json<CreateRotacion>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Turno>>>)> {
    input.validate()?;
    let turnos = TurnoRepo::plan_and_create_rotation(&state.store, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: turnos })))
}
