//! Handlers for the `/guardias` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDateTime;
use oficio_core::roster::validate_horas_alerta;
use oficio_db::models::guardia::{CreateGuardia, Guardia, GuardiaFilter};
use oficio_db::repositories::{ConfiguracionRepo, GuardiaRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /guardias/proximas`.
#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    /// Overrides the configured `horas_alerta`.
    pub horas: Option<u32>,
    /// Reference instant (local wall clock); defaults to now.
    pub desde: Option<NaiveDateTime>,
}

/// POST /api/v1/guardias
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGuardia>,
) -> AppResult<(StatusCode, Json<Guardia>)> {
    input.validate()?;
    let guardia = GuardiaRepo::create(&state.store, &input)
        .await
        .ok_or_else(|| AppError::not_found("Turno", &input.turno_id))?;
    Ok((StatusCode::CREATED, Json(guardia)))
}

/// GET /api/v1/guardias
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<GuardiaFilter>,
) -> AppResult<Json<DataResponse<Vec<Guardia>>>> {
    let guardias = GuardiaRepo::list(&state.store, &filter).await;
    Ok(Json(DataResponse { data: guardias }))
}

/// GET /api/v1/guardias/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Guardia>> {
    let guardia = GuardiaRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| AppError::not_found("Guardia", &id))?;
    Ok(Json(guardia))
}

/// PATCH /api/v1/guardias/{id}/confirmar
pub async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Guardia>> {
    let guardia = GuardiaRepo::confirm(&state.store, &id)
        .await
        .ok_or_else(|| AppError::not_found("Guardia", &id))?;
    Ok(Json(guardia))
}

/// GET /api/v1/guardias/proximas
///
/// Unconfirmed guardias starting within the alert window.
pub async fn list_upcoming(
    State(state): State<AppState>,
    Query(params): Query<UpcomingQuery>,
) -> AppResult<Json<DataResponse<Vec<Guardia>>>> {
    let horas = match params.horas {
        Some(horas) => {
            validate_horas_alerta(horas)?;
            horas
        }
        None => ConfiguracionRepo::get(&state.store).await.horas_alerta,
    };
    let now = params
        .desde
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let guardias = GuardiaRepo::list_upcoming(&state.store, now, horas)
        .await
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Alert window of {horas}h from {now} exceeds the supported date range"
            ))
        })?;
    Ok(Json(DataResponse { data: guardias }))
}
