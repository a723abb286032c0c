//! Handlers for the `/actuaciones` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use oficio_db::models::actuacion::{ActuacionFilter, ActuacionOficio, CreateActuacion};
use oficio_db::repositories::ActuacionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/actuaciones
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActuacion>,
) -> AppResult<(StatusCode, Json<ActuacionOficio>)> {
    input.validate_input()?;
    let actuacion = ActuacionRepo::create(&state.store, &input)
        .await
        .ok_or_else(|| AppError::not_found("Turno", &input.turno_id))?;
    Ok((StatusCode::CREATED, Json(actuacion)))
}

/// GET /api/v1/actuaciones
///
/// Most recently recorded first.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ActuacionFilter>,
) -> AppResult<Json<DataResponse<Vec<ActuacionOficio>>>> {
    let actuaciones = ActuacionRepo::list(&state.store, &filter).await;
    Ok(Json(DataResponse { data: actuaciones }))
}

/// GET /api/v1/actuaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ActuacionOficio>> {
    let actuacion = ActuacionRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| AppError::not_found("ActuacionOficio", &id))?;
    Ok(Json(actuacion))
}
