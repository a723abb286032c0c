//! Handlers for roster configuration and statistics.

use axum::extract::{Query, State};
use axum::Json;
use oficio_core::statistics::EstadisticasOficio;
use oficio_core::types::Fecha;
use oficio_db::models::configuracion::{ConfiguracionTurnos, UpdateConfiguracion};
use oficio_db::repositories::{ConfiguracionRepo, EstadisticasRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /oficio/estadisticas`.
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    /// Day that defines the "current month"; defaults to today (local).
    pub fecha_referencia: Option<Fecha>,
}

/// GET /api/v1/oficio/configuracion
pub async fn get_config(State(state): State<AppState>) -> AppResult<Json<ConfiguracionTurnos>> {
    Ok(Json(ConfiguracionRepo::get(&state.store).await))
}

/// PATCH /api/v1/oficio/configuracion
///
/// Shallow merge: omitted fields keep their current value.
pub async fn update_config(
    State(state): State<AppState>,
    Json(input): Json<UpdateConfiguracion>,
) -> AppResult<Json<ConfiguracionTurnos>> {
    input.validate_input()?;
    Ok(Json(ConfiguracionRepo::update(&state.store, &input).await))
}

/// GET /api/v1/oficio/estadisticas
pub async fn statistics(
    State(state): State<AppState>,
    Query(params): Query<StatisticsQuery>,
) -> AppResult<Json<DataResponse<EstadisticasOficio>>> {
    let today = params
        .fecha_referencia
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let stats = EstadisticasRepo::compute(&state.store, today).await;
    Ok(Json(DataResponse { data: stats }))
}
