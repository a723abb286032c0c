use axum::extract::{Path, State};
use axum::Json;
use oficio_db::models::partido_judicial::PartidoJudicial;
use oficio_db::repositories::PartidoJudicialRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/partidos-judiciales
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PartidoJudicial>>>> {
    let partidos = PartidoJudicialRepo::list(&state.store).await;
    Ok(Json(DataResponse { data: partidos }))
}

/// GET /api/v1/partidos-judiciales/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PartidoJudicial>> {
    let partido = PartidoJudicialRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| AppError::not_found("PartidoJudicial", &id))?;
    Ok(Json(partido))
}
