//! Handlers for the `/abogados` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use oficio_db::models::abogado::{AbogadoFilter, AbogadoOficio};
use oficio_db::repositories::AbogadoRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/abogados
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AbogadoFilter>,
) -> AppResult<Json<DataResponse<Vec<AbogadoOficio>>>> {
    let abogados = AbogadoRepo::list(&state.store, &filter).await;
    Ok(Json(DataResponse { data: abogados }))
}

/// GET /api/v1/abogados/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AbogadoOficio>> {
    let abogado = AbogadoRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| AppError::not_found("AbogadoOficio", &id))?;
    Ok(Json(abogado))
}
