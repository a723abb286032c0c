//! Route definitions for the `/turnos` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::turno;
use crate::state::AppState;

/// Routes mounted at `/turnos`.
///
/// ```text
/// GET    /                 -> list (?abogado_id, fecha, tipo, estado)
/// POST   /                 -> create
/// POST   /rotacion         -> create_rotation
/// POST   /intercambio      -> swap
/// GET    /{id}             -> get_by_id
/// PATCH  /{id}/estado      -> update_estado
/// PATCH  /{id}/abogado     -> assign_lawyer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(turno::list).post(turno::create))
        .route("/rotacion", post(turno::create_rotation))
        .route("/intercambio", post(turno::swap))
        .route("/{id}", get(turno::get_by_id))
        .route("/{id}/estado", patch(turno::update_estado))
        .route("/{id}/abogado", patch(turno::assign_lawyer))
}
