//! Route definitions for the `/guardias` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::guardia;
use crate::state::AppState;

/// Routes mounted at `/guardias`.
///
/// ```text
/// GET    /                 -> list (?turno_id, fecha, confirmada)
/// POST   /                 -> create
/// GET    /proximas         -> list_upcoming (?horas, desde)
/// GET    /{id}             -> get_by_id
/// PATCH  /{id}/confirmar   -> confirm
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guardia::list).post(guardia::create))
        .route("/proximas", get(guardia::list_upcoming))
        .route("/{id}", get(guardia::get_by_id))
        .route("/{id}/confirmar", patch(guardia::confirm))
}
