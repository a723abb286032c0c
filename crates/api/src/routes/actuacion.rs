//! Route definitions for the `/actuaciones` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actuacion;
use crate::state::AppState;

/// Routes mounted at `/actuaciones`.
///
/// ```text
/// GET    /        -> list (?turno_id, tipo)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actuacion::list).post(actuacion::create))
        .route("/{id}", get(actuacion::get_by_id))
}
