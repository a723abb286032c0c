use axum::routing::get;
use axum::Router;

use crate::handlers::abogado;
use crate::state::AppState;

/// Routes mounted at `/abogados` (read-only).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(abogado::list))
        .route("/{id}", get(abogado::get_by_id))
}
