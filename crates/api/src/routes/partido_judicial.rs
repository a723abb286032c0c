use axum::routing::get;
use axum::Router;

use crate::handlers::partido_judicial;
use crate::state::AppState;

/// Routes mounted at `/partidos-judiciales` (read-only).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(partido_judicial::list))
        .route("/{id}", get(partido_judicial::get_by_id))
}
