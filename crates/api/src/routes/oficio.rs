//! Route definitions for roster-wide configuration and statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::oficio;
use crate::state::AppState;

/// Routes mounted at `/oficio`.
///
/// ```text
/// GET    /configuracion    -> get_config
/// PATCH  /configuracion    -> update_config
/// GET    /estadisticas     -> statistics (?fecha_referencia)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/configuracion",
            get(oficio::get_config).patch(oficio::update_config),
        )
        .route("/estadisticas", get(oficio::statistics))
}
