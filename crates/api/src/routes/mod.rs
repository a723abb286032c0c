pub mod abogado;
pub mod actuacion;
pub mod guardia;
pub mod health;
pub mod oficio;
pub mod partido_judicial;
pub mod turno;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /turnos                                          list, create
/// /turnos/rotacion                                 plan rotation (POST)
/// /turnos/intercambio                              swap lawyers (POST)
/// /turnos/{id}                                     get
/// /turnos/{id}/estado                              change status (PATCH)
/// /turnos/{id}/abogado                             reassign lawyer (PATCH)
///
/// /guardias                                        list, create
/// /guardias/proximas                               upcoming alerts (GET)
/// /guardias/{id}                                   get
/// /guardias/{id}/confirmar                         confirm (PATCH)
///
/// /actuaciones                                     list, create
/// /actuaciones/{id}                                get
///
/// /abogados                                        list (?tipo, disponible)
/// /abogados/{id}                                   get
///
/// /partidos-judiciales                             list
/// /partidos-judiciales/{id}                        get
///
/// /oficio/configuracion                            get, patch
/// /oficio/estadisticas                             aggregate statistics (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/turnos", turno::router())
        .nest("/guardias", guardia::router())
        .nest("/actuaciones", actuacion::router())
        .nest("/abogados", abogado::router())
        .nest("/partidos-judiciales", partido_judicial::router())
        .nest("/oficio", oficio::router())
}
