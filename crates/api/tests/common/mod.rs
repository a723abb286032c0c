#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use oficio_db::models::configuracion::ConfiguracionTurnos;
use oficio_db::RosterStore;
use tower::ServiceExt;

use oficio_api::config::ServerConfig;
use oficio_api::router::build_app_router;
use oficio_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        seed_demo_data: false,
        log_json: false,
    }
}

/// Build the full application router over a fresh store.
///
/// With `seed` the demo lawyers and jurisdictions are loaded first.
pub async fn build_test_app(seed: bool) -> Router {
    let store = oficio_db::create_store(ConfiguracionTurnos::default(), seed).await;
    build_test_app_with_store(Arc::new(store))
}

/// Build the application router over an existing store.
pub fn build_test_app_with_store(store: Arc<RosterStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a penal turno through the API and return its id.
pub async fn create_turno(app: &Router, abogado_id: &str, nombre: &str, inicio: &str, fin: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/turnos",
        serde_json::json!({
            "tipo": "penal",
            "partido_judicial": "Madrid",
            "fecha_inicio": inicio,
            "fecha_fin": fin,
            "abogado_id": abogado_id,
            "abogado_nombre": nombre,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}
