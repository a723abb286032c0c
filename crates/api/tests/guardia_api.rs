//! Integration tests for the `/api/v1/guardias` endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, create_turno, get, patch_json, post_json};
use serde_json::json;

async fn create_guardia(app: &Router, turno_id: &str, fecha: &str, inicio: &str, fin: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/guardias",
        json!({
            "turno_id": turno_id,
            "fecha": fecha,
            "hora_inicio": inicio,
            "hora_fin": fin,
            "modalidad": "presencial",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_guardia_starts_unconfirmed() {
    let app = common::build_test_app(false).await;
    let turno = create_turno(&app, "ABG-001", "María González", "2026-03-02", "2026-03-08").await;

    let response = post_json(
        app,
        "/api/v1/guardias",
        json!({
            "turno_id": turno,
            "fecha": "2026-03-03",
            "hora_inicio": "22:00",
            "hora_fin": "08:00",
            "modalidad": "localizable",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], "GUARDIA-001");
    assert_eq!(json["confirmada"], false);
    assert_eq!(json["hora_inicio"], "22:00");
    assert_eq!(json["hora_fin"], "08:00");
    assert_eq!(json["modalidad"], "localizable");
}

#[tokio::test]
async fn create_guardia_for_missing_turno_returns_404() {
    let app = common::build_test_app(false).await;
    let response = post_json(
        app,
        "/api/v1/guardias",
        json!({
            "turno_id": "TURNO-042",
            "fecha": "2026-03-03",
            "hora_inicio": "08:00",
            "hora_fin": "20:00",
            "modalidad": "presencial",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Turno with id TURNO-042 not found"
    );
}

#[tokio::test]
async fn create_guardia_rejects_malformed_time() {
    let app = common::build_test_app(false).await;
    let turno = create_turno(&app, "ABG-001", "María González", "2026-03-02", "2026-03-08").await;

    let response = post_json(
        app,
        "/api/v1/guardias",
        json!({
            "turno_id": turno,
            "fecha": "2026-03-03",
            "hora_inicio": "25:00",
            "hora_fin": "08:00",
            "modalidad": "presencial",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn confirm_is_idempotent() {
    let app = common::build_test_app(false).await;
    let turno = create_turno(&app, "ABG-001", "María González", "2026-03-02", "2026-03-08").await;
    let id = create_guardia(&app, &turno, "2026-03-03", "08:00", "20:00").await;

    for _ in 0..2 {
        let response = patch_json(
            app.clone(),
            &format!("/api/v1/guardias/{id}/confirmar"),
            json!({}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["confirmada"], true);
    }

    let json = body_json(get(app, &format!("/api/v1/guardias/{id}")).await).await;
    assert_eq!(json["confirmada"], true);
}

#[tokio::test]
async fn confirm_missing_guardia_returns_404() {
    let app = common::build_test_app(false).await;
    let response = patch_json(app, "/api/v1/guardias/GUARDIA-777/confirmar", json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn list_filters_by_turno_and_confirmation() {
    let app = common::build_test_app(false).await;
    let t1 = create_turno(&app, "ABG-001", "María González", "2026-03-02", "2026-03-08").await;
    let t2 = create_turno(&app, "ABG-002", "Carlos Ruiz", "2026-03-09", "2026-03-15").await;
    let g1 = create_guardia(&app, &t1, "2026-03-03", "08:00", "20:00").await;
    create_guardia(&app, &t1, "2026-03-04", "08:00", "20:00").await;
    create_guardia(&app, &t2, "2026-03-10", "08:00", "20:00").await;
    patch_json(app.clone(), &format!("/api/v1/guardias/{g1}/confirmar"), json!({})).await;

    let json = body_json(get(app.clone(), &format!("/api/v1/guardias?turno_id={t1}")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(app, "/api/v1/guardias?confirmada=false").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|g| g["id"] != g1.as_str()));
}

#[tokio::test]
async fn upcoming_uses_configured_window_and_skips_confirmed() {
    let app = common::build_test_app(false).await;
    let turno = create_turno(&app, "ABG-001", "María González", "2026-03-02", "2026-03-08").await;
    let soon = create_guardia(&app, &turno, "2026-03-03", "08:00", "20:00").await;
    let later = create_guardia(&app, &turno, "2026-03-05", "22:00", "08:00").await;

    // Default 24h window from 2026-03-02 12:00 reaches 2026-03-03 12:00.
    let json = body_json(get(app.clone(), "/api/v1/guardias/proximas?desde=2026-03-02T12:00:00").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], soon.as_str());

    let json = body_json(
        get(app.clone(), "/api/v1/guardias/proximas?desde=2026-03-02T12:00:00&horas=96").await,
    )
    .await;
    let ids: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, [soon.as_str(), later.as_str()]);

    patch_json(app.clone(), &format!("/api/v1/guardias/{soon}/confirmar"), json!({})).await;
    let json = body_json(
        get(app, "/api/v1/guardias/proximas?desde=2026-03-02T12:00:00&horas=96").await,
    )
    .await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], later.as_str());
}

#[tokio::test]
async fn upcoming_rejects_out_of_range_window() {
    let app = common::build_test_app(false).await;
    let response = get(app, "/api/v1/guardias/proximas?horas=0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn upcoming_window_past_calendar_end_is_bad_request() {
    let app = common::build_test_app(false).await;
    // Debug output round-trips through `FromStr`, including the signed year.
    let desde = format!("{:?}", chrono::NaiveDateTime::MAX).replace('+', "%2B");
    let response = get(app, &format!("/api/v1/guardias/proximas?desde={desde}&horas=720")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
