//! Integration tests for lawyers, jurisdictions, roster configuration and
//! statistics.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_turno, get, patch_json, post_json};
use serde_json::json;

#[tokio::test]
async fn abogados_filter_by_type_and_availability() {
    let app = common::build_test_app(true).await;

    let json = body_json(get(app.clone(), "/api/v1/abogados").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);

    let json = body_json(get(app.clone(), "/api/v1/abogados?tipo=violencia_genero").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(
        get(app.clone(), "/api/v1/abogados?tipo=violencia_genero&disponible=true").await,
    )
    .await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["nombre"], "María González");

    let response = get(app, "/api/v1/abogados/ABG-099").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partidos_judiciales_are_listed() {
    let app = common::build_test_app(true).await;

    let json = body_json(get(app.clone(), "/api/v1/partidos-judiciales").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["nombre"], "Madrid");

    let json = body_json(get(app, "/api/v1/partidos-judiciales/PJ-003").await).await;
    assert_eq!(json["nombre"], "Getafe");
}

#[tokio::test]
async fn configuration_has_defaults() {
    let app = common::build_test_app(false).await;
    let json = body_json(get(app, "/api/v1/oficio/configuracion").await).await;

    assert_eq!(json["partido_judicial"], "Madrid");
    assert_eq!(json["rotacion_automatica"], true);
    assert_eq!(json["frecuencia_rotacion"], "semanal");
    assert_eq!(json["no_consecutivos"], true);
    assert_eq!(json["horas_alerta"], 24);
}

#[tokio::test]
async fn configuration_patch_merges_present_fields() {
    let app = common::build_test_app(false).await;

    let response = patch_json(
        app.clone(),
        "/api/v1/oficio/configuracion",
        json!({ "frecuencia_rotacion": "mensual", "horas_alerta": 48 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/oficio/configuracion").await).await;
    assert_eq!(json["frecuencia_rotacion"], "mensual");
    assert_eq!(json["horas_alerta"], 48);
    assert_eq!(json["partido_judicial"], "Madrid");
    assert_eq!(json["no_consecutivos"], true);
}

#[tokio::test]
async fn configuration_patch_rejects_invalid_alert_window() {
    let app = common::build_test_app(false).await;

    let response = patch_json(
        app.clone(),
        "/api/v1/oficio/configuracion",
        json!({ "horas_alerta": 0, "partido_judicial": "Getafe" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was applied.
    let json = body_json(get(app, "/api/v1/oficio/configuracion").await).await;
    assert_eq!(json["partido_judicial"], "Madrid");
}

#[tokio::test]
async fn statistics_on_empty_store_are_zero() {
    let app = common::build_test_app(false).await;
    let json = body_json(get(app, "/api/v1/oficio/estadisticas?fecha_referencia=2026-02-20").await).await;
    let stats = &json["data"];

    assert_eq!(stats["total_actuaciones"], 0);
    assert_eq!(stats["importe_total"], 0.0);
    assert_eq!(stats["mensual"].as_array().unwrap().len(), 12);
    assert!(stats["top_delitos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn statistics_aggregate_overnight_actuacion() {
    let app = common::build_test_app(false).await;
    let turno = create_turno(&app, "ABG-001", "María González", "2026-02-09", "2026-02-15").await;

    let response = post_json(
        app.clone(),
        "/api/v1/actuaciones",
        json!({
            "turno_id": turno,
            "tipo": "detenido",
            "juzgado": "Juzgado de Guardia de Madrid",
            "numero_procedimiento": "DP 88/2026",
            "fecha": "2026-02-10",
            "hora_inicio": "22:00",
            "hora_fin": "00:15",
            "delito": "Robo con violencia",
            "importe": 150.5,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/v1/oficio/estadisticas?fecha_referencia=2026-02-20").await).await;
    let stats = &json["data"];

    assert_eq!(stats["total_actuaciones"], 1);
    assert_eq!(stats["actuaciones_mes"], 1);
    assert_eq!(stats["importe_total"], 150.5);
    assert_eq!(stats["horas_totales"], 2.25);
    assert_eq!(stats["por_tipo"]["detenido"], 1);
    assert_eq!(stats["por_abogado"]["María González"], 1);
    assert_eq!(stats["mensual"][1]["mes"], "Feb");
    assert_eq!(stats["mensual"][1]["horas"], 2.25);
    assert_eq!(stats["top_delitos"][0]["nombre"], "Robo con violencia");
    assert_eq!(stats["top_juzgados"][0]["total"], 1);
    assert_eq!(stats["comparativa"]["ingresos_oficio"], 150.5);
}
