//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;
use vmode::core::{create_router, save_calibration, ThresholdCalibrator};
use vmode::{CalibratorConfig, EngineConfig};

fn calibration_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vmode_api_{}_{}.json", name, std::process::id()))
}

fn create_test_router(name: &str) -> Router {
    let config = EngineConfig {
        calibration_path: calibration_path(name),
        ..Default::default()
    };
    create_router(config).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router("health");
    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["calibration_loaded"], false);
}

#[tokio::test]
async fn test_detect_endpoint() {
    let app = create_test_router("detect");
    let (status, json) = send(
        &app,
        "POST",
        "/detect",
        Some(r#"{"text": "I can't breathe, my heart is pounding, I'm scared"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["emergency_detected"], true);
    assert_eq!(json["primary_vertical"], "SOMATIC");
    assert_eq!(json["language"], "en");
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = create_test_router("session");

    let (status, _) = send(&app, "GET", "/session/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(
        &app,
        "POST",
        "/session/abc/turn",
        Some(r#"{"text": "Can you help me fix the bug before the deadline?", "language": "en"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["evidence"]["decision"], "HYPOTHESIS_B");
    assert_eq!(json["evidence"]["turns"], 1);

    let (status, json) = send(&app, "GET", "/session/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["session_id"], "abc");

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["active_sessions"], 1);
    assert_eq!(json["decision_distribution"]["HYPOTHESIS_B"], 1);

    let (status, _) = send(&app, "DELETE", "/session/abc", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/session/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gate_without_calibration_escalates() {
    let app = create_test_router("gate_empty");
    let (status, json) = send(
        &app,
        "POST",
        "/gate",
        Some(r#"{"text": "Please schedule a meeting and send the invoice"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["decision"]["skip"], false);
    assert_eq!(json["decision"]["reason"], "R203_NO_CALIBRATION");

    let (status, _) = send(&app, "GET", "/calibration", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_calibration_reload_enables_skipping() {
    let app = create_test_router("gate_reload");
    let path = calibration_path("gate_reload");

    let (status, json) = send(&app, "POST", "/calibration/reload", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["loaded"], false);

    let result = ThresholdCalibrator::new(CalibratorConfig::default())
        .unwrap()
        .calibrate_scores(&[0.2, 0.3, 0.4], &[1.0]);
    save_calibration(&result, Some(&path)).unwrap();

    let (status, json) = send(&app, "POST", "/calibration/reload", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["loaded"], true);
    assert_eq!(json["threshold"], 0.4);

    let (status, json) = send(
        &app,
        "POST",
        "/gate",
        Some(r#"{"text": "Please schedule a meeting and send the invoice"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["nonconformity"]["score"], 1.0);
    assert_eq!(json["decision"]["skip"], true);
    assert_eq!(json["decision"]["reason"], "R201_ABOVE_THRESHOLD");

    let (status, json) = send(&app, "GET", "/calibration", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["n_positives"], 3);

    std::fs::remove_file(&path).unwrap();
}
