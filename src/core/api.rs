//! HTTP API
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /detect - Single-turn detection
//! - POST /session/{id}/turn - Detect and fold into the session's SPRT
//! - GET /session/{id} - Session evidence state
//! - DELETE /session/{id} - Reset session
//! - GET /stats - Accumulator statistics
//! - POST /gate - Nonconformity score and gate decision
//! - GET /calibration - Active calibration record
//! - POST /calibration/reload - Reload the record from disk

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::core::{CalibrationGate, Detector, EvidenceAccumulator, NonconformityScorer};
use crate::error::ConfigError;
use crate::types::{
    AccumulatorStats, CalibrationResult, DimensionalState, GateDecision, Nonconformity,
    SessionEvidenceState, TurnEvidence, TurnOutput,
};

/// App state
#[derive(Debug)]
pub struct AppState {
    pub detector: Detector,
    pub accumulator: EvidenceAccumulator,
    pub scorer: NonconformityScorer,
    pub gate: CalibrationGate,
    pub calibration_path: PathBuf,
}

impl AppState {
    /// Build components from config. The gate starts empty.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            detector: Detector::new(),
            accumulator: EvidenceAccumulator::new(config.accumulator)?,
            scorer: NonconformityScorer::new(config.calibrator)?,
            gate: CalibrationGate::new(),
            calibration_path: config.calibration_path,
        })
    }
}

/// Text request, language defaults to English
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
    pub calibration_loaded: bool,
}

/// Gate response
#[derive(Debug, Serialize)]
pub struct GateResponse {
    pub state: DimensionalState,
    pub nonconformity: Nonconformity,
    pub decision: GateDecision,
}

/// Reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub loaded: bool,
    pub threshold: Option<f64>,
}

/// Create the API router, loading the calibration record if one exists
pub fn create_router(config: EngineConfig) -> Result<Router, ConfigError> {
    let state = AppState::new(config)?;
    if let Err(e) = state.gate.reload_from(&state.calibration_path) {
        warn!(error = %e, "calibration record unreadable, gate escalates everything");
    }
    Ok(router(Arc::new(state)))
}

/// Router over prepared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/detect", post(detect))
        .route("/session/:id", get(get_session).delete(reset_session))
        .route("/session/:id/turn", post(add_turn))
        .route("/stats", get(stats))
        .route("/gate", post(gate))
        .route("/calibration", get(get_calibration))
        .route("/calibration/reload", post(reload_calibration))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: state.accumulator.active_sessions(),
        calibration_loaded: state.gate.is_loaded(),
    })
}

async fn detect(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<DimensionalState> {
    Json(state.detector.detect(&req.text, &req.language))
}

/// Detect a turn and fold it into the session
async fn add_turn(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<TextRequest>,
) -> Json<TurnOutput> {
    let detected = state.detector.detect(&req.text, &req.language);
    let evidence = TurnEvidence::new(req.text, detected.clone());
    let session = state.accumulator.accumulate(&id, &evidence);
    Json(TurnOutput::new(detected, Some(session)))
}

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionEvidenceState>, StatusCode> {
    state
        .accumulator
        .get_state(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn reset_session(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    if state.accumulator.reset_session(&id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn stats(State(state): State<Arc<AppState>>) -> Json<AccumulatorStats> {
    Json(state.accumulator.get_stats())
}

async fn gate(State(state): State<Arc<AppState>>, Json(req): Json<TextRequest>) -> Json<GateResponse> {
    let detected = state.detector.detect(&req.text, &req.language);
    let nonconformity = state.scorer.score(&detected, &req.text);
    let decision = state.gate.decide(nonconformity.score);
    Json(GateResponse {
        state: detected,
        nonconformity,
        decision,
    })
}

async fn get_calibration(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CalibrationResult>, StatusCode> {
    state
        .gate
        .current()
        .map(|result| Json(result.as_ref().clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn reload_calibration(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReloadResponse>, StatusCode> {
    let loaded = state.gate.reload_from(&state.calibration_path).map_err(|e| {
        warn!(error = %e, path = %state.calibration_path.display(), "calibration reload failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(ReloadResponse {
        loaded,
        threshold: state.gate.current().map(|r| r.threshold),
    }))
}

/// Run the API server
pub async fn run_server(addr: &str, config: EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, version = crate::VERSION, "vmode API listening");
    axum::serve(listener, router).await?;
    Ok(())
}
