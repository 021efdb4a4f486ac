//! vmode: vertical dimension detection for conversational turns
//!
//! Detector → per-turn DimensionalState → SPRT accumulator (per session),
//! and offline: labeled cases → nonconformity scores → calibrated gate.

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use config::{AccumulatorConfig, CalibratorConfig, EngineConfig};
pub use error::{CalibrationError, ConfigError};

// =============================================================================
// DETECTOR THRESHOLDS [C]
// =============================================================================

/// EXISTENTIAL score that must be exceeded (strictly) to trigger V-mode
pub const V_MODE_THRESHOLD: f64 = 0.6;

/// SOMATIC score an unexcluded distress marker must reach for an emergency
pub const EMERGENCY_THRESHOLD: f64 = 0.5;

/// Words an exclusion may sit away from the distress phrase it explains
pub const EXCLUSION_WINDOW_WORDS: usize = 2;

// =============================================================================
// SPRT DEFAULTS [C]
// =============================================================================

/// Prior probability of H1 (existential)
pub const DEFAULT_PRIOR: f64 = 0.3;

/// Decay applied to accumulated log-ratio before each new turn
pub const DEFAULT_DECAY: f64 = 0.8;

/// ln(19): posterior ≈ 0.95
pub const SPRT_UPPER_THRESHOLD: f64 = 2.944_438_979_166_440_5;

/// -ln(19): posterior ≈ 0.05
pub const SPRT_LOWER_THRESHOLD: f64 = -2.944_438_979_166_440_5;

/// Turns after which the sign rule forces a decision
pub const DEFAULT_MAX_TURNS: usize = 5;

/// Likelihood added per explicit marker on either side
pub const DEFAULT_MARKER_INCREMENT: f64 = 0.2;

/// Floor for both likelihood sides
pub const LIKELIHOOD_EPSILON: f64 = 0.01;

// =============================================================================
// CALIBRATION DEFAULTS [C]
// =============================================================================

pub const DEFAULT_TARGET_RECALL: f64 = 0.95;

/// Below this many positives the threshold carries a stability warning
pub const MIN_POSITIVE_SAMPLES: usize = 20;

/// Below this many positives the warning is critical
pub const CRITICAL_POSITIVE_SAMPLES: usize = 10;

/// Triggered V-mode caps the nonconformity score here
pub const V_MODE_SCORE_CAP: f64 = 0.15;

/// Top-vs-second gap below which the strong ambiguity penalty applies
pub const AMBIGUITY_GAP_STRONG: f64 = 0.15;
pub const AMBIGUITY_PENALTY_STRONG: f64 = 0.15;

/// Top-vs-second gap below which the weak ambiguity penalty applies
pub const AMBIGUITY_GAP_WEAK: f64 = 0.25;
pub const AMBIGUITY_PENALTY_WEAK: f64 = 0.08;

/// Where calibration records live unless the caller says otherwise
pub const DEFAULT_CALIBRATION_PATH: &str = "artifacts/calibration.json";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
