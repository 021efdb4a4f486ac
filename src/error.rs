//! Error types
//!
//! Business logic never fails: these cover malformed configuration (fail fast
//! at construction) and calibration record I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration, raised at construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("prior must lie strictly between 0 and 1, got {0}")]
    InvalidPrior(f64),
    #[error("decay must lie in (0, 1], got {0}")]
    InvalidDecay(f64),
    #[error("thresholds must satisfy lower < 0 < upper, got lower={lower} upper={upper}")]
    NonMonotonicThresholds { lower: f64, upper: f64 },
    #[error("max_turns must be at least 1")]
    InvalidMaxTurns,
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be a finite value in [0, 1], got {value}")]
    OutOfUnitInterval { name: &'static str, value: f64 },
    #[error("target_recall must lie strictly between 0 and 1, got {0}")]
    InvalidTargetRecall(f64),
    #[error("ambiguity gaps must satisfy 0 <= strong <= weak, got strong={strong} weak={weak}")]
    InvalidAmbiguityGaps { strong: f64, weak: f64 },
    #[error("critical sample count ({critical}) exceeds minimum sample count ({minimum})")]
    InvalidSampleCounts { critical: usize, minimum: usize },
    #[error("max_sessions must be at least 1 when set")]
    InvalidSessionCap,
    #[error("failed to read config {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Calibration record and case-set I/O
#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("calibration storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("calibration serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
