//! Core types for vmode

mod vertical;
mod state;
mod evidence;
mod reason;
mod calibration;
mod output;

pub use vertical::{Vertical, HorizontalTag, Language, VerticalScores};
pub use state::{DimensionalState, ExclusionKind, MarkerHit, integration_of};
pub use evidence::{Decision, TurnEvidence, SessionEvidenceState, DecisionDistribution, AccumulatorStats};
pub use reason::{DecisionReason, GateReason};
pub use calibration::{CalibrationCase, CalibrationResult, Nonconformity, ScoreStats, StabilityLevel, GateDecision};
pub use output::TurnOutput;
