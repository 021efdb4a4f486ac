//! Runtime calibration gate
//!
//! Holds the latest CalibrationResult as an immutable snapshot. Reload swaps
//! the whole record; readers keep whichever `Arc` they already cloned.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::core::calibrator::load_calibration;
use crate::error::CalibrationError;
use crate::types::{CalibrationResult, GateDecision, GateReason};

#[derive(Debug, Default)]
pub struct CalibrationGate {
    current: RwLock<Option<Arc<CalibrationResult>>>,
}

impl CalibrationGate {
    /// Gate with nothing loaded (escalates everything)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(result: CalibrationResult) -> Self {
        let gate = Self::new();
        gate.install(result);
        gate
    }

    /// Replace the active record
    pub fn install(&self, result: CalibrationResult) {
        info!(
            threshold = result.threshold,
            n_positives = result.n_positives,
            "calibration installed"
        );
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::new(result));
    }

    /// Load from disk and swap in. A missing file leaves the gate unchanged and
    /// returns false.
    pub fn reload_from(&self, path: &Path) -> Result<bool, CalibrationError> {
        match load_calibration(Some(path))? {
            Some(result) => {
                self.install(result);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&self) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
    }

    pub fn current(&self) -> Option<Arc<CalibrationResult>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    /// Skip the secondary check only when a record is loaded and the score
    /// lies strictly above its threshold
    pub fn decide(&self, score: f64) -> GateDecision {
        match self.current() {
            None => GateDecision {
                skip: false,
                score,
                threshold: None,
                reason: GateReason::R203_NO_CALIBRATION,
            },
            Some(result) => {
                let skip = result.should_skip(score);
                GateDecision {
                    skip,
                    score,
                    threshold: Some(result.threshold),
                    reason: if skip {
                        GateReason::R201_ABOVE_THRESHOLD
                    } else {
                        GateReason::R202_AT_OR_BELOW_THRESHOLD
                    },
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalibratorConfig;
    use crate::core::calibrator::{save_calibration, ThresholdCalibrator};

    fn result_with_threshold(positives: &[f64]) -> CalibrationResult {
        ThresholdCalibrator::new(CalibratorConfig::default())
            .unwrap()
            .calibrate_scores(positives, &[])
    }

    #[test]
    fn test_empty_gate_never_skips() {
        let gate = CalibrationGate::new();
        let decision = gate.decide(0.99);
        assert!(!decision.skip);
        assert_eq!(decision.threshold, None);
        assert_eq!(decision.reason, GateReason::R203_NO_CALIBRATION);
    }

    #[test]
    fn test_threshold_is_strict() {
        let gate = CalibrationGate::with_result(result_with_threshold(&[0.4]));
        assert!(!gate.decide(0.4).skip);
        assert_eq!(gate.decide(0.4).reason, GateReason::R202_AT_OR_BELOW_THRESHOLD);
        let above = gate.decide(0.41);
        assert!(above.skip);
        assert_eq!(above.reason, GateReason::R201_ABOVE_THRESHOLD);
        assert_eq!(above.threshold, Some(0.4));
    }

    #[test]
    fn test_reader_keeps_old_snapshot_across_install() {
        let gate = CalibrationGate::with_result(result_with_threshold(&[0.3]));
        let held = gate.current().unwrap();
        gate.install(result_with_threshold(&[0.7]));
        assert_eq!(held.threshold, 0.3);
        assert_eq!(gate.current().unwrap().threshold, 0.7);
    }

    #[test]
    fn test_reload_from_disk() {
        let path = std::env::temp_dir().join("vmode_gate_reload_test.json");
        save_calibration(&result_with_threshold(&[0.25]), Some(&path)).unwrap();

        let gate = CalibrationGate::new();
        assert!(gate.reload_from(&path).unwrap());
        assert_eq!(gate.current().unwrap().threshold, 0.25);
        std::fs::remove_file(&path).unwrap();

        assert!(!gate.reload_from(&path).unwrap());
        assert!(gate.is_loaded());
        gate.clear();
        assert!(!gate.is_loaded());
    }
}
