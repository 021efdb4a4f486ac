//! Engine configuration
//!
//! Every field defaults to the constants in `lib.rs`. A JSON file only needs to
//! name the fields it overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::{
    AMBIGUITY_GAP_STRONG, AMBIGUITY_GAP_WEAK, AMBIGUITY_PENALTY_STRONG, AMBIGUITY_PENALTY_WEAK,
    CRITICAL_POSITIVE_SAMPLES, DEFAULT_CALIBRATION_PATH, DEFAULT_DECAY, DEFAULT_MARKER_INCREMENT,
    DEFAULT_MAX_TURNS, DEFAULT_PRIOR, DEFAULT_TARGET_RECALL, LIKELIHOOD_EPSILON,
    MIN_POSITIVE_SAMPLES, SPRT_LOWER_THRESHOLD, SPRT_UPPER_THRESHOLD, V_MODE_SCORE_CAP,
};

/// Sequential test parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    /// Prior probability of H1 (existential)
    pub prior: f64,
    /// Multiplier applied to the old log-ratio before adding a new turn
    pub decay: f64,
    /// log-ratio at or above which H1 is accepted
    pub upper_threshold: f64,
    /// log-ratio at or below which H0 is accepted
    pub lower_threshold: f64,
    /// Turn count at which the sign rule forces a decision
    pub max_turns: usize,
    /// Likelihood mass added per explicit marker
    pub marker_increment: f64,
    /// Floor for both sides of the likelihood ratio
    pub epsilon: f64,
    /// Optional cap on live sessions (least recently updated evicted first)
    pub max_sessions: Option<usize>,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            prior: DEFAULT_PRIOR,
            decay: DEFAULT_DECAY,
            upper_threshold: SPRT_UPPER_THRESHOLD,
            lower_threshold: SPRT_LOWER_THRESHOLD,
            max_turns: DEFAULT_MAX_TURNS,
            marker_increment: DEFAULT_MARKER_INCREMENT,
            epsilon: LIKELIHOOD_EPSILON,
            max_sessions: None,
        }
    }
}

impl AccumulatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.prior > 0.0 && self.prior < 1.0) {
            return Err(ConfigError::InvalidPrior(self.prior));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(ConfigError::InvalidDecay(self.decay));
        }
        if !(self.lower_threshold < 0.0 && self.upper_threshold > 0.0)
            || !self.lower_threshold.is_finite()
            || !self.upper_threshold.is_finite()
        {
            return Err(ConfigError::NonMonotonicThresholds {
                lower: self.lower_threshold,
                upper: self.upper_threshold,
            });
        }
        if self.max_turns == 0 {
            return Err(ConfigError::InvalidMaxTurns);
        }
        positive("marker_increment", self.marker_increment)?;
        positive("epsilon", self.epsilon)?;
        if self.max_sessions == Some(0) {
            return Err(ConfigError::InvalidSessionCap);
        }
        Ok(())
    }

    /// Initial log-ratio implied by the prior
    pub fn prior_log_ratio(&self) -> f64 {
        (self.prior / (1.0 - self.prior)).ln()
    }
}

/// Nonconformity scoring and threshold selection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibratorConfig {
    pub target_recall: f64,
    /// Use the (n+1) rank correction
    pub finite_sample_correction: bool,
    pub min_positive_samples: usize,
    pub critical_positive_samples: usize,
    pub v_mode_score_cap: f64,
    pub ambiguity_gap_strong: f64,
    pub ambiguity_penalty_strong: f64,
    pub ambiguity_gap_weak: f64,
    pub ambiguity_penalty_weak: f64,
}

impl Default for CalibratorConfig {
    fn default() -> Self {
        Self {
            target_recall: DEFAULT_TARGET_RECALL,
            finite_sample_correction: true,
            min_positive_samples: MIN_POSITIVE_SAMPLES,
            critical_positive_samples: CRITICAL_POSITIVE_SAMPLES,
            v_mode_score_cap: V_MODE_SCORE_CAP,
            ambiguity_gap_strong: AMBIGUITY_GAP_STRONG,
            ambiguity_penalty_strong: AMBIGUITY_PENALTY_STRONG,
            ambiguity_gap_weak: AMBIGUITY_GAP_WEAK,
            ambiguity_penalty_weak: AMBIGUITY_PENALTY_WEAK,
        }
    }
}

impl CalibratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_recall > 0.0 && self.target_recall < 1.0) {
            return Err(ConfigError::InvalidTargetRecall(self.target_recall));
        }
        unit_interval("v_mode_score_cap", self.v_mode_score_cap)?;
        unit_interval("ambiguity_gap_strong", self.ambiguity_gap_strong)?;
        unit_interval("ambiguity_gap_weak", self.ambiguity_gap_weak)?;
        unit_interval("ambiguity_penalty_strong", self.ambiguity_penalty_strong)?;
        unit_interval("ambiguity_penalty_weak", self.ambiguity_penalty_weak)?;
        if !(self.ambiguity_gap_strong >= 0.0 && self.ambiguity_gap_strong <= self.ambiguity_gap_weak) {
            return Err(ConfigError::InvalidAmbiguityGaps {
                strong: self.ambiguity_gap_strong,
                weak: self.ambiguity_gap_weak,
            });
        }
        if self.critical_positive_samples > self.min_positive_samples {
            return Err(ConfigError::InvalidSampleCounts {
                critical: self.critical_positive_samples,
                minimum: self.min_positive_samples,
            });
        }
        Ok(())
    }

    /// α = 1 - target_recall
    pub fn alpha(&self) -> f64 {
        1.0 - self.target_recall
    }
}

/// Top-level configuration for the CLI and HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub accumulator: AccumulatorConfig,
    pub calibrator: CalibratorConfig,
    pub calibration_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            accumulator: AccumulatorConfig::default(),
            calibrator: CalibratorConfig::default(),
            calibration_path: PathBuf::from(DEFAULT_CALIBRATION_PATH),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file and validate
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: EngineConfig = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.accumulator.validate()?;
        self.calibrator.validate()
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitInterval { name, value })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_thresholds_are_ln_19() {
        let config = AccumulatorConfig::default();
        assert!((config.upper_threshold - 19f64.ln()).abs() < 1e-12);
        assert!((config.lower_threshold + 19f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_prior_log_ratio() {
        let config = AccumulatorConfig::default();
        assert!((config.prior_log_ratio() - (0.3f64 / 0.7).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = AccumulatorConfig {
            upper_threshold: -1.0,
            lower_threshold: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonMonotonicThresholds { .. })
        ));
    }

    #[test]
    fn test_bad_prior_rejected() {
        for prior in [0.0, 1.0, -0.2, f64::NAN] {
            let config = AccumulatorConfig { prior, ..Default::default() };
            assert!(config.validate().is_err(), "prior {} should be rejected", prior);
        }
    }

    #[test]
    fn test_zero_max_turns_rejected() {
        let config = AccumulatorConfig { max_turns: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxTurns));
    }

    #[test]
    fn test_bad_target_recall_rejected() {
        let config = CalibratorConfig { target_recall: 1.0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTargetRecall(1.0)));
    }

    #[test]
    fn test_score_shaping_values_must_be_unit_interval() {
        let cases = [
            CalibratorConfig { v_mode_score_cap: -0.1, ..Default::default() },
            CalibratorConfig { v_mode_score_cap: f64::NAN, ..Default::default() },
            CalibratorConfig { ambiguity_penalty_strong: 1.5, ..Default::default() },
            CalibratorConfig { ambiguity_penalty_weak: f64::INFINITY, ..Default::default() },
            CalibratorConfig { ambiguity_gap_weak: 2.0, ..Default::default() },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::OutOfUnitInterval { .. })),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_invalid_calibrator_config_fails_at_construction() {
        let config = CalibratorConfig { ambiguity_penalty_weak: -0.08, ..Default::default() };
        assert!(matches!(
            crate::core::ThresholdCalibrator::new(config),
            Err(ConfigError::OutOfUnitInterval { name: "ambiguity_penalty_weak", .. })
        ));
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let json = r#"{"accumulator": {"max_turns": 8}, "calibrator": {"target_recall": 0.9}}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.accumulator.max_turns, 8);
        assert_eq!(config.accumulator.decay, DEFAULT_DECAY);
        assert_eq!(config.calibrator.target_recall, 0.9);
        assert!(config.calibrator.finite_sample_correction);
        assert_eq!(config.calibration_path, PathBuf::from(DEFAULT_CALIBRATION_PATH));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("vmode_config_does_not_exist.json");
        assert!(matches!(EngineConfig::load(&path), Err(ConfigError::Read { .. })));
    }
}
