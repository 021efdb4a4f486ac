//! Threshold calibrator: nonconformity scoring and conformal threshold selection
//!
//! A(x) is high when a turn is confidently NOT existential. τ is chosen from
//! the positive (existential) scores so that at least `target_recall` of
//! future positives score at or below it; anything above τ may skip the
//! secondary check.

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::CalibratorConfig;
use crate::core::detector::{normalize, Detector};
use crate::core::lexicon::lexicon;
use crate::error::{CalibrationError, ConfigError};
use crate::types::{
    CalibrationCase, CalibrationResult, DimensionalState, Nonconformity, ScoreStats, StabilityLevel,
};
use crate::DEFAULT_CALIBRATION_PATH;

/// Guards the rank ceiling against float representation error
const RANK_TOLERANCE: f64 = 1e-9;

// =============================================================================
// NONCONFORMITY
// =============================================================================

#[derive(Debug, Clone)]
pub struct NonconformityScorer {
    config: CalibratorConfig,
}

impl NonconformityScorer {
    pub fn new(config: CalibratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A(x) for a detected turn and its raw message
    pub fn score(&self, state: &DimensionalState, message: &str) -> Nonconformity {
        let c = &self.config;
        let base = state.vertical.existential;

        let text = normalize(message);
        let raw_boost: f64 = lexicon(state.language)
            .boost
            .iter()
            .filter(|m| m.regex.is_match(&text))
            .map(|m| m.weight)
            .sum();
        // Saturating union of the detector score and the boost evidence
        let boosted = (1.0 - (1.0 - base) * (-raw_boost).exp()).max(base);

        let mut score = 1.0 - boosted;
        let mut v_mode_capped = false;
        if state.v_mode_triggered && score > c.v_mode_score_cap {
            score = c.v_mode_score_cap;
            v_mode_capped = true;
        }

        let top_gap = state.top_gap();
        let ambiguity_penalty = if top_gap < c.ambiguity_gap_strong {
            c.ambiguity_penalty_strong
        } else if top_gap < c.ambiguity_gap_weak {
            c.ambiguity_penalty_weak
        } else {
            0.0
        };

        Nonconformity {
            score: (score - ambiguity_penalty).clamp(0.0, 1.0),
            base_existential: base,
            boosted_existential: boosted,
            boost: boosted - base,
            top_gap,
            ambiguity_penalty,
            v_mode_capped,
        }
    }
}

// =============================================================================
// CALIBRATION
// =============================================================================

#[derive(Debug, Clone)]
pub struct ThresholdCalibrator {
    detector: Detector,
    scorer: NonconformityScorer,
    config: CalibratorConfig,
}

impl ThresholdCalibrator {
    pub fn new(config: CalibratorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            detector: Detector::new(),
            scorer: NonconformityScorer::new(config.clone())?,
            config,
        })
    }

    pub fn scorer(&self) -> &NonconformityScorer {
        &self.scorer
    }

    /// Detect and score every case, then select τ
    pub fn calibrate(&self, cases: &[CalibrationCase]) -> CalibrationResult {
        let mut positives = Vec::new();
        let mut negatives = Vec::new();
        for case in cases {
            let state = self.detector.detect(&case.text, &case.language);
            let score = self.scorer.score(&state, &case.text).score;
            if case.label {
                positives.push(score);
            } else {
                negatives.push(score);
            }
        }

        let mut result = self.calibrate_scores(&positives, &negatives);
        result.case_set_fingerprint = fingerprint(cases);
        result
    }

    /// Select τ from precomputed scores
    pub fn calibrate_scores(&self, positives: &[f64], negatives: &[f64]) -> CalibrationResult {
        let c = &self.config;
        let mut sorted = positives.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        let rank_index = rank_index(n, c.target_recall, c.finite_sample_correction);
        let threshold = rank_index.map(|i| sorted[i]).unwrap_or(1.0);

        let estimated_skip_rate = fraction(negatives, |s| s > threshold);
        let empirical_recall = fraction(positives, |s| s <= threshold);

        let (stability, stability_warning) = if n < c.critical_positive_samples {
            (
                StabilityLevel::Critical,
                Some(format!(
                    "CRITICAL: only {} positive samples (< {}); threshold is unreliable",
                    n, c.critical_positive_samples
                )),
            )
        } else if n < c.min_positive_samples {
            (
                StabilityLevel::Low,
                Some(format!(
                    "only {} positive samples (< {}); threshold may be unstable",
                    n, c.min_positive_samples
                )),
            )
        } else {
            (StabilityLevel::Stable, None)
        };

        if let Some(message) = &stability_warning {
            warn!(n_positives = n, "{}", message);
        }
        info!(
            threshold,
            n_positives = n,
            n_negatives = negatives.len(),
            skip_rate = estimated_skip_rate,
            "calibrated threshold"
        );

        CalibrationResult {
            threshold,
            target_recall: c.target_recall,
            alpha: c.alpha(),
            n_positives: n,
            n_negatives: negatives.len(),
            estimated_skip_rate,
            empirical_recall,
            positive_stats: ScoreStats::from_scores(positives),
            negative_stats: ScoreStats::from_scores(negatives),
            stability,
            stability_warning,
            finite_sample_correction: c.finite_sample_correction,
            rank_index,
            timestamp: Utc::now(),
            case_count: n + negatives.len(),
            case_set_fingerprint: String::new(),
        }
    }
}

/// 0-based rank into n ascending scores:
/// ceil(q·(n+1)) - 1 with correction, ceil(q·n) - 1 without, clamped to [0, n-1]
pub fn rank_index(n: usize, target_recall: f64, finite_sample_correction: bool) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let m = if finite_sample_correction { n + 1 } else { n };
    let rank = (target_recall * m as f64 - RANK_TOLERANCE).ceil() as i64 - 1;
    Some(rank.clamp(0, n as i64 - 1) as usize)
}

fn fraction(scores: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().filter(|s| predicate(**s)).count() as f64 / scores.len() as f64
}

/// SHA-256 over (language, label, text) of every case, in order
pub fn fingerprint(cases: &[CalibrationCase]) -> String {
    let mut hasher = Sha256::new();
    for case in cases {
        hasher.update(case.language.as_bytes());
        hasher.update([0u8, case.label as u8, 0u8]);
        hasher.update(case.text.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Write a record as pretty JSON, creating parent directories
pub fn save_calibration(result: &CalibrationResult, path: Option<&Path>) -> Result<PathBuf, CalibrationError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CALIBRATION_PATH));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(result)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), threshold = result.threshold, "saved calibration");
    Ok(path)
}

/// Read a record; a missing file is `Ok(None)`
pub fn load_calibration(path: Option<&Path>) -> Result<Option<CalibrationResult>, CalibrationError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CALIBRATION_PATH));
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "no calibration record");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Read a JSON array of labeled cases
pub fn load_cases(path: &Path) -> Result<Vec<CalibrationCase>, CalibrationError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

// =============================================================================
// TESTS
// =============================================================================
