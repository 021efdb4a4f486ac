//! Calibration records and nonconformity scores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::GateReason;

/// One labeled case for calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCase {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// True if this is an existential/urgent case
    pub label: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl CalibrationCase {
    pub fn new(text: impl Into<String>, language: impl Into<String>, label: bool) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            label,
        }
    }
}

/// Nonconformity score A(x) with its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nonconformity {
    /// Final A(x) in [0,1]; high = confidently not existential
    pub score: f64,
    /// EXISTENTIAL score from the detector
    pub base_existential: f64,
    /// After the lexicon boost (never below base)
    pub boosted_existential: f64,
    /// boosted - base
    pub boost: f64,
    /// Top minus second-highest vertical score
    pub top_gap: f64,
    /// Amount subtracted for an ambiguous top dimension
    pub ambiguity_penalty: f64,
    /// Score was capped because V-mode triggered
    pub v_mode_capped: bool,
}

/// Summary statistics of one score class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ScoreStats {
    /// None for an empty class
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: scores.len(),
            mean,
            std: variance.sqrt(),
            min,
            max,
        })
    }
}

/// How much to trust a threshold given the positive sample count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StabilityLevel {
    Stable,
    Low,
    Critical,
}

/// Output of one calibration run. Superseded, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationResult {
    /// τ: scores strictly above this are safe to skip
    pub threshold: f64,
    pub target_recall: f64,
    pub alpha: f64,
    pub n_positives: usize,
    pub n_negatives: usize,
    /// Fraction of negatives scoring above τ
    pub estimated_skip_rate: f64,
    /// Fraction of calibration positives scoring at or below τ
    pub empirical_recall: f64,
    pub positive_stats: Option<ScoreStats>,
    pub negative_stats: Option<ScoreStats>,
    pub stability: StabilityLevel,
    pub stability_warning: Option<String>,
    pub finite_sample_correction: bool,
    /// Rank selected in the sorted positive scores
    pub rank_index: Option<usize>,
    pub timestamp: DateTime<Utc>,
    pub case_count: usize,
    /// SHA-256 over the case set (hex), empty when calibrated from raw scores
    #[serde(default)]
    pub case_set_fingerprint: String,
}

impl CalibrationResult {
    /// Static gate: true means the secondary check may be skipped
    pub fn should_skip(&self, score: f64) -> bool {
        score > self.threshold
    }
}

/// Gate verdict for one nonconformity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    pub skip: bool,
    pub score: f64,
    pub threshold: Option<f64>,
    pub reason: GateReason,
}

// =============================================================================
// TESTS
// =============================================================================
