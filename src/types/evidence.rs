//! Sequential evidence types: per-turn evidence and per-session SPRT state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::{DecisionReason, DimensionalState, Vertical};

/// Running classification of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Evidence still inconclusive
    Continue,
    /// H1: the conversation is existential
    HypothesisA,
    /// H0: the conversation is functional
    HypothesisB,
}

impl Decision {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Decision::Continue)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Continue => "inconclusive",
            Decision::HypothesisA => "existential",
            Decision::HypothesisB => "functional",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Decision::Continue => "CONTINUE",
            Decision::HypothesisA => "HYPOTHESIS_A",
            Decision::HypothesisB => "HYPOTHESIS_B",
        };
        write!(f, "{}", name)
    }
}

/// Evidence for one turn, consumed once by the accumulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEvidence {
    pub existential_markers: BTreeSet<String>,
    pub functional_markers: BTreeSet<String>,
    pub state: DimensionalState,
    pub message: String,
}

impl TurnEvidence {
    /// Build evidence from detector output, taking the unsuppressed
    /// EXISTENTIAL and FUNCTIONAL hits as explicit markers
    pub fn new(message: impl Into<String>, state: DimensionalState) -> Self {
        let existential_markers = state
            .active_markers(Vertical::Existential)
            .map(String::from)
            .collect();
        let functional_markers = state
            .active_markers(Vertical::Functional)
            .map(String::from)
            .collect();
        Self {
            existential_markers,
            functional_markers,
            state,
            message: message.into(),
        }
    }

    /// Evidence with caller-supplied marker sets
    pub fn with_markers<I, J>(message: impl Into<String>, state: DimensionalState, existential: I, functional: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            existential_markers: existential.into_iter().collect(),
            functional_markers: functional.into_iter().collect(),
            state,
            message: message.into(),
        }
    }
}

/// SPRT state for one conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvidenceState {
    pub session_id: String,
    /// Running log-likelihood ratio, existential vs functional
    pub log_ratio: f64,
    /// Turns folded in so far
    pub turns: usize,
    pub decision: Decision,
    pub reason: DecisionReason,
    /// Per-turn ln(LR) contributions, append-only
    pub turn_evidence_log: Vec<f64>,
    /// Turn at which the terminal decision was reached
    pub decided_at_turn: Option<usize>,
    /// Turns offered after the decision (not folded in)
    pub ignored_turns: usize,
}

impl SessionEvidenceState {
    pub fn new(session_id: impl Into<String>, initial_log_ratio: f64) -> Self {
        Self {
            session_id: session_id.into(),
            log_ratio: initial_log_ratio,
            turns: 0,
            decision: Decision::Continue,
            reason: DecisionReason::R100_SESSION_CREATED,
            turn_evidence_log: Vec::new(),
            decided_at_turn: None,
            ignored_turns: 0,
        }
    }

    /// Posterior probability of H1 implied by the log-ratio
    pub fn posterior(&self) -> f64 {
        1.0 / (1.0 + (-self.log_ratio).exp())
    }

    pub fn is_decided(&self) -> bool {
        self.decision.is_terminal()
    }
}

/// Counts per decision across live sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDistribution {
    #[serde(rename = "CONTINUE")]
    pub continue_count: usize,
    #[serde(rename = "HYPOTHESIS_A")]
    pub hypothesis_a: usize,
    #[serde(rename = "HYPOTHESIS_B")]
    pub hypothesis_b: usize,
}

impl DecisionDistribution {
    pub fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Continue => self.continue_count += 1,
            Decision::HypothesisA => self.hypothesis_a += 1,
            Decision::HypothesisB => self.hypothesis_b += 1,
        }
    }

    pub fn decided(&self) -> usize {
        self.hypothesis_a + self.hypothesis_b
    }
}

/// Aggregate accumulator statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorStats {
    pub active_sessions: usize,
    /// Mean turns-to-decision over decided sessions; None when none decided
    pub avg_turns_to_decision: Option<f64>,
    pub decision_distribution: DecisionDistribution,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExclusionKind, Language, MarkerHit};

    fn hit(vertical: Vertical, text: &str, suppressed: bool) -> MarkerHit {
        MarkerHit {
            vertical,
            text: text.to_string(),
            weight: 0.5,
            distress: false,
            suppressed_by: suppressed.then_some(ExclusionKind::Romantic),
        }
    }

    #[test]
    fn test_evidence_collects_markers_from_state() {
        let mut state = DimensionalState::empty(Language::En);
        state.markers = vec![
            hit(Vertical::Existential, "meaning of life", false),
            hit(Vertical::Functional, "deadline", false),
            hit(Vertical::Functional, "deadline", false),
            hit(Vertical::Relational, "my sister", false),
        ];
        let evidence = TurnEvidence::new("msg", state);
        assert_eq!(evidence.existential_markers.len(), 1);
        assert_eq!(evidence.functional_markers.len(), 1);
        assert!(evidence.functional_markers.contains("deadline"));
    }

    #[test]
    fn test_posterior_of_zero_log_ratio_is_half() {
        let state = SessionEvidenceState::new("s", 0.0);
        assert!((state.posterior() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_decision_serializes_screaming() {
        assert_eq!(serde_json::to_string(&Decision::HypothesisA).unwrap(), "\"HYPOTHESIS_A\"");
        assert_eq!(Decision::Continue.to_string(), "CONTINUE");
    }

    #[test]
    fn test_distribution_record() {
        let mut dist = DecisionDistribution::default();
        dist.record(Decision::Continue);
        dist.record(Decision::HypothesisA);
        dist.record(Decision::HypothesisB);
        dist.record(Decision::HypothesisB);
        assert_eq!(dist.continue_count, 1);
        assert_eq!(dist.decided(), 3);
    }
}
