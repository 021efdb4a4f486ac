//! Evidence accumulator: Wald SPRT with decay, one state per session
//!
//! H1 = existential conversation, H0 = functional.
//!
//! Per turn:
//! - p1 = max(EXISTENTIAL + increment·|existential markers|, ε)
//! - p0 = max(FUNCTIONAL + increment·|functional markers|, ε)
//! - log_ratio = decay·log_ratio + ln(p1/p0)
//! - ≥ upper → HYPOTHESIS_A, ≤ lower → HYPOTHESIS_B,
//!   turns ≥ max_turns → sign of log_ratio, else CONTINUE
//!
//! Terminal decisions are sticky: later turns are counted as ignored and
//! never folded in.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, info};

use crate::config::AccumulatorConfig;
use crate::error::ConfigError;
use crate::types::{
    AccumulatorStats, Decision, DecisionDistribution, DecisionReason, SessionEvidenceState,
    TurnEvidence,
};

// =============================================================================
// PURE TRANSITION
// =============================================================================

/// The sequential test itself, free of any session bookkeeping
#[derive(Debug, Clone)]
pub struct SequentialTest {
    config: AccumulatorConfig,
}

impl SequentialTest {
    pub fn new(config: AccumulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    /// Fresh state at the prior
    pub fn initial_state(&self, session_id: &str) -> SessionEvidenceState {
        SessionEvidenceState::new(session_id, self.config.prior_log_ratio())
    }

    /// ln(p1/p0) for one turn
    pub fn turn_log_likelihood(&self, evidence: &TurnEvidence) -> f64 {
        let c = &self.config;
        let p1 = (evidence.state.vertical.existential
            + c.marker_increment * evidence.existential_markers.len() as f64)
            .max(c.epsilon);
        let p0 = (evidence.state.vertical.functional
            + c.marker_increment * evidence.functional_markers.len() as f64)
            .max(c.epsilon);
        (p1 / p0).ln()
    }

    /// (state, evidence) → next state
    pub fn step(&self, state: &SessionEvidenceState, evidence: &TurnEvidence) -> SessionEvidenceState {
        let mut next = state.clone();

        if state.is_decided() {
            next.ignored_turns += 1;
            next.reason = DecisionReason::R105_DECISION_STICKY;
            return next;
        }

        let contribution = self.turn_log_likelihood(evidence);
        next.log_ratio = self.config.decay * state.log_ratio + contribution;
        next.turn_evidence_log.push(contribution);
        next.turns += 1;

        let (decision, reason) = self.classify(next.log_ratio, next.turns);
        next.decision = decision;
        next.reason = reason;
        if decision.is_terminal() {
            next.decided_at_turn = Some(next.turns);
        }
        next
    }

    fn classify(&self, log_ratio: f64, turns: usize) -> (Decision, DecisionReason) {
        let c = &self.config;
        if log_ratio >= c.upper_threshold {
            (Decision::HypothesisA, DecisionReason::R101_UPPER_THRESHOLD)
        } else if log_ratio <= c.lower_threshold {
            (Decision::HypothesisB, DecisionReason::R102_LOWER_THRESHOLD)
        } else if turns >= c.max_turns {
            let decision = if log_ratio >= 0.0 {
                Decision::HypothesisA
            } else {
                Decision::HypothesisB
            };
            (decision, DecisionReason::R103_MAX_TURNS_FORCED)
        } else {
            (Decision::Continue, DecisionReason::R104_INCONCLUSIVE)
        }
    }
}

// =============================================================================
// SESSION REGISTRY
// =============================================================================

#[derive(Debug)]
struct SessionSlot {
    state: Mutex<SessionEvidenceState>,
    /// Logical time of the last lookup or update, for eviction
    last_touch: AtomicU64,
    /// Set under the state lock once the slot leaves the registry
    retired: AtomicBool,
}

impl SessionSlot {
    /// Waits for any in-flight step, then marks the slot dead
    fn retire(&self) {
        let _state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        self.retired.store(true, Ordering::Relaxed);
    }
}

/// Session-keyed SPRT registry. Sessions run in parallel; updates to one
/// session serialize on its own lock.
#[derive(Debug)]
pub struct EvidenceAccumulator {
    test: SequentialTest,
    sessions: RwLock<HashMap<String, Arc<SessionSlot>>>,
    clock: AtomicU64,
}

impl EvidenceAccumulator {
    pub fn new(config: AccumulatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            test: SequentialTest::new(config)?,
            sessions: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
        })
    }

    /// Fold one turn into a session (created on first use) and return the
    /// updated state
    pub fn accumulate(&self, session_id: &str, evidence: &TurnEvidence) -> SessionEvidenceState {
        // A slot evicted or reset between lookup and lock is retried on a
        // fresh one, so a step never lands outside the registry
        let (was_decided, next) = loop {
            let slot = self.slot(session_id);
            if let Some(stepped) = self.apply(&slot, evidence) {
                break stepped;
            }
        };

        debug!(
            session = session_id,
            turn = next.turns,
            log_ratio = next.log_ratio,
            decision = %next.decision,
            "sprt step"
        );
        if !was_decided && next.is_decided() {
            info!(
                session = session_id,
                decision = %next.decision,
                reason = next.reason.code(),
                turns = next.turns,
                "session decided"
            );
        }
        next
    }

    /// Snapshot of one session, None if unknown
    pub fn get_state(&self, session_id: &str) -> Option<SessionEvidenceState> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.get(session_id).map(|slot| {
            slot.state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }

    /// Forget a session. Returns whether it existed; resetting twice is harmless.
    pub fn reset_session(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        match sessions.remove(session_id) {
            Some(slot) => {
                slot.retire();
                true
            }
            None => false,
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn get_stats(&self) -> AccumulatorStats {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        let mut distribution = DecisionDistribution::default();
        let mut decided_turns = 0usize;

        for slot in sessions.values() {
            let state = slot.state.lock().unwrap_or_else(PoisonError::into_inner);
            distribution.record(state.decision);
            if let Some(turn) = state.decided_at_turn {
                decided_turns += turn;
            }
        }

        let decided = distribution.decided();
        AccumulatorStats {
            active_sessions: sessions.len(),
            avg_turns_to_decision: if decided > 0 {
                Some(decided_turns as f64 / decided as f64)
            } else {
                None
            },
            decision_distribution: distribution,
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Step one slot under its lock. None if the slot was retired first.
    fn apply(&self, slot: &SessionSlot, evidence: &TurnEvidence) -> Option<(bool, SessionEvidenceState)> {
        let mut state = slot.state.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.retired.load(Ordering::Relaxed) {
            return None;
        }
        let was_decided = state.is_decided();
        let next = self.test.step(&state, evidence);
        *state = next.clone();
        slot.last_touch.store(self.tick(), Ordering::Relaxed);
        Some((was_decided, next))
    }

    /// Registry slot for a session, created on first use. Lookups count as
    /// touches so a session about to be stepped is not the eviction pick.
    fn slot(&self, session_id: &str) -> Arc<SessionSlot> {
        {
            let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = sessions.get(session_id) {
                slot.last_touch.store(self.tick(), Ordering::Relaxed);
                return Arc::clone(slot);
            }
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = sessions.get(session_id) {
            slot.last_touch.store(self.tick(), Ordering::Relaxed);
            return Arc::clone(slot);
        }

        if let Some(cap) = self.test.config().max_sessions {
            while sessions.len() >= cap {
                let oldest = sessions
                    .iter()
                    .min_by_key(|(_, slot)| slot.last_touch.load(Ordering::Relaxed))
                    .map(|(id, _)| id.clone());
                match oldest {
                    Some(id) => {
                        if let Some(evicted) = sessions.remove(&id) {
                            evicted.retire();
                        }
                        info!(session = %id, cap, "evicted least recently used session");
                    }
                    None => break,
                }
            }
        }

        let slot = Arc::new(SessionSlot {
            state: Mutex::new(self.test.initial_state(session_id)),
            last_touch: AtomicU64::new(self.tick()),
            retired: AtomicBool::new(false),
        });
        sessions.insert(session_id.to_string(), Arc::clone(&slot));
        slot
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DimensionalState, Language};

    fn evidence(existential: f64, functional: f64, ex_markers: &[&str], fn_markers: &[&str]) -> TurnEvidence {
        let mut state = DimensionalState::empty(Language::En);
        state.vertical.existential = existential;
        state.vertical.functional = functional;
        TurnEvidence::with_markers(
            "",
            state,
            ex_markers.iter().map(|s| s.to_string()),
            fn_markers.iter().map(|s| s.to_string()),
        )
    }

    fn accumulator() -> EvidenceAccumulator {
        EvidenceAccumulator::new(AccumulatorConfig::default()).unwrap()
    }

    #[test]
    fn test_turn_likelihood_uses_marker_increment() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let ev = evidence(0.5, 0.1, &["meaning of life"], &[]);
        let expected = (0.7f64 / 0.1).ln();
        assert!((test.turn_log_likelihood(&ev) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_evidence_is_neutral() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let ev = evidence(0.0, 0.0, &[], &[]);
        assert_eq!(test.turn_log_likelihood(&ev), 0.0);
    }

    #[test]
    fn test_decay_applied_before_new_evidence() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let start = test.initial_state("s");
        let ev = evidence(0.4, 0.4, &[], &[]);
        let next = test.step(&start, &ev);
        assert!((next.log_ratio - 0.8 * start.log_ratio).abs() < 1e-12);
        assert_eq!(next.turns, 1);
        assert_eq!(next.turn_evidence_log, vec![0.0]);
        assert_eq!(next.decision, Decision::Continue);
        assert_eq!(next.reason, DecisionReason::R104_INCONCLUSIVE);
    }

    #[test]
    fn test_strong_existential_turn_crosses_upper() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let ev = evidence(0.9, 0.0, &["a", "b"], &[]);
        let next = test.step(&test.initial_state("s"), &ev);
        // 0.8·ln(3/7) + ln(1.3/0.01) ≈ 4.19
        assert_eq!(next.decision, Decision::HypothesisA);
        assert_eq!(next.reason, DecisionReason::R101_UPPER_THRESHOLD);
        assert_eq!(next.decided_at_turn, Some(1));
    }

    #[test]
    fn test_strong_functional_turn_crosses_lower() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let ev = evidence(0.0, 0.8, &[], &["deadline", "report"]);
        let next = test.step(&test.initial_state("s"), &ev);
        assert_eq!(next.decision, Decision::HypothesisB);
        assert_eq!(next.reason, DecisionReason::R102_LOWER_THRESHOLD);
    }

    #[test]
    fn test_max_turns_forces_decision_by_sign() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let mut state = test.initial_state("s");
        let ev = evidence(0.3, 0.25, &[], &[]);
        for _ in 0..4 {
            state = test.step(&state, &ev);
            assert_eq!(state.decision, Decision::Continue);
        }
        state = test.step(&state, &ev);
        assert_eq!(state.turns, 5);
        assert_eq!(state.reason, DecisionReason::R103_MAX_TURNS_FORCED);
        let expected = if state.log_ratio >= 0.0 {
            Decision::HypothesisA
        } else {
            Decision::HypothesisB
        };
        assert_eq!(state.decision, expected);
    }

    #[test]
    fn test_decision_is_sticky() {
        let acc = accumulator();
        let decided = acc.accumulate("s", &evidence(0.9, 0.0, &["a", "b"], &[]));
        assert_eq!(decided.decision, Decision::HypothesisA);

        let after = acc.accumulate("s", &evidence(0.0, 0.9, &[], &["x", "y", "z"]));
        assert_eq!(after.decision, Decision::HypothesisA);
        assert_eq!(after.log_ratio, decided.log_ratio);
        assert_eq!(after.turns, 1);
        assert_eq!(after.ignored_turns, 1);
        assert_eq!(after.reason, DecisionReason::R105_DECISION_STICKY);
        assert_eq!(after.turn_evidence_log.len(), 1);
    }

    #[test]
    fn test_continue_iff_between_thresholds() {
        let test = SequentialTest::new(AccumulatorConfig::default()).unwrap();
        let c = test.config().clone();
        let mut state = test.initial_state("s");
        for ev in [
            evidence(0.2, 0.1, &[], &[]),
            evidence(0.1, 0.3, &[], &[]),
            evidence(0.4, 0.2, &["x"], &[]),
        ] {
            state = test.step(&state, &ev);
            let inside = state.log_ratio > c.lower_threshold
                && state.log_ratio < c.upper_threshold
                && state.turns < c.max_turns;
            assert_eq!(state.decision == Decision::Continue, inside);
        }
    }

    #[test]
    fn test_unknown_session_created_lazily() {
        let acc = accumulator();
        assert!(acc.get_state("new").is_none());
        acc.accumulate("new", &evidence(0.1, 0.1, &[], &[]));
        assert_eq!(acc.get_state("new").map(|s| s.turns), Some(1));
        assert_eq!(acc.active_sessions(), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let acc = accumulator();
        acc.accumulate("s", &evidence(0.1, 0.1, &[], &[]));
        assert!(acc.reset_session("s"));
        assert!(!acc.reset_session("s"));
        assert!(acc.get_state("s").is_none());
    }

    #[test]
    fn test_stats_without_decisions() {
        let acc = accumulator();
        acc.accumulate("a", &evidence(0.1, 0.1, &[], &[]));
        let stats = acc.get_stats();
        assert_eq!(stats.active_sessions, 1);
        assert_eq!(stats.avg_turns_to_decision, None);
        assert_eq!(stats.decision_distribution.continue_count, 1);
    }

    #[test]
    fn test_stats_average_turns_to_decision() {
        let acc = accumulator();
        acc.accumulate("a", &evidence(0.9, 0.0, &["a", "b"], &[]));
        acc.accumulate("b", &evidence(0.1, 0.1, &[], &[]));
        acc.accumulate("b", &evidence(0.0, 0.8, &[], &["x", "y"]));
        let stats = acc.get_stats();
        assert_eq!(stats.decision_distribution.hypothesis_a, 1);
        assert_eq!(stats.decision_distribution.hypothesis_b, 1);
        assert_eq!(stats.avg_turns_to_decision, Some(1.5));
    }

    #[test]
    fn test_session_cap_evicts_least_recent() {
        let config = AccumulatorConfig {
            max_sessions: Some(2),
            ..Default::default()
        };
        let acc = EvidenceAccumulator::new(config).unwrap();
        let ev = evidence(0.1, 0.1, &[], &[]);
        acc.accumulate("a", &ev);
        acc.accumulate("b", &ev);
        acc.accumulate("a", &ev);
        acc.accumulate("c", &ev);
        assert_eq!(acc.active_sessions(), 2);
        assert!(acc.get_state("b").is_none());
        assert!(acc.get_state("a").is_some());
        assert!(acc.get_state("c").is_some());
    }

    fn capped(cap: usize) -> EvidenceAccumulator {
        EvidenceAccumulator::new(AccumulatorConfig {
            max_sessions: Some(cap),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_lookup_protects_session_from_eviction() {
        let acc = capped(2);
        let ev = evidence(0.1, 0.1, &[], &[]);
        acc.accumulate("a", &ev);
        acc.accumulate("b", &ev);

        // "a" is looked up for a step that has not run yet
        let held = acc.slot("a");
        acc.accumulate("c", &ev);
        assert!(!held.retired.load(Ordering::Relaxed));
        assert!(acc.get_state("b").is_none());

        let (_, next) = acc.apply(&held, &ev).unwrap();
        assert_eq!(next.turns, 2);
        assert_eq!(acc.get_state("a").unwrap().turns, 2);
    }

    #[test]
    fn test_step_on_evicted_slot_is_refused() {
        let acc = capped(1);
        let ev = evidence(0.1, 0.1, &[], &[]);
        acc.accumulate("a", &ev);

        let held = acc.slot("a");
        acc.accumulate("b", &ev);
        assert!(held.retired.load(Ordering::Relaxed));
        assert!(acc.apply(&held, &ev).is_none());
        assert_eq!(held.state.lock().unwrap().turns, 1);

        // The public path restarts the session instead of losing the turn
        let restarted = acc.accumulate("a", &ev);
        assert_eq!(restarted.turns, 1);
        assert_eq!(acc.get_state("a").unwrap(), restarted);
    }

    #[test]
    fn test_reset_retires_slot() {
        let acc = accumulator();
        let ev = evidence(0.1, 0.1, &[], &[]);
        acc.accumulate("s", &ev);
        let held = acc.slot("s");
        assert!(acc.reset_session("s"));
        assert!(acc.apply(&held, &ev).is_none());
        assert!(acc.get_state("s").is_none());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = AccumulatorConfig { decay: 0.0, ..Default::default() };
        assert!(matches!(
            EvidenceAccumulator::new(config),
            Err(ConfigError::InvalidDecay(_))
        ));
    }
}
