//! Reason codes for accumulator decisions and gate outcomes

use serde::{Deserialize, Serialize};

/// Why a session holds its current decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum DecisionReason {
    // =========================================================================
    // R100: Session lifecycle
    // =========================================================================
    /// Fresh session, no turns folded in yet
    R100_SESSION_CREATED,

    // =========================================================================
    // R101-R104: SPRT outcomes
    // =========================================================================
    /// log-ratio reached the upper threshold (H1, existential)
    R101_UPPER_THRESHOLD,
    /// log-ratio reached the lower threshold (H0, functional)
    R102_LOWER_THRESHOLD,
    /// max_turns reached, decided by sign of log-ratio
    R103_MAX_TURNS_FORCED,
    /// Evidence still between thresholds
    R104_INCONCLUSIVE,

    // =========================================================================
    // R105: Post-decision
    // =========================================================================
    /// Turn offered after a terminal decision; not folded in
    R105_DECISION_STICKY,
}

impl DecisionReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R100_SESSION_CREATED => "R100_SESSION_CREATED",
            Self::R101_UPPER_THRESHOLD => "R101_UPPER_THRESHOLD",
            Self::R102_LOWER_THRESHOLD => "R102_LOWER_THRESHOLD",
            Self::R103_MAX_TURNS_FORCED => "R103_MAX_TURNS_FORCED",
            Self::R104_INCONCLUSIVE => "R104_INCONCLUSIVE",
            Self::R105_DECISION_STICKY => "R105_DECISION_STICKY",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R100_SESSION_CREATED => "Session created",
            Self::R101_UPPER_THRESHOLD => "Existential evidence decisive",
            Self::R102_LOWER_THRESHOLD => "Functional evidence decisive",
            Self::R103_MAX_TURNS_FORCED => "Turn limit reached, decided by sign",
            Self::R104_INCONCLUSIVE => "Evidence inconclusive",
            Self::R105_DECISION_STICKY => "Already decided, turn ignored",
        }
    }
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Why the gate did or did not allow skipping the secondary check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum GateReason {
    /// Score above calibrated threshold, safe to skip
    R201_ABOVE_THRESHOLD,
    /// Score at or below calibrated threshold, escalate
    R202_AT_OR_BELOW_THRESHOLD,
    /// No calibration loaded, escalate everything
    R203_NO_CALIBRATION,
}

impl GateReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::R201_ABOVE_THRESHOLD => "R201_ABOVE_THRESHOLD",
            Self::R202_AT_OR_BELOW_THRESHOLD => "R202_AT_OR_BELOW_THRESHOLD",
            Self::R203_NO_CALIBRATION => "R203_NO_CALIBRATION",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::R201_ABOVE_THRESHOLD => "Confident negative, secondary check skipped",
            Self::R202_AT_OR_BELOW_THRESHOLD => "Possible positive, secondary check required",
            Self::R203_NO_CALIBRATION => "No calibrated threshold, secondary check required",
        }
    }
}

impl std::fmt::Display for GateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
