//! Output structures for terminal display

use colored::Colorize;
use serde::Serialize;

use crate::types::{Decision, DimensionalState, SessionEvidenceState};

/// One processed turn: detection plus, in session mode, the SPRT state
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutput {
    pub state: DimensionalState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<SessionEvidenceState>,
}

impl TurnOutput {
    pub fn new(state: DimensionalState, evidence: Option<SessionEvidenceState>) -> Self {
        Self { state, evidence }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let s = &self.state;
        let mut line = format!(
            "{} primary={} ex={:.3} so={:.3}",
            flag_glyph(s),
            s.primary_vertical.to_string().bold(),
            s.vertical.existential,
            s.vertical.somatic,
        );
        if s.emergency_detected {
            line.push_str(&format!(" | {}", "EMERGENCY".red().bold()));
        }
        if s.v_mode_triggered {
            line.push_str(&format!(" | {}", "V-MODE".magenta().bold()));
        }
        if let Some(ev) = &self.evidence {
            let decision = match ev.decision {
                Decision::Continue => ev.decision.to_string().yellow(),
                Decision::HypothesisA => ev.decision.to_string().magenta(),
                Decision::HypothesisB => ev.decision.to_string().green(),
            };
            line.push_str(&format!(
                " | llr={:+.3} turns={} decision={}",
                ev.log_ratio, ev.turns, decision
            ));
        }
        line
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let s = &self.state;
        let mut line = format!(
            "primary={} | ex={:.3} | so={:.3} | v_mode={} | emergency={}",
            s.primary_vertical,
            s.vertical.existential,
            s.vertical.somatic,
            s.v_mode_triggered,
            s.emergency_detected,
        );
        if let Some(ev) = &self.evidence {
            line.push_str(&format!(
                " | llr={:.3} | turns={} | decision={} | reason={}",
                ev.log_ratio,
                ev.turns,
                ev.decision,
                ev.reason.code()
            ));
        }
        line
    }

    /// Multi-line breakdown of every dimension and marker
    pub fn to_verbose_string(&self, color: bool) -> String {
        let s = &self.state;
        let mut out = String::new();
        out.push_str(&format!("language: {}\n", s.language));
        for (vertical, score) in s.vertical.iter() {
            let bar = "#".repeat((score * 20.0).round() as usize);
            let name = format!("{:<13}", vertical.name());
            let name = if color && vertical == s.primary_vertical {
                name.bold().to_string()
            } else {
                name
            };
            out.push_str(&format!("  {} {:.4} {}\n", name, score, bar));
        }
        let tags: Vec<String> = s.primary_horizontal.iter().map(|t| t.to_string()).collect();
        out.push_str(&format!("horizontal: [{}]\n", tags.join(", ")));
        match s.integration {
            Some(i) => out.push_str(&format!("integration: {:.3}\n", i)),
            None => out.push_str("integration: -\n"),
        }
        for m in &s.markers {
            let status = match m.suppressed_by {
                Some(kind) => format!(" (suppressed: {})", kind),
                None => String::new(),
            };
            let distress = if m.distress { " [distress]" } else { "" };
            let line = format!(
                "  + {} \"{}\" w={:.2}{}{}",
                m.vertical, m.text, m.weight, distress, status
            );
            if color && m.is_suppressed() {
                out.push_str(&format!("{}\n", line.dimmed()));
            } else {
                out.push_str(&format!("{}\n", line));
            }
        }
        out.push_str(&format!(
            "v_mode: {} | emergency: {}\n",
            s.v_mode_triggered, s.emergency_detected
        ));
        if let Some(ev) = &self.evidence {
            out.push_str(&format!(
                "session {}: llr={:+.4} posterior={:.3} turns={} decision={} ({})\n",
                ev.session_id,
                ev.log_ratio,
                ev.posterior(),
                ev.turns,
                ev.decision,
                ev.reason
            ));
        }
        out
    }
}

fn flag_glyph(state: &DimensionalState) -> colored::ColoredString {
    if state.emergency_detected {
        "!!".red().bold()
    } else if state.v_mode_triggered {
        "◆".magenta()
    } else {
        "·".dimmed()
    }
}
