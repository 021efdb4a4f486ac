//! Per-turn dimensional state produced by the detector

use serde::{Deserialize, Serialize};

use crate::types::{HorizontalTag, Language, Vertical, VerticalScores};

/// Why a distress phrase is not literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExclusionKind {
    /// "my heart races when I see you"
    Romantic,
    /// "I can't breathe from laughing", "you gave me a heart attack"
    Colloquial,
}

impl std::fmt::Display for ExclusionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExclusionKind::Romantic => write!(f, "ROMANTIC"),
            ExclusionKind::Colloquial => write!(f, "COLLOQUIAL"),
        }
    }
}

/// One lexicon match that contributed (or would have contributed) to a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerHit {
    pub vertical: Vertical,
    /// Matched text after normalization
    pub text: String,
    pub weight: f64,
    /// Somatic-distress marker (eligible for emergency)
    pub distress: bool,
    /// Set when an exclusion zeroed this hit
    pub suppressed_by: Option<ExclusionKind>,
}

impl MarkerHit {
    pub fn is_suppressed(&self) -> bool {
        self.suppressed_by.is_some()
    }
}

/// Result of classifying one turn. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionalState {
    pub vertical: VerticalScores,
    pub primary_vertical: Vertical,
    pub primary_horizontal: Vec<HorizontalTag>,
    pub v_mode_triggered: bool,
    pub emergency_detected: bool,
    /// 1.0 = one dimension carries all signal, 0.0 = evenly spread.
    /// None when no dimension scored.
    pub integration: Option<f64>,
    /// Lexicon actually used (after fallback)
    pub language: Language,
    pub markers: Vec<MarkerHit>,
}

impl DimensionalState {
    /// State for text with no signal at all
    pub fn empty(language: Language) -> Self {
        let vertical = VerticalScores::zero();
        Self {
            primary_vertical: vertical.primary(),
            vertical,
            primary_horizontal: Vec::new(),
            v_mode_triggered: false,
            emergency_detected: false,
            integration: None,
            language,
            markers: Vec::new(),
        }
    }

    /// Matched texts for one dimension, excluding suppressed hits
    pub fn active_markers(&self, vertical: Vertical) -> impl Iterator<Item = &str> + '_ {
        self.markers
            .iter()
            .filter(move |m| m.vertical == vertical && !m.is_suppressed())
            .map(|m| m.text.as_str())
    }

    /// Hits zeroed by an exclusion
    pub fn suppressed_markers(&self) -> impl Iterator<Item = &MarkerHit> + '_ {
        self.markers.iter().filter(|m| m.is_suppressed())
    }

    /// Gap between the top and second-highest dimension
    pub fn top_gap(&self) -> f64 {
        let sorted = self.vertical.sorted_desc();
        sorted[0] - sorted[1]
    }
}

/// Coherence of the score vector: top share rescaled from [1/5, 1] to [0, 1]
pub fn integration_of(scores: &VerticalScores) -> Option<f64> {
    let total = scores.total();
    if total <= 0.0 {
        return None;
    }
    let top = scores.sorted_desc()[0];
    let share = top / total;
    let floor = 1.0 / Vertical::ALL.len() as f64;
    Some(((share - floor) / (1.0 - floor)).clamp(0.0, 1.0))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_single_dimension_is_one() {
        let mut scores = VerticalScores::zero();
        scores.set(Vertical::Existential, 0.4);
        assert_eq!(integration_of(&scores), Some(1.0));
    }

    #[test]
    fn test_integration_even_spread_is_zero() {
        let scores = VerticalScores {
            somatic: 0.3,
            functional: 0.3,
            relational: 0.3,
            existential: 0.3,
            transcendent: 0.3,
        };
        let integration = integration_of(&scores).unwrap();
        assert!(integration.abs() < 1e-12);
    }

    #[test]
    fn test_integration_absent_without_signal() {
        assert_eq!(integration_of(&VerticalScores::zero()), None);
    }

    #[test]
    fn test_active_markers_skip_suppressed() {
        let mut state = DimensionalState::empty(Language::En);
        state.markers = vec![
            MarkerHit {
                vertical: Vertical::Somatic,
                text: "heart races".to_string(),
                weight: 0.7,
                distress: true,
                suppressed_by: Some(ExclusionKind::Romantic),
            },
            MarkerHit {
                vertical: Vertical::Somatic,
                text: "tired".to_string(),
                weight: 0.4,
                distress: false,
                suppressed_by: None,
            },
        ];
        let active: Vec<&str> = state.active_markers(Vertical::Somatic).collect();
        assert_eq!(active, vec!["tired"]);
        assert_eq!(state.suppressed_markers().count(), 1);
    }

    #[test]
    fn test_exclusion_kind_serializes_on_hit() {
        let hit = MarkerHit {
            vertical: Vertical::Somatic,
            text: "heart attack".to_string(),
            weight: 0.9,
            distress: true,
            suppressed_by: Some(ExclusionKind::Colloquial),
        };
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["suppressed_by"], "COLLOQUIAL");
        assert!(hit.is_suppressed());
    }
}
