//! Vertical dimensions, horizontal tags and supported languages

use serde::{Deserialize, Serialize};

/// The five vertical dimensions of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vertical {
    /// Body, sensation, physiological state
    Somatic,
    /// Tasks, logistics, practical problems
    Functional,
    /// Other people, belonging, conflict
    Relational,
    /// Meaning, mortality, identity
    Existential,
    /// Spiritual, sacred, beyond-self
    Transcendent,
}

impl Vertical {
    /// All dimensions in declaration order
    pub const ALL: [Vertical; 5] = [
        Vertical::Somatic,
        Vertical::Functional,
        Vertical::Relational,
        Vertical::Existential,
        Vertical::Transcendent,
    ];

    /// Tie-break order for primary selection (first wins)
    pub const PRECEDENCE: [Vertical; 5] = [
        Vertical::Somatic,
        Vertical::Existential,
        Vertical::Relational,
        Vertical::Functional,
        Vertical::Transcendent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Vertical::Somatic => "SOMATIC",
            Vertical::Functional => "FUNCTIONAL",
            Vertical::Relational => "RELATIONAL",
            Vertical::Existential => "EXISTENTIAL",
            Vertical::Transcendent => "TRANSCENDENT",
        }
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Secondary context tags, orthogonal to the verticals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalTag {
    Urgency,
    Past,
    Future,
    Absolute,
    Uncertainty,
}

impl HorizontalTag {
    pub fn name(&self) -> &'static str {
        match self {
            HorizontalTag::Urgency => "URGENCY",
            HorizontalTag::Past => "PAST",
            HorizontalTag::Future => "FUTURE",
            HorizontalTag::Absolute => "ABSOLUTE",
            HorizontalTag::Uncertainty => "UNCERTAINTY",
        }
    }
}

impl std::fmt::Display for HorizontalTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Languages with a lexicon table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Nl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Nl];

    /// Parse a language code such as `en`, `DE`, `nl-BE` or `en_US`
    pub fn parse(code: &str) -> Option<Language> {
        let primary = code
            .trim()
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    /// Parse, falling back to English for unknown codes
    pub fn resolve(code: &str) -> Language {
        Self::parse(code).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Nl => "nl",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-dimension scores in [0,1], independent of each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VerticalScores {
    pub somatic: f64,
    pub functional: f64,
    pub relational: f64,
    pub existential: f64,
    pub transcendent: f64,
}

impl VerticalScores {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, vertical: Vertical) -> f64 {
        match vertical {
            Vertical::Somatic => self.somatic,
            Vertical::Functional => self.functional,
            Vertical::Relational => self.relational,
            Vertical::Existential => self.existential,
            Vertical::Transcendent => self.transcendent,
        }
    }

    pub fn set(&mut self, vertical: Vertical, score: f64) {
        let slot = match vertical {
            Vertical::Somatic => &mut self.somatic,
            Vertical::Functional => &mut self.functional,
            Vertical::Relational => &mut self.relational,
            Vertical::Existential => &mut self.existential,
            Vertical::Transcendent => &mut self.transcendent,
        };
        *slot = score;
    }

    /// (dimension, score) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Vertical, f64)> + '_ {
        Vertical::ALL.iter().map(move |v| (*v, self.get(*v)))
    }

    /// Highest score, ties resolved by `Vertical::PRECEDENCE`
    pub fn primary(&self) -> Vertical {
        let mut best = Vertical::PRECEDENCE[0];
        for v in Vertical::PRECEDENCE.iter().skip(1) {
            if self.get(*v) > self.get(best) {
                best = *v;
            }
        }
        best
    }

    /// Scores sorted descending
    pub fn sorted_desc(&self) -> [f64; 5] {
        let mut scores = [
            self.somatic,
            self.functional,
            self.relational,
            self.existential,
            self.transcendent,
        ];
        scores.sort_by(|a, b| b.total_cmp(a));
        scores
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, s)| s).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================
