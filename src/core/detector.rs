//! Dimensional detector: turn text → per-dimension scores and triggers
//!
//! Stateless. Each dimension sums the weights of its non-overlapping marker
//! hits and saturates the sum with `1 - exp(-raw)`. A romantic or colloquial
//! exclusion zeroes a somatic-distress hit only when it covers the phrase or
//! sits right next to it in the same sentence; distress elsewhere in the
//! message still counts.

use tracing::debug;

use crate::core::lexicon::{lexicon, LexiconTable, Marker};
use crate::types::{
    integration_of, DimensionalState, ExclusionKind, HorizontalTag, Language, MarkerHit, Vertical, VerticalScores,
};
use crate::{EMERGENCY_THRESHOLD, EXCLUSION_WINDOW_WORDS, V_MODE_THRESHOLD};

/// A match before exclusion handling
#[derive(Debug, Clone)]
struct Hit {
    start: usize,
    end: usize,
    weight: f64,
    distress: bool,
}

impl Hit {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// Exclusion covers this hit or sits within the adjacency window
    fn explained_by(&self, span: &ExclusionSpan, text: &str) -> bool {
        if self.overlaps(span.start, span.end) {
            return true;
        }
        let gap = if span.end <= self.start {
            &text[span.end..self.start]
        } else {
            &text[self.end..span.start]
        };
        !gap.contains(is_sentence_break) && word_count(gap) <= EXCLUSION_WINDOW_WORDS
    }
}

/// Where an exclusion matched
#[derive(Debug, Clone, Copy)]
struct ExclusionSpan {
    start: usize,
    end: usize,
    kind: ExclusionKind,
}

/// Vertical dimension detector
#[derive(Debug, Default, Clone, Copy)]
pub struct Detector;

impl Detector {
    pub fn new() -> Self {
        Self
    }

    /// Detect with a language code; unknown codes fall back to English
    pub fn detect(&self, text: &str, language: &str) -> DimensionalState {
        let resolved = match Language::parse(language) {
            Some(lang) => lang,
            None => {
                debug!(code = language, "unsupported language, using en");
                Language::En
            }
        };
        self.detect_in(text, resolved)
    }

    /// Detect with an already resolved language
    pub fn detect_in(&self, text: &str, language: Language) -> DimensionalState {
        let text = normalize(text);
        if text.is_empty() {
            return DimensionalState::empty(language);
        }

        let table = lexicon(language);
        let exclusion_spans: Vec<ExclusionSpan> = table
            .exclusions
            .iter()
            .flat_map(|e| {
                e.regex.find_iter(&text).map(move |m| ExclusionSpan {
                    start: m.start(),
                    end: m.end(),
                    kind: e.kind,
                })
            })
            .collect();

        let mut scores = VerticalScores::zero();
        let mut markers = Vec::new();
        let mut distress_present = false;

        for vertical in Vertical::ALL {
            let mut raw = 0.0;
            for hit in select_hits(table.markers(vertical), &text) {
                let suppressed_by = if hit.distress {
                    exclusion_spans
                        .iter()
                        .find(|span| hit.explained_by(span, &text))
                        .map(|span| span.kind)
                } else {
                    None
                };
                if suppressed_by.is_none() {
                    raw += hit.weight;
                    distress_present |= hit.distress;
                }
                markers.push(MarkerHit {
                    vertical,
                    text: text[hit.start..hit.end].to_string(),
                    weight: hit.weight,
                    distress: hit.distress,
                    suppressed_by,
                });
            }
            scores.set(vertical, saturate(raw));
        }

        let emergency_detected = distress_present && scores.somatic >= EMERGENCY_THRESHOLD;
        let v_mode_triggered = scores.existential > V_MODE_THRESHOLD;

        DimensionalState {
            primary_vertical: scores.primary(),
            primary_horizontal: horizontal_tags(table, &text),
            v_mode_triggered,
            emergency_detected,
            integration: integration_of(&scores),
            vertical: scores,
            language,
            markers,
        }
    }
}

/// Case-fold, unify apostrophes, collapse whitespace
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{02BC}' | '`' | '\u{00B4}' => '\'',
            _ => c,
        })
        .collect::<String>()
        .to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Raw weight sum → [0,1)
pub fn saturate(raw: f64) -> f64 {
    1.0 - (-raw).exp()
}

/// Greedy non-overlapping selection: heavier first, then longer, then earlier.
/// Returned in text order.
fn select_hits(markers: &[Marker], text: &str) -> Vec<Hit> {
    let mut candidates: Vec<Hit> = markers
        .iter()
        .flat_map(|marker| {
            marker.regex.find_iter(text).map(move |m| Hit {
                start: m.start(),
                end: m.end(),
                weight: marker.weight,
                distress: marker.distress,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.weight
            .total_cmp(&a.weight)
            .then(b.len().cmp(&a.len()))
            .then(a.start.cmp(&b.start))
    });

    let mut accepted: Vec<Hit> = Vec::new();
    for hit in candidates {
        if accepted.iter().all(|a| !a.overlaps(hit.start, hit.end)) {
            accepted.push(hit);
        }
    }
    accepted.sort_by_key(|h| h.start);
    accepted
}

fn is_sentence_break(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';' | '\n')
}

/// Words with at least one letter or digit; bare punctuation does not count
fn word_count(gap: &str) -> usize {
    gap.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Tags in order of first occurrence, each at most once
fn horizontal_tags(table: &LexiconTable, text: &str) -> Vec<HorizontalTag> {
    let mut found: Vec<(usize, usize, HorizontalTag)> = Vec::new();
    for (order, (tag, regex)) in table.horizontal.iter().enumerate() {
        if found.iter().any(|(_, _, t)| t == tag) {
            continue;
        }
        if let Some(m) = regex.find(text) {
            found.push((m.start(), order, *tag));
        }
    }
    found.sort_by_key(|(start, order, _)| (*start, *order));
    found.into_iter().map(|(_, _, tag)| tag).collect()
}

// =============================================================================
// TESTS
// =============================================================================
