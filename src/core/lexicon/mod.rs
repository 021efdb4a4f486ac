//! Vertical lexicon: per-language weighted marker tables
//!
//! Raw tables are plain data (see `en`, `de`, `nl`). They are compiled once
//! into `LexiconTable`s keyed by language; adding a language means adding a
//! table module and registering it below.

mod de;
mod en;
mod nl;

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::types::{ExclusionKind, HorizontalTag, Language, Vertical};

// =============================================================================
// RAW DATA
// =============================================================================

/// One weighted pattern. Patterns are matched against normalized (lowercase)
/// text and wrapped in word boundaries at compile time.
#[derive(Debug, Clone, Copy)]
pub struct RawMarker {
    pub pattern: &'static str,
    pub weight: f64,
    /// Somatic-distress marker (emergency-eligible, subject to exclusions)
    pub distress: bool,
}

/// Ordinary marker
pub const fn m(pattern: &'static str, weight: f64) -> RawMarker {
    RawMarker { pattern, weight, distress: false }
}

/// Somatic-distress marker
pub const fn d(pattern: &'static str, weight: f64) -> RawMarker {
    RawMarker { pattern, weight, distress: true }
}

#[derive(Debug, Clone, Copy)]
pub struct RawExclusion {
    pub pattern: &'static str,
    pub kind: ExclusionKind,
}

pub const fn romantic(pattern: &'static str) -> RawExclusion {
    RawExclusion { pattern, kind: ExclusionKind::Romantic }
}

pub const fn colloquial(pattern: &'static str) -> RawExclusion {
    RawExclusion { pattern, kind: ExclusionKind::Colloquial }
}

/// Everything one language contributes
#[derive(Debug)]
pub struct RawTable {
    pub somatic: &'static [RawMarker],
    pub functional: &'static [RawMarker],
    pub relational: &'static [RawMarker],
    pub existential: &'static [RawMarker],
    pub transcendent: &'static [RawMarker],
    pub exclusions: &'static [RawExclusion],
    pub horizontal: &'static [(HorizontalTag, &'static str)],
    /// Idiomatic existential forms used only by the nonconformity boost
    pub boost: &'static [RawMarker],
}

impl RawTable {
    fn markers(&self, vertical: Vertical) -> &'static [RawMarker] {
        match vertical {
            Vertical::Somatic => self.somatic,
            Vertical::Functional => self.functional,
            Vertical::Relational => self.relational,
            Vertical::Existential => self.existential,
            Vertical::Transcendent => self.transcendent,
        }
    }
}

// =============================================================================
// COMPILED TABLES
// =============================================================================

#[derive(Debug)]
pub struct Marker {
    pub regex: Regex,
    pub weight: f64,
    pub distress: bool,
}

#[derive(Debug)]
pub struct Exclusion {
    pub regex: Regex,
    pub kind: ExclusionKind,
}

/// Immutable, compiled lexicon for one language
#[derive(Debug)]
pub struct LexiconTable {
    pub language: Language,
    /// Indexed in `Vertical::ALL` order
    markers: [Vec<Marker>; 5],
    pub exclusions: Vec<Exclusion>,
    pub horizontal: Vec<(HorizontalTag, Regex)>,
    pub boost: Vec<Marker>,
}

impl LexiconTable {
    fn compile(language: Language, raw: &RawTable) -> Self {
        let markers = Vertical::ALL.map(|v| compile_markers(raw.markers(v)));
        Self {
            language,
            markers,
            exclusions: raw
                .exclusions
                .iter()
                .map(|e| Exclusion { regex: bounded(e.pattern), kind: e.kind })
                .collect(),
            horizontal: raw
                .horizontal
                .iter()
                .map(|(tag, pattern)| (*tag, bounded(pattern)))
                .collect(),
            boost: compile_markers(raw.boost),
        }
    }

    pub fn markers(&self, vertical: Vertical) -> &[Marker] {
        &self.markers[vertical as usize]
    }
}

fn compile_markers(raw: &[RawMarker]) -> Vec<Marker> {
    raw.iter()
        .map(|r| Marker {
            regex: bounded(r.pattern),
            weight: r.weight,
            distress: r.distress,
        })
        .collect()
}

/// Wrap a table pattern in word boundaries. Table patterns are static data,
/// so a bad one is a build defect caught by the lexicon tests.
fn bounded(pattern: &str) -> Regex {
    Regex::new(&format!(r"\b(?:{})\b", pattern)).unwrap()
}

lazy_static! {
    static ref EN: LexiconTable = LexiconTable::compile(Language::En, &en::TABLE);
    static ref DE: LexiconTable = LexiconTable::compile(Language::De, &de::TABLE);
    static ref NL: LexiconTable = LexiconTable::compile(Language::Nl, &nl::TABLE);

    static ref LEXICONS: HashMap<Language, &'static LexiconTable> = {
        let mut tables: HashMap<Language, &'static LexiconTable> = HashMap::new();
        tables.insert(Language::En, &*EN);
        tables.insert(Language::De, &*DE);
        tables.insert(Language::Nl, &*NL);
        tables
    };
}

/// Compiled table for a language, English when the language has none
pub fn lexicon(language: Language) -> &'static LexiconTable {
    LEXICONS.get(&language).copied().unwrap_or(&*EN)
}

// =============================================================================
// TESTS
// =============================================================================
