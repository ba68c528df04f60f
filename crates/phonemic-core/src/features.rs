//! Segment feature table and the feature-selection view state built on it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LanguageRecord;

/// Features offered for display, in display order.
pub const DISPLAY_FEATURES: [&str; 7] = [
    "high",
    "low",
    "front",
    "voice",
    "occlusive",
    "nasal",
    "consonantal",
];

/// Value of one feature for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FeatureState {
    #[serde(rename = "+")]
    Present,
    #[serde(rename = "-")]
    Absent,
    /// underspecified: either value
    #[serde(rename = "±")]
    Either,
    #[default]
    #[serde(rename = "0")]
    NotApplicable,
}

impl FeatureState {
    pub fn symbol(self) -> &'static str {
        match self {
            FeatureState::Present => "+",
            FeatureState::Absent => "-",
            FeatureState::Either => "±",
            FeatureState::NotApplicable => "0",
        }
    }
}

impl fmt::Display for FeatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

type FeatureRow = BTreeMap<String, FeatureState>;

/// Read-only snapshot of segment → feature → state.
///
/// Edits never mutate a table in place: `with_overrides` returns a new
/// snapshot with a higher `version`, so a consumer holding a reference
/// always sees one consistent table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentFeatureTable {
    version: u64,
    rows: BTreeMap<String, FeatureRow>,
}

impl SegmentFeatureTable {
    /// Hand-authored table covering the seed languages (phonemically
    /// contrastive features only).
    pub fn reference() -> Self {
        use FeatureState::{Absent as M, Either as E, NotApplicable as Z, Present as P};
        let rows: &[(&str, &[(&str, FeatureState)])] = &[
            // Rotokas
            ("a", &[("high", M), ("front", Z), ("occlusive", Z), ("consonantal", M)]),
            ("ə", &[("high", P), ("front", Z), ("occlusive", Z), ("consonantal", M)]),
            ("w", &[("high", Z), ("front", E), ("occlusive", Z), ("consonantal", P)]),
            ("j", &[("high", Z), ("front", P), ("occlusive", Z), ("consonantal", P)]),
            ("k", &[("high", Z), ("front", M), ("occlusive", P), ("consonantal", P)]),
            // Hawaiian
            ("ʔ", &[("high", Z), ("front", M), ("voice", M), ("occlusive", P), ("consonantal", P)]),
            ("h", &[("high", Z), ("front", M), ("voice", M), ("occlusive", M), ("consonantal", P)]),
            // English vowels
            ("i", &[("high", P), ("low", M), ("front", P), ("consonantal", M)]),
            ("e", &[("high", M), ("low", M), ("front", P), ("consonantal", M)]),
            ("æ", &[("high", M), ("low", P), ("front", P), ("consonantal", M)]),
            ("u", &[("high", P), ("low", M), ("front", M), ("consonantal", M)]),
            ("o", &[("high", M), ("low", M), ("front", M), ("consonantal", M)]),
            ("ɑ", &[("high", M), ("low", P), ("front", M), ("consonantal", M)]),
            // English consonants
            ("t", &[("high", Z), ("low", Z), ("front", P), ("occlusive", P), ("consonantal", P)]),
            ("θ", &[("high", Z), ("low", Z), ("front", P), ("occlusive", M), ("consonantal", P)]),
            ("l", &[("high", Z), ("low", Z), ("front", P), ("occlusive", M), ("consonantal", P)]),
            ("r", &[("high", Z), ("low", Z), ("front", P), ("occlusive", M), ("consonantal", P)]),
            ("n", &[("high", Z), ("low", Z), ("front", P), ("nasal", P), ("consonantal", P)]),
        ];

        let rows = rows
            .iter()
            .map(|(seg, feats)| {
                let row = feats
                    .iter()
                    .map(|(f, s)| (f.to_string(), *s))
                    .collect::<FeatureRow>();
                (seg.to_string(), row)
            })
            .collect();
        Self { version: 1, rows }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Unlisted segments and features read as `0`.
    pub fn get(&self, segment: &str, feature: &str) -> FeatureState {
        self.rows
            .get(segment)
            .and_then(|row| row.get(feature))
            .copied()
            .unwrap_or_default()
    }

    /// New snapshot with a batch of cells changed; a single version bump.
    /// An empty batch returns an unchanged copy.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, BTreeMap<String, FeatureState>>) -> Self {
        let mut next = self.clone();
        if overrides.is_empty() {
            return next;
        }
        for (segment, row) in overrides {
            let target = next.rows.entry(segment.clone()).or_default();
            for (feature, state) in row {
                target.insert(feature.clone(), *state);
            }
        }
        next.version += 1;
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    Plus,
    Minus,
}

impl Polarity {
    fn matches(self, state: FeatureState) -> bool {
        match self {
            Polarity::Plus => state == FeatureState::Present,
            Polarity::Minus => state == FeatureState::Absent,
        }
    }
}

/// Which feature (if any) is highlighted in an inventory view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSelection {
    feature: Option<String>,
    polarity: Polarity,
}

impl FeatureSelection {
    pub fn select(feature: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            feature: Some(feature.into()),
            polarity,
        }
    }

    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Same feature cycles plus → minus → cleared; another feature starts at plus.
    pub fn click(&mut self, feature: &str) {
        if self.feature.as_deref() == Some(feature) {
            match self.polarity {
                Polarity::Plus => self.polarity = Polarity::Minus,
                Polarity::Minus => *self = Self::default(),
            }
        } else {
            *self = Self::select(feature, Polarity::Plus);
        }
    }

    /// Segments of `record` carrying the selected value; `±` and `0` never match.
    pub fn highlighted(&self, record: &LanguageRecord, table: &SegmentFeatureTable) -> Vec<String> {
        let Some(feature) = self.feature.as_deref() else {
            return Vec::new();
        };
        record
            .elementary_segments
            .iter()
            .filter(|seg| self.polarity.matches(table.get(seg, feature)))
            .cloned()
            .collect()
    }
}
