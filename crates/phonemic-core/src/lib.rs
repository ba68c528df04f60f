use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub mod features;

pub use features::{FeatureSelection, FeatureState, Polarity, SegmentFeatureTable, DISPLAY_FEATURES};

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// One language entry: its surface inventory, the elementary segments it is
/// decomposed into, and the mapping table between the two.
///
/// Every collection field defaults to empty when absent from the input, so a
/// partially filled record (CSV import, old cache snapshot) still validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    /// (latitude, longitude); informational only
    #[serde(default)]
    pub coordinates: (f64, f64),
    #[serde(default)]
    pub surface_phonemes: Vec<String>,
    /// Intermediate analysed forms, kept for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analyzed_phonemes: Vec<String>,
    /// Stored in display order, compared as a set.
    #[serde(default)]
    pub elementary_segments: Vec<String>,
    #[serde(default)]
    pub suprasegmentals: Vec<String>,
    #[serde(default)]
    pub features: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default)]
    pub surface_mappings: Vec<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect_notes: Option<String>,
}

impl LanguageRecord {
    /// Empty record with the given id and name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            family: String::new(),
            iso_code: None,
            coordinates: (0.0, 0.0),
            surface_phonemes: Vec::new(),
            analyzed_phonemes: Vec::new(),
            elementary_segments: Vec::new(),
            suprasegmentals: Vec::new(),
            features: 0,
            complexity: None,
            surface_mappings: Vec::new(),
            dialect_notes: None,
        }
    }

    pub fn elementary_set(&self) -> BTreeSet<&str> {
        self.elementary_segments.iter().map(String::as_str).collect()
    }

    pub fn surface_count(&self) -> usize {
        self.surface_phonemes.len()
    }

    pub fn elementary_count(&self) -> usize {
        self.elementary_segments.len()
    }
}

/// Decomposition of one surface phoneme into elementary segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub surface: String,
    /// Concatenated elementary symbols, optionally followed by the length marker `:`.
    pub elementary: String,
    /// Older data sets call this field `rule`.
    #[serde(default, alias = "rule")]
    pub notes: String,
}

impl Mapping {
    pub fn new(
        surface: impl Into<String>,
        elementary: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            elementary: elementary.into(),
            notes: notes.into(),
        }
    }
}
