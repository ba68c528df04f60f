use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Outcome of one validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult<D> {
    pub passed: bool,
    pub message: String,
    pub details: D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityCounts {
    pub optimized: usize,
    pub complex: usize,
    pub invalid: usize,
}

/// Three independent checks over one language's mapping table.
/// Field order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub completeness: CheckResult<Vec<String>>,
    pub minimality: CheckResult<Vec<String>>,
    pub complexity: CheckResult<ComplexityCounts>,
}

impl ValidationReport {
    /// (rule name, passed, message) in display order.
    pub fn entries(&self) -> [(&'static str, bool, &str); 3] {
        [
            ("completeness", self.completeness.passed, self.completeness.message.as_str()),
            ("minimality", self.minimality.passed, self.minimality.message.as_str()),
            ("complexity", self.complexity.passed, self.complexity.message.as_str()),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.entries().iter().all(|(_, passed, _)| *passed)
    }
}

/// Validation report tagged with the language it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguageValidation {
    pub schema_version: u32,
    pub language_id: u32,
    pub language: String,
    pub report: ValidationReport,
}

/// Overlap of two elementary-segment inventories. Percentages carry one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimilarityReport {
    pub jaccard: f64,
    pub functional_jaccard: f64,
    pub shared: Vec<String>,
    pub unique1: Vec<String>,
    pub unique2: Vec<String>,
    /// (left symbol, right symbol) pairs counted only through functional equivalence.
    pub functional_matches: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PairComparison {
    pub schema_version: u32,
    pub left_id: u32,
    pub left: String,
    pub right_id: u32,
    pub right: String,
    pub similarity: SimilarityReport,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SymbolCount {
    pub symbol: String,
    /// Occurrences across all inventories, duplicates included.
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguageSummary {
    pub id: u32,
    pub name: String,
    pub family: String,
    pub complexity: Option<String>,
    pub surface: usize,
    pub elementary: usize,
    /// Percent reduction from surface to elementary inventory.
    pub reduction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverviewStats {
    pub schema_version: u32,
    pub languages: usize,
    pub surface_phonemes: Vec<SymbolCount>,
    pub elementary_segments: Vec<SymbolCount>,
    pub suprasegmentals: Vec<SymbolCount>,
    pub inventory: Vec<LanguageSummary>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ImportSummary {
    pub rows: usize,
    pub created: usize,
    pub skipped: usize,
    pub ids: Vec<u32>,
}
