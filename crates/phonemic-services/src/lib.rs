//! Orchestration over the lower-level crates.
//! Thin on purpose: the CLI talks to these functions, not to the parsers or the store directly.

pub mod cache;
pub mod catalog;
pub mod compare;
pub mod import;
pub mod overview;
pub mod validate;

pub use catalog::Catalog;
pub use compare::{compare_all_pairs, compare_pair};
pub use import::import_csv;
pub use overview::{overview, OverviewFilter, PhonemeClass};
pub use phonemic_core::{LanguageRecord, Result, SegmentFeatureTable};
pub use validate::{validate_all, validate_language};

use phonemic_config::PhonemicConfig;
use phonemic_import_csv::ColumnMapping;
use phonemic_similarity::FunctionalEquivalence;

/// Reference `k ≡ ʔ` plus any `[compare] equivalences` pairs.
pub fn equivalence_from_config(cfg: &PhonemicConfig) -> FunctionalEquivalence {
    let compare = cfg.compare.clone().unwrap_or_default();
    let mut eq = if compare.no_reference.unwrap_or(false) {
        FunctionalEquivalence::new()
    } else {
        FunctionalEquivalence::reference()
    };
    for [a, b] in compare.equivalences.unwrap_or_default() {
        eq.insert_pair(&a, &b);
    }
    eq
}

pub fn feature_table_from_config(cfg: &PhonemicConfig) -> SegmentFeatureTable {
    let table = SegmentFeatureTable::reference();
    match cfg.features.as_ref().and_then(|f| f.overrides.as_ref()) {
        Some(overrides) => table.with_overrides(overrides),
        None => table,
    }
}

pub fn column_mapping_from_config(cfg: &PhonemicConfig) -> Result<ColumnMapping> {
    match cfg.import.as_ref().and_then(|i| i.columns.as_ref()) {
        Some(columns) => ColumnMapping::default().with_overrides(columns),
        None => Ok(ColumnMapping::default()),
    }
}
