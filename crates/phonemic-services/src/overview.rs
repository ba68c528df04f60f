use phonemic_core::LanguageRecord;
use phonemic_domain::{LanguageSummary, OverviewStats, SymbolCount, SCHEMA_VERSION};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const VOWELS: &[&str] = &[
    "a", "e", "i", "o", "u", "æ", "ɑ", "ɛ", "ɪ", "ɒ", "ɔ", "ʊ", "ʌ", "ə", "ɜ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhonemeClass {
    #[default]
    All,
    Vowels,
    Consonants,
}

/// Filter applied to symbol listings.
#[derive(Debug, Clone, Default)]
pub struct OverviewFilter {
    /// only applies to surface phonemes
    pub class: PhonemeClass,
    pub search: Option<String>,
}

/// Vowel if the symbol, stripped of length and diacritic marks and
/// lowercased, contains a vowel anywhere (`ʔa`, `ai`, `ər`).
pub fn is_vowel(symbol: &str) -> bool {
    static MARKS: OnceLock<Regex> = OnceLock::new();
    let re = MARKS.get_or_init(|| Regex::new(r"[ːˑ\u{0325}\u{0303}\u{030A}]").unwrap());
    let base = re.replace_all(symbol, "").to_lowercase();
    VOWELS.iter().any(|v| base.contains(v))
}

/// Reduction from surface to elementary inventory, in percent.
pub fn reduction(record: &LanguageRecord) -> f64 {
    let surface = record.surface_count();
    if surface == 0 {
        return 0.0;
    }
    let raw = (1.0 - record.elementary_count() as f64 / surface as f64) * 100.0;
    (raw * 10.0).round() / 10.0
}

fn count_symbols<'a, F, I>(records: &'a [LanguageRecord], pick: F) -> Vec<SymbolCount>
where
    F: Fn(&'a LanguageRecord) -> I,
    I: IntoIterator<Item = &'a String>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    // повторы внутри одного инвентаря тоже считаются
    for symbol in records.iter().flat_map(|r| pick(r)) {
        *counts.entry(symbol.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(symbol, occurrences)| SymbolCount {
            symbol: symbol.to_string(),
            occurrences,
        })
        .collect()
}

fn matches_search(symbol: &str, search: Option<&str>) -> bool {
    match search {
        Some(term) if !term.is_empty() => symbol.to_lowercase().contains(&term.to_lowercase()),
        _ => true,
    }
}

pub fn summarize(record: &LanguageRecord) -> LanguageSummary {
    LanguageSummary {
        id: record.id,
        name: record.name.clone(),
        family: record.family.clone(),
        complexity: record.complexity.clone(),
        surface: record.surface_count(),
        elementary: record.elementary_count(),
        reduction: reduction(record),
    }
}

pub fn overview(records: &[LanguageRecord], filter: &OverviewFilter) -> OverviewStats {
    let search = filter.search.as_deref();
    let mut surface = count_symbols(records, |r| r.surface_phonemes.iter());
    surface.retain(|c| {
        let class_ok = match filter.class {
            PhonemeClass::All => true,
            PhonemeClass::Vowels => is_vowel(&c.symbol),
            PhonemeClass::Consonants => !is_vowel(&c.symbol),
        };
        class_ok && matches_search(&c.symbol, search)
    });
    let mut elementary = count_symbols(records, |r| r.elementary_segments.iter());
    elementary.retain(|c| matches_search(&c.symbol, search));
    let mut supra = count_symbols(records, |r| r.suprasegmentals.iter());
    supra.retain(|c| matches_search(&c.symbol, search));

    tracing::debug!(
        event = "overview_built",
        languages = records.len(),
        surface = surface.len(),
        elementary = elementary.len()
    );
    OverviewStats {
        schema_version: SCHEMA_VERSION,
        languages: records.len(),
        surface_phonemes: surface,
        elementary_segments: elementary,
        suprasegmentals: supra,
        inventory: records.iter().map(summarize).collect(),
    }
}
