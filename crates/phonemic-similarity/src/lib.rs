//! Set similarity between two elementary-segment inventories.

use phonemic_core::LanguageRecord;
use phonemic_domain::SimilarityReport;
use std::collections::{BTreeMap, BTreeSet};

/// Symmetric relation declaring symbols interchangeable for similarity purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionalEquivalence {
    pairs: BTreeMap<String, BTreeSet<String>>,
}

impl FunctionalEquivalence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velar stop and glottal stop: `k` ≡ `ʔ`.
    pub fn reference() -> Self {
        Self::new().with_pair("k", "ʔ")
    }

    pub fn with_pair(mut self, a: &str, b: &str) -> Self {
        self.insert_pair(a, b);
        self
    }

    /// Registers both directions. A symbol is never its own equivalent.
    pub fn insert_pair(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        self.pairs.entry(a.to_string()).or_default().insert(b.to_string());
        self.pairs.entry(b.to_string()).or_default().insert(a.to_string());
    }

    pub fn are_equivalent(&self, a: &str, b: &str) -> bool {
        self.pairs.get(a).is_some_and(|set| set.contains(b))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// `part / whole` as a percentage with one decimal; an empty whole gives 0.0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Compare with the reference equivalence table.
pub fn compare(left: &LanguageRecord, right: &LanguageRecord) -> SimilarityReport {
    compare_with(left, right, &FunctionalEquivalence::reference())
}

pub fn compare_with(
    left: &LanguageRecord,
    right: &LanguageRecord,
    equivalence: &FunctionalEquivalence,
) -> SimilarityReport {
    compare_sets(&left.elementary_set(), &right.elementary_set(), equivalence)
}

pub fn compare_sets(
    set1: &BTreeSet<&str>,
    set2: &BTreeSet<&str>,
    equivalence: &FunctionalEquivalence,
) -> SimilarityReport {
    // BTreeSet iteration is sorted, so every list below is already ordered
    let shared: Vec<&str> = set1.intersection(set2).copied().collect();
    let unique1: Vec<&str> = set1.difference(set2).copied().collect();
    let unique2: Vec<&str> = set2.difference(set1).copied().collect();
    let union = set1.union(set2).count();

    let matches = functional_matches(&unique1, &unique2, equivalence);

    SimilarityReport {
        jaccard: percent(shared.len(), union),
        functional_jaccard: percent(shared.len() + matches.len(), union),
        shared: to_owned(&shared),
        unique1: to_owned(&unique1),
        unique2: to_owned(&unique2),
        functional_matches: matches
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Maximum one-to-one matching between the symbols only one side has.
///
/// Each matched pair adds one element to the functional intersection, so the
/// count does not depend on which side is scanned first and a symbol with
/// several equivalents is never counted twice.
fn functional_matches<'a>(
    left: &[&'a str],
    right: &[&'a str],
    equivalence: &FunctionalEquivalence,
) -> Vec<(&'a str, &'a str)> {
    if equivalence.is_empty() || left.is_empty() || right.is_empty() {
        return Vec::new();
    }
    // owner[r] = index into `left` currently matched with right[r]
    let mut owner: Vec<Option<usize>> = vec![None; right.len()];
    for l in 0..left.len() {
        let mut visited = vec![false; right.len()];
        augment(l, left, right, equivalence, &mut visited, &mut owner);
    }

    let mut pairs: Vec<(&str, &str)> = owner
        .iter()
        .enumerate()
        .filter_map(|(r, l)| l.map(|l| (left[l], right[r])))
        .collect();
    pairs.sort_unstable();
    pairs
}

fn augment(
    l: usize,
    left: &[&str],
    right: &[&str],
    equivalence: &FunctionalEquivalence,
    visited: &mut [bool],
    owner: &mut [Option<usize>],
) -> bool {
    for r in 0..right.len() {
        if visited[r] || !equivalence.are_equivalent(left[l], right[r]) {
            continue;
        }
        visited[r] = true;
        let free = match owner[r] {
            None => true,
            Some(prev) => augment(prev, left, right, equivalence, visited, owner),
        };
        if free {
            owner[r] = Some(l);
            return true;
        }
    }
    false
}
