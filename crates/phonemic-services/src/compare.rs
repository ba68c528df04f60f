use phonemic_core::LanguageRecord;
use phonemic_domain::{PairComparison, SCHEMA_VERSION};
use phonemic_similarity::{compare_with, FunctionalEquivalence};

pub fn compare_pair(
    left: &LanguageRecord,
    right: &LanguageRecord,
    equivalence: &FunctionalEquivalence,
) -> PairComparison {
    PairComparison {
        schema_version: SCHEMA_VERSION,
        left_id: left.id,
        left: left.name.clone(),
        right_id: right.id,
        right: right.name.clone(),
        similarity: compare_with(left, right, equivalence),
    }
}

/// Every unordered pair in collection order: (0,1), (0,2), ..., (1,2), ...
pub fn compare_all_pairs(
    records: &[LanguageRecord],
    equivalence: &FunctionalEquivalence,
) -> Vec<PairComparison> {
    let mut out = Vec::new();
    for (i, left) in records.iter().enumerate() {
        for right in &records[i + 1..] {
            out.push(compare_pair(left, right, equivalence));
        }
    }
    tracing::debug!(event = "pairs_compared", pairs = out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonemic_store::seed;

    #[test]
    fn seed_pairs_follow_collection_order() {
        let pairs = compare_all_pairs(&seed::languages(), &FunctionalEquivalence::reference());
        let names: Vec<_> = pairs
            .iter()
            .map(|p| (p.left.as_str(), p.right.as_str()))
            .collect();
        assert_eq!(
            names,
            [
                ("Rotokas", "Hawaiian"),
                ("Rotokas", "English"),
                ("Hawaiian", "English")
            ]
        );
        assert_eq!(pairs[0].similarity.jaccard, 57.1);
        assert_eq!(pairs[0].similarity.functional_jaccard, 71.4);
    }

    #[test]
    fn single_record_has_no_pairs() {
        let pairs = compare_all_pairs(&[seed::english()], &FunctionalEquivalence::reference());
        assert!(pairs.is_empty());
    }
}
