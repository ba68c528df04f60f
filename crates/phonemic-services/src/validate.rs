use phonemic_core::LanguageRecord;
use phonemic_domain::{LanguageValidation, SCHEMA_VERSION};

pub fn validate_language(record: &LanguageRecord) -> LanguageValidation {
    let report = phonemic_validate::validate(record);
    tracing::debug!(
        event = "language_validated",
        id = record.id,
        passed = report.all_passed()
    );
    LanguageValidation {
        schema_version: SCHEMA_VERSION,
        language_id: record.id,
        language: record.name.clone(),
        report,
    }
}

/// Validate every record, in collection order.
pub fn validate_all(records: &[LanguageRecord]) -> Vec<LanguageValidation> {
    records.iter().map(validate_language).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonemic_domain::ComplexityCounts;
    use phonemic_store::seed;

    #[test]
    fn seed_rotokas_is_clean() {
        let v = validate_language(&seed::rotokas());
        assert!(v.report.all_passed());
        assert_eq!(v.report.complexity.message, "19 optimized, 0 complex, 0 invalid");
    }

    #[test]
    fn seed_hawaiian_has_complex_diphthongs() {
        let v = validate_language(&seed::hawaiian());
        assert!(v.report.all_passed());
        assert_eq!(
            v.report.complexity.details,
            ComplexityCounts {
                optimized: 25,
                complex: 8,
                invalid: 0
            }
        );
    }

    #[test]
    fn seed_english_reports_unmapped_vowels() {
        let v = validate_language(&seed::english());
        assert!(!v.report.completeness.passed);
        assert_eq!(
            v.report.completeness.details,
            vec!["ɒː", "ɒː", "ə", "ər", "i", "ʔ"]
        );
        assert!(v.report.minimality.passed);
    }

    #[test]
    fn validate_all_keeps_order() {
        let ids: Vec<_> = validate_all(&seed::languages())
            .iter()
            .map(|v| v.language_id)
            .collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
