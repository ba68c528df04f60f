use phonemic_core::{LanguageRecord, Mapping};
use phonemic_domain::{CheckResult, ComplexityCounts, ValidationReport};
use std::collections::HashSet;

/// Longest decomposition still counted as optimized.
pub const OPTIMIZED_MAX_LEN: usize = 3;
/// Longest decomposition still counted as valid (complex).
pub const COMPLEX_MAX_LEN: usize = 6;

/// Класс сложности одного разложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityClass {
    Optimized,
    Complex,
    Invalid,
}

/// Classify by character count of the elementary string (not bytes).
pub fn classify(elementary: &str) -> ComplexityClass {
    match elementary.chars().count() {
        n if n <= OPTIMIZED_MAX_LEN => ComplexityClass::Optimized,
        n if n <= COMPLEX_MAX_LEN => ComplexityClass::Complex,
        _ => ComplexityClass::Invalid,
    }
}

/// Запустить все проверки для одного языка
pub fn validate(language: &LanguageRecord) -> ValidationReport {
    ValidationReport {
        completeness: check_completeness(&language.surface_phonemes, &language.surface_mappings),
        minimality: check_minimality(&language.elementary_segments, &language.surface_mappings),
        complexity: check_complexity(&language.surface_mappings),
    }
}

/// Every surface phoneme must appear as the `surface` of some mapping.
/// Details keep the original order and duplicates.
pub fn check_completeness(surface: &[String], mappings: &[Mapping]) -> CheckResult<Vec<String>> {
    let mapped: HashSet<&str> = mappings.iter().map(|m| m.surface.as_str()).collect();
    let unmapped: Vec<String> = surface
        .iter()
        .filter(|p| !mapped.contains(p.as_str()))
        .cloned()
        .collect();

    let message = if unmapped.is_empty() {
        "All surface phonemes have elementary mappings".to_string()
    } else {
        format!("Unmapped phonemes: {}", unmapped.join(", "))
    };
    CheckResult {
        passed: unmapped.is_empty(),
        message,
        details: unmapped,
    }
}

/// Every elementary segment must occur in some mapping's decomposition.
///
/// Occurrence is plain substring containment, so a segment that is part of a
/// longer symbol ("a" inside "aa") counts as used even if never written alone.
pub fn check_minimality(elementary: &[String], mappings: &[Mapping]) -> CheckResult<Vec<String>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unused: Vec<String> = Vec::new();
    for seg in elementary {
        // элементарные сегменты это множество, повторы не считаем
        if !seen.insert(seg.as_str()) {
            continue;
        }
        if !mappings.iter().any(|m| m.elementary.contains(seg.as_str())) {
            unused.push(seg.clone());
        }
    }

    let message = if unused.is_empty() {
        "All elementary segments are utilized".to_string()
    } else {
        format!("Potentially unused segments: {}", unused.join(", "))
    };
    CheckResult {
        passed: unused.is_empty(),
        message,
        details: unused,
    }
}

pub fn check_complexity(mappings: &[Mapping]) -> CheckResult<ComplexityCounts> {
    let mut counts = ComplexityCounts::default();
    let mut invalid: Vec<String> = Vec::new();
    for m in mappings {
        match classify(&m.elementary) {
            ComplexityClass::Optimized => counts.optimized += 1,
            ComplexityClass::Complex => counts.complex += 1,
            ComplexityClass::Invalid => {
                counts.invalid += 1;
                invalid.push(format!("{}→{}", m.surface, m.elementary));
            }
        }
    }

    let message = if invalid.is_empty() {
        format!(
            "{} optimized, {} complex, {} invalid",
            counts.optimized, counts.complex, counts.invalid
        )
    } else {
        format!("Invalid mappings (>6 segments): {}", invalid.join(", "))
    };
    CheckResult {
        passed: invalid.is_empty(),
        message,
        details: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn lang(surface: &[&str], elementary: &[&str], mappings: &[(&str, &str)]) -> LanguageRecord {
        let mut rec = LanguageRecord::new(1, "Test");
        rec.surface_phonemes = strings(surface);
        rec.elementary_segments = strings(elementary);
        rec.surface_mappings = mappings
            .iter()
            .map(|(s, e)| Mapping::new(*s, *e, "..."))
            .collect();
        rec
    }

    #[test]
    fn complete_when_every_phoneme_is_mapped() {
        let rec = lang(&["p", "a"], &["w", "k", "a"], &[("p", "wk"), ("a", "a")]);
        let report = validate(&rec);
        assert!(report.completeness.passed);
        assert!(report.completeness.details.is_empty());
        assert_eq!(
            report.completeness.message,
            "All surface phonemes have elementary mappings"
        );
    }

    #[test]
    fn unmapped_keeps_order_and_duplicates() {
        let rec = lang(&["t", "p", "ŋ", "t", "a"], &["a"], &[("p", "a"), ("a", "a")]);
        let report = validate(&rec);
        assert!(!report.completeness.passed);
        assert_eq!(report.completeness.details, strings(&["t", "ŋ", "t"]));
        assert_eq!(report.completeness.message, "Unmapped phonemes: t, ŋ, t");
    }

    #[test]
    fn empty_mappings_leave_everything_unmapped() {
        let rec = lang(&["p", "t", "k"], &["k"], &[]);
        let report = validate(&rec);
        assert!(!report.completeness.passed);
        assert_eq!(report.completeness.details, rec.surface_phonemes);
        assert!(!report.minimality.passed);
        assert_eq!(report.complexity.details, ComplexityCounts::default());
    }

    #[test]
    fn cluster_marks_every_member_as_used() {
        let rec = lang(&["p"], &["w", "k"], &[("p", "wk")]);
        let report = validate(&rec);
        assert!(report.minimality.passed);
        assert_eq!(report.minimality.message, "All elementary segments are utilized");
    }

    #[test]
    fn unused_segment_is_reported() {
        let rec = lang(&["p"], &["w", "k", "h"], &[("p", "wk")]);
        let report = validate(&rec);
        assert!(!report.minimality.passed);
        assert_eq!(report.minimality.details, strings(&["h"]));
        assert_eq!(report.minimality.message, "Potentially unused segments: h");
    }

    #[test]
    fn substring_match_counts_as_used() {
        // "a" never stands alone but occurs inside "aa"
        let rec = lang(&["aː"], &["a", "aa"], &[("aː", "aa")]);
        assert!(validate(&rec).minimality.passed);
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        let rec = lang(&["x"], &["A"], &[("x", "a")]);
        assert_eq!(validate(&rec).minimality.details, strings(&["A"]));
    }

    #[test]
    fn complexity_thresholds() {
        assert_eq!(classify(""), ComplexityClass::Optimized);
        assert_eq!(classify("abc"), ComplexityClass::Optimized);
        assert_eq!(classify("abcd"), ComplexityClass::Complex);
        assert_eq!(classify("abcdef"), ComplexityClass::Complex);
        assert_eq!(classify("abcdefg"), ComplexityClass::Invalid);
        // multibyte symbols count once
        assert_eq!(classify("əj:"), ComplexityClass::Optimized);
        assert_eq!(classify("awəw:"), ComplexityClass::Complex);
    }

    #[test]
    fn invalid_mappings_are_listed() {
        let rec = lang(
            &["x", "y", "z"],
            &["a"],
            &[("x", "a"), ("y", "aaaa"), ("z", "aaaaaaa")],
        );
        let report = validate(&rec);
        assert!(!report.complexity.passed);
        assert_eq!(
            report.complexity.details,
            ComplexityCounts {
                optimized: 1,
                complex: 1,
                invalid: 1
            }
        );
        assert_eq!(
            report.complexity.message,
            "Invalid mappings (>6 segments): z→aaaaaaa"
        );
    }

    #[test]
    fn complexity_summary_message() {
        let rec = lang(&["x", "y"], &["a"], &[("x", "a"), ("y", "aaaa")]);
        let report = validate(&rec);
        assert!(report.complexity.passed);
        assert_eq!(report.complexity.message, "1 optimized, 1 complex, 0 invalid");
    }

    #[test]
    fn absent_fields_validate_as_empty() {
        let rec = LanguageRecord::new(9, "Empty");
        let report = validate(&rec);
        assert!(report.completeness.passed);
        assert!(report.minimality.passed);
        assert!(report.complexity.passed);
    }
}
