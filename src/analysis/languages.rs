use crate::facts::RepositoryData;
use serde::{Deserialize, Serialize};

/// Share of the codebase written in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub name: String,
    pub bytes: u64,
    pub percentage: f64,
}

/// Ranks languages by their share of the total byte count, largest first.
///
/// Languages with the same byte count are ordered by name.
#[must_use]
pub fn analyze_languages(data: &RepositoryData) -> Vec<LanguageStats> {
    let total: u64 = data.languages.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<LanguageStats> = data
        .languages
        .iter()
        .map(|(name, &bytes)| {
            #[expect(clippy::cast_precision_loss, reason = "Precision loss acceptable for percentages")]
            let percentage = bytes as f64 / total as f64 * 100.0;
            LanguageStats {
                name: name.clone(),
                bytes,
                percentage,
            }
        })
        .collect();

    // byte counts order exactly like the percentages derived from them
    stats.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.name.cmp(&b.name)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::records::{ExtractionMeta, RepositoryMetadata};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn data_with(languages: &[(&str, u64)]) -> RepositoryData {
        let mut data = RepositoryData::new(RepositoryMetadata::default(), ExtractionMeta::new(Utc::now(), "o", "r"));
        data.languages = languages.iter().map(|(name, bytes)| ((*name).to_string(), *bytes)).collect::<BTreeMap<_, _>>();
        data
    }

    #[test]
    fn test_empty_mapping() {
        assert!(analyze_languages(&data_with(&[])).is_empty());
    }

    #[test]
    fn test_zero_total() {
        assert!(analyze_languages(&data_with(&[("Rust", 0), ("C", 0)])).is_empty());
    }

    #[test]
    fn test_percentages_sum_to_100_and_are_sorted() {
        let stats = analyze_languages(&data_with(&[("Go", 70_123), ("Shell", 1_234), ("Python", 9_876), ("Makefile", 17)]));

        let sum: f64 = stats.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");

        for pair in stats.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
        assert_eq!(stats[0].name, "Go");
        assert_eq!(stats[3].name, "Makefile");
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let stats = analyze_languages(&data_with(&[("Zig", 50), ("Ada", 50), ("Rust", 100)]));
        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rust", "Ada", "Zig"]);
        assert!((stats[0].percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_language() {
        let stats = analyze_languages(&data_with(&[("Rust", 1)]));
        assert_eq!(stats.len(), 1);
        assert!((stats[0].percentage - 100.0).abs() < f64::EPSILON);
    }
}
