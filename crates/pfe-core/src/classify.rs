//! Diagnosis code classification.

use pfe_model::{CategoryId, DiagnosisCategory, Taxonomy, parse_number};

/// Maps raw ICD-9 codes onto a [`Taxonomy`].
///
/// 1. The code is read as a number and rounded up. A zero or unreadable result
///    marks the code as non-numeric.
/// 2. Non-numeric codes containing `E` or `V` (any case) belong to the last
///    declared category. Other non-numeric codes continue with the value `0`.
/// 3. The first category, in declaration order, whose inclusive range holds
///    the value wins. No match means no category.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosisClassifier<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> DiagnosisClassifier<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn classify(&self, code: &str) -> Option<CategoryId> {
        let numeric = parse_number(code)
            .map(f64::ceil)
            .filter(|value| *value != 0.0);
        let value = match numeric {
            Some(value) => value,
            None => {
                let upper = code.to_uppercase();
                if upper.contains('E') || upper.contains('V') {
                    return Some(self.taxonomy.fallback());
                }
                0.0
            }
        };
        self.taxonomy
            .iter()
            .find(|(_, category)| category.contains(value))
            .map(|(id, _)| id)
    }

    pub fn classify_category(&self, code: &str) -> Option<&'a DiagnosisCategory> {
        self.classify(code).and_then(|id| self.taxonomy.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            DiagnosisCategory::new("Infectious", 1, 139).unwrap(),
            DiagnosisCategory::new("Endocrine", 240, 279).unwrap(),
            DiagnosisCategory::new("Supplemental", 1000, 1000).unwrap(),
        ])
        .unwrap()
    }

    fn name(taxonomy: &Taxonomy, code: &str) -> Option<String> {
        DiagnosisClassifier::new(taxonomy)
            .classify_category(code)
            .map(|c| c.name.clone())
    }

    #[test]
    fn numeric_codes_use_inclusive_ranges() {
        let taxonomy = taxonomy();
        assert_eq!(name(&taxonomy, "1").as_deref(), Some("Infectious"));
        assert_eq!(name(&taxonomy, "139").as_deref(), Some("Infectious"));
        assert_eq!(name(&taxonomy, "250.01").as_deref(), Some("Endocrine"));
        assert_eq!(name(&taxonomy, "279").as_deref(), Some("Endocrine"));
    }

    #[test]
    fn radix_prefixed_codes_read_as_numbers() {
        let taxonomy = taxonomy();
        assert_eq!(name(&taxonomy, "0x1F").as_deref(), Some("Infectious"));
        assert_eq!(name(&taxonomy, "0b11").as_deref(), Some("Infectious"));
    }

    #[test]
    fn fractional_codes_round_up() {
        let taxonomy = taxonomy();
        // 139.5 rounds up to 140, which sits between the first two ranges.
        assert_eq!(name(&taxonomy, "139.5"), None);
        assert_eq!(name(&taxonomy, "239.1").as_deref(), Some("Endocrine"));
    }

    #[test]
    fn supplemental_codes_fall_back_to_last_category() {
        let taxonomy = taxonomy();
        assert_eq!(name(&taxonomy, "V58.69").as_deref(), Some("Supplemental"));
        assert_eq!(name(&taxonomy, "e849.0").as_deref(), Some("Supplemental"));
    }

    #[test]
    fn unmatched_codes_are_absent() {
        let taxonomy = taxonomy();
        assert_eq!(name(&taxonomy, "500"), None);
        assert_eq!(name(&taxonomy, "ABC"), None);
        assert_eq!(name(&taxonomy, ""), None);
        assert_eq!(name(&taxonomy, "0"), None);
    }

    #[test]
    fn non_numeric_codes_scan_with_zero() {
        let taxonomy = Taxonomy::new(vec![
            DiagnosisCategory::new("Zero", 0, 0).unwrap(),
            DiagnosisCategory::new("Last", 1, 5).unwrap(),
        ])
        .unwrap();
        assert_eq!(name(&taxonomy, "XYZ").as_deref(), Some("Zero"));
        assert_eq!(name(&taxonomy, "-0.4").as_deref(), Some("Zero"));
    }

    #[test]
    fn overlapping_ranges_resolve_to_earliest() {
        let taxonomy = Taxonomy::new(vec![
            DiagnosisCategory::new("Wide", 100, 300).unwrap(),
            DiagnosisCategory::new("Narrow", 200, 250).unwrap(),
        ])
        .unwrap();
        assert_eq!(name(&taxonomy, "225").as_deref(), Some("Wide"));
    }
}
