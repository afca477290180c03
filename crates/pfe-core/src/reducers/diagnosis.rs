use std::collections::BTreeMap;

use pfe_model::{CategoryId, ClassifiedDiagnosis, FeatureSet, Taxonomy};

/// Prefix of the per-code presence flag keys.
pub const CODE_FLAG_PREFIX: &str = "[diagnosis_code]_";

/// Category counters plus one presence flag per distinct raw code.
///
/// The result is sparse: categories the patient has no diagnosis in are
/// absent. Unclassified diagnoses count towards no category but still set
/// their code flag.
pub fn reduce_diagnoses(diagnoses: &[ClassifiedDiagnosis], taxonomy: &Taxonomy) -> FeatureSet {
    let mut features = FeatureSet::new();
    let mut counts: BTreeMap<CategoryId, usize> = BTreeMap::new();
    for diagnosis in diagnoses {
        if let Some(category) = diagnosis.category {
            *counts.entry(category).or_default() += 1;
        }
        features.insert(format!("{CODE_FLAG_PREFIX}{}", diagnosis.icd9_code), 1usize);
    }
    for (id, count) in counts {
        if let Some(category) = taxonomy.get(id) {
            features.insert(category.column_name(), count);
        }
    }
    features
}

/// Adds a zero counter for every taxonomy category missing from `features`.
pub fn fill_category_defaults(features: &mut FeatureSet, taxonomy: &Taxonomy) {
    for category in taxonomy.categories() {
        features.insert_default(category.column_name(), 0usize);
    }
}
