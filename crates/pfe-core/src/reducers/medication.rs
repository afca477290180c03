use std::collections::BTreeMap;

use pfe_model::{FeatureSet, leading_number};

use crate::stats::summarize;
use crate::vocabulary::MedicationVocabulary;

/// Occurrences of one medication for one patient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationTally {
    pub count: usize,
    /// Numeric strengths only; blank or unreadable strengths are counted in
    /// `count` but not kept here.
    pub strengths: Vec<f64>,
}

/// Per-patient medication state, filled record by record during grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationAccumulator {
    tallies: BTreeMap<String, MedicationTally>,
}

impl MedicationAccumulator {
    pub fn record(&mut self, name: &str, strength: &str) {
        let tally = self.tallies.entry(name.to_string()).or_default();
        tally.count += 1;
        if let Some(value) = leading_number(strength) {
            tally.strengths.push(value);
        }
    }

    pub fn tally(&self, name: &str) -> Option<&MedicationTally> {
        self.tallies.get(name)
    }

    /// Emits `<name>_COUNT` for every vocabulary name, plus
    /// `<name>_STRENGTH_MIN/AVG/MAX` where the patient has numeric strengths.
    ///
    /// Names outside `vocabulary` are not emitted.
    pub fn finalize(&self, vocabulary: &MedicationVocabulary) -> FeatureSet {
        let mut features = FeatureSet::new();
        for name in vocabulary.iter() {
            let tally = self.tallies.get(name);
            let count = tally.map_or(0, |tally| tally.count);
            features.insert(format!("{name}_COUNT"), count);
            let Some(tally) = tally.filter(|tally| tally.count > 0) else {
                continue;
            };
            if let Some(summary) = summarize(&tally.strengths) {
                summary.write_into(&mut features, &format!("{name}_STRENGTH"));
            }
        }
        features
    }
}

/// Medication features for a patient who may have no medication records.
pub fn reduce_medications(
    accumulator: Option<&MedicationAccumulator>,
    vocabulary: &MedicationVocabulary,
) -> FeatureSet {
    match accumulator {
        Some(accumulator) => accumulator.finalize(vocabulary),
        None => MedicationAccumulator::default().finalize(vocabulary),
    }
}
