use std::collections::BTreeSet;

use pfe_model::MedicationRecord;

/// Every distinct medication name in the medication extract.
///
/// Built in a pass of its own, before any patient's medication features are
/// finalized, so every patient gets the same medication keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationVocabulary {
    names: BTreeSet<String>,
}

impl MedicationVocabulary {
    pub fn from_records(records: &[MedicationRecord]) -> Self {
        Self {
            names: records
                .iter()
                .map(|record| record.medication_name.clone())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for MedicationVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
