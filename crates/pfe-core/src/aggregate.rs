//! Grouping of flat extract records by patient.
//!
//! Groups keep input order within each patient.

use std::collections::BTreeMap;

use pfe_model::{
    ClassifiedDiagnosis, DiagnosisRecord, MedicationRecord, PatientGuid, TranscriptRecord,
    YearStatRecord, YearStats,
};

use crate::classify::DiagnosisClassifier;
use crate::reducers::medication::MedicationAccumulator;

pub type DiagnosisMap = BTreeMap<PatientGuid, Vec<ClassifiedDiagnosis>>;
pub type MedicationMap = BTreeMap<PatientGuid, MedicationAccumulator>;
pub type TranscriptMap = BTreeMap<PatientGuid, Vec<TranscriptRecord>>;
pub type YearStatMap = BTreeMap<PatientGuid, YearStats>;

/// Classifies each diagnosis once and groups the results by patient.
pub fn group_diagnoses(
    records: &[DiagnosisRecord],
    classifier: &DiagnosisClassifier<'_>,
) -> DiagnosisMap {
    let mut groups = DiagnosisMap::new();
    for record in records {
        let classified = ClassifiedDiagnosis {
            icd9_code: record.icd9_code.clone(),
            category: classifier.classify(&record.icd9_code),
        };
        groups
            .entry(record.patient_guid.clone())
            .or_default()
            .push(classified);
    }
    groups
}

/// Groups medications straight into per-patient accumulators.
pub fn group_medications(records: &[MedicationRecord]) -> MedicationMap {
    let mut groups = MedicationMap::new();
    for record in records {
        groups
            .entry(record.patient_guid.clone())
            .or_default()
            .record(&record.medication_name, &record.medication_strength);
    }
    groups
}

pub fn group_transcripts(records: &[TranscriptRecord]) -> TranscriptMap {
    let mut groups = TranscriptMap::new();
    for record in records {
        groups
            .entry(record.patient_guid.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// One row per patient is expected; a later row replaces an earlier one.
pub fn group_year_stats(records: &[YearStatRecord]) -> YearStatMap {
    records
        .iter()
        .map(|record| (record.patient_guid.clone(), YearStats::from_record(record)))
        .collect()
}
