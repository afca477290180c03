//! Integration tests for roster composition.

mod common;

use common::{diagnosis, guid, medication, roster, taxonomy, transcript, year_stat};
use pfe_core::{
    AggregatedSources, CoreError, FeatureComposer, MissingDiagnosisPolicy, ReferenceData,
    compose_split,
};
use pfe_model::{FeatureValue, RosterEntry, YearStats};

fn sources(reference: &ReferenceData) -> AggregatedSources {
    AggregatedSources::build(taxonomy(), reference)
}

#[test]
fn single_patient_medication_scenario() {
    let reference = ReferenceData {
        diagnoses: vec![diagnosis("A", "250")],
        medications: vec![medication("A", "X", "10"), medication("A", "X", "")],
        ..ReferenceData::default()
    };
    let sources = sources(&reference);
    let split = compose_split(&roster(&["A"]), &sources, MissingDiagnosisPolicy::Fail)
        .expect("compose split");

    assert_eq!(split.rows.len(), 1);
    let row = &split.rows[0];
    assert_eq!(row.medication.get("X_COUNT"), Some(FeatureValue::Number(2.0)));
    for key in ["X_STRENGTH_MIN", "X_STRENGTH_AVG", "X_STRENGTH_MAX"] {
        assert_eq!(row.medication.get(key), Some(FeatureValue::Number(10.0)), "{key}");
    }
    assert_eq!(
        row.diagnosis.get("[diagnosis_count]_Endocrine"),
        Some(FeatureValue::Number(1.0))
    );
    assert_eq!(
        row.diagnosis.get("[diagnosis_count]_Circulatory"),
        Some(FeatureValue::Number(0.0))
    );
    assert_eq!(
        row.diagnosis.get("[diagnosis_code]_250"),
        Some(FeatureValue::Number(1.0))
    );
}

#[test]
fn every_roster_patient_gets_exactly_one_row() {
    let reference = ReferenceData {
        diagnoses: vec![
            diagnosis("A", "401.1"),
            diagnosis("B", "250"),
            diagnosis("C", "V58"),
        ],
        year_stats: vec![year_stat("B", "2", "4")],
        ..ReferenceData::default()
    };
    let sources = sources(&reference);
    let split = compose_split(&roster(&["C", "A", "B"]), &sources, MissingDiagnosisPolicy::Fail)
        .expect("compose split");

    let guids: Vec<&str> = split.rows.iter().map(|row| row.guid.as_str()).collect();
    assert_eq!(guids, vec!["C", "A", "B"]);
    assert_eq!(split.rows[1].year_stats, YearStats { avg: 0.0, max: 0.0 });
    assert_eq!(split.rows[2].year_stats, YearStats { avg: 2.0, max: 4.0 });
    assert_eq!(split.counts.patients, 3);
    assert_eq!(split.counts.with_year_stats, 1);
}

#[test]
fn all_blank_vitals_emit_no_columns() {
    let reference = ReferenceData {
        diagnoses: vec![diagnosis("A", "250")],
        transcripts: vec![transcript("A", "", "180"), transcript("A", "0", "")],
        ..ReferenceData::default()
    };
    let sources = sources(&reference);
    let row = FeatureComposer::new(&sources)
        .compose(&RosterEntry {
            guid: guid("A"),
            values: vec!["A".to_string()],
        })
        .expect("compose");

    let keys: Vec<&str> = row.transcript.keys().collect();
    assert_eq!(keys, vec!["weight_AVG", "weight_MAX", "weight_MIN"]);
}

#[test]
fn medication_keys_are_identical_across_patients() {
    let reference = ReferenceData {
        diagnoses: vec![diagnosis("A", "250"), diagnosis("B", "401")],
        medications: vec![
            medication("A", "Aspirin", "81 mg"),
            medication("B", "Metformin", "500 mg"),
        ],
        ..ReferenceData::default()
    };
    let sources = sources(&reference);
    let split = compose_split(&roster(&["A", "B"]), &sources, MissingDiagnosisPolicy::Fail)
        .expect("compose split");

    let count_keys = |idx: usize| -> Vec<String> {
        split.rows[idx]
            .medication
            .keys()
            .filter(|key| key.ends_with("_COUNT"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(count_keys(0), vec!["Aspirin_COUNT", "Metformin_COUNT"]);
    assert_eq!(count_keys(0), count_keys(1));
    assert_eq!(
        split.rows[0].medication.get("Metformin_COUNT"),
        Some(FeatureValue::Number(0.0))
    );
}

#[test]
fn missing_diagnosis_group_fails_by_default() {
    let reference = ReferenceData {
        diagnoses: vec![diagnosis("A", "250")],
        ..ReferenceData::default()
    };
    let sources = sources(&reference);
    let err = compose_split(&roster(&["A", "Z"]), &sources, MissingDiagnosisPolicy::Fail)
        .unwrap_err();
    assert!(matches!(err, CoreError::MissingDiagnoses { ref patient } if patient.as_str() == "Z"));
}

#[test]
fn missing_diagnosis_group_can_default_to_empty() {
    let reference = ReferenceData {
        diagnoses: vec![diagnosis("A", "250")],
        ..ReferenceData::default()
    };
    let sources = sources(&reference);
    let split = compose_split(&roster(&["Z"]), &sources, MissingDiagnosisPolicy::Empty)
        .expect("compose split");

    let row = &split.rows[0];
    assert!(row.diagnoses_defaulted);
    assert_eq!(split.counts.defaulted_diagnoses, 1);
    assert_eq!(row.diagnosis.len(), 3);
    assert!(row.diagnosis.iter().all(|(_, value)| value == FeatureValue::Number(0.0)));
}

#[test]
fn composing_twice_is_deterministic() {
    let reference = ReferenceData {
        diagnoses: vec![diagnosis("A", "250"), diagnosis("A", "E888")],
        medications: vec![medication("A", "X", "1"), medication("A", "Y", "2")],
        transcripts: vec![transcript("A", "60", "150")],
        year_stats: vec![year_stat("A", "1", "1")],
    };
    let first = compose_split(
        &roster(&["A"]),
        &sources(&reference),
        MissingDiagnosisPolicy::Fail,
    )
    .expect("first run");
    let second = compose_split(
        &roster(&["A"]),
        &sources(&reference),
        MissingDiagnosisPolicy::Fail,
    )
    .expect("second run");
    assert_eq!(first, second);
}
