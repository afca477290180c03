//! Integration tests for per-patient grouping.

mod common;

use common::{diagnosis, guid, medication, taxonomy, transcript, year_stat};
use pfe_core::{
    AggregatedSources, AggregationStats, DiagnosisClassifier, MedicationVocabulary,
    ReferenceData, group_diagnoses, group_medications, group_transcripts, group_year_stats,
};
use pfe_model::CategoryId;

#[test]
fn diagnoses_are_grouped_in_input_order_with_categories() {
    let taxonomy = taxonomy();
    let records = vec![
        diagnosis("A", "401.9"),
        diagnosis("B", "250"),
        diagnosis("A", "V70.0"),
        diagnosis("A", "999"),
    ];
    let groups = group_diagnoses(&records, &DiagnosisClassifier::new(&taxonomy));

    let a = groups.get(&guid("A")).expect("group A");
    let codes: Vec<&str> = a.iter().map(|d| d.icd9_code.as_str()).collect();
    assert_eq!(codes, vec!["401.9", "V70.0", "999"]);
    assert_eq!(a[0].category, Some(CategoryId::new(1)));
    assert_eq!(a[1].category, Some(CategoryId::new(2)));
    assert_eq!(a[2].category, None);
    // Raw input is left untouched.
    assert_eq!(records[2].icd9_code, "V70.0");
}

#[test]
fn medications_accumulate_per_patient() {
    let records = vec![
        medication("A", "X", "10"),
        medication("B", "Y", "5 mg"),
        medication("A", "X", ""),
    ];
    let groups = group_medications(&records);
    let tally = groups
        .get(&guid("A"))
        .and_then(|acc| acc.tally("X"))
        .expect("tally for X");
    assert_eq!(tally.count, 2);
    assert_eq!(tally.strengths, vec![10.0]);
    assert!(groups.get(&guid("B")).and_then(|acc| acc.tally("X")).is_none());
}

#[test]
fn year_stats_last_write_wins() {
    let groups = group_year_stats(&[year_stat("A", "1", "2"), year_stat("A", "3.5", "")]);
    let stats = groups.get(&guid("A")).expect("stats for A");
    assert_eq!(stats.avg, 3.5);
    assert_eq!(stats.max, 0.0);
}

#[test]
fn transcripts_are_listed_per_patient() {
    let groups = group_transcripts(&[
        transcript("A", "60", ""),
        transcript("B", "70", ""),
        transcript("A", "61", ""),
    ]);
    let heights: Vec<&str> = groups[&guid("A")].iter().map(|t| t.height.as_str()).collect();
    assert_eq!(heights, vec!["60", "61"]);
}

#[test]
fn vocabulary_counts_distinct_names_across_patients() {
    let records = vec![
        medication("A", "Aspirin", "81 mg"),
        medication("B", "Aspirin", ""),
        medication("B", "Metformin", "500 mg"),
        medication("C", "Lisinopril", "10 mg"),
    ];
    let vocabulary = MedicationVocabulary::from_records(&records);
    assert_eq!(vocabulary.len(), 3);
    let names: Vec<&str> = vocabulary.iter().collect();
    assert_eq!(names, vec!["Aspirin", "Lisinopril", "Metformin"]);
}

#[test]
fn build_reports_counts_gathered_during_aggregation() {
    let reference = ReferenceData {
        diagnoses: vec![
            diagnosis("A", "250"),
            diagnosis("A", "V58.69"),
            diagnosis("B", "401.9"),
            diagnosis("B", "800"),
        ],
        medications: vec![
            medication("A", "Aspirin", "81 mg"),
            medication("B", "Aspirin", ""),
            medication("B", "Metformin", "500 mg"),
        ],
        transcripts: vec![transcript("A", "60", "150")],
        year_stats: vec![year_stat("B", "1.5", "2")],
    };
    let sources = AggregatedSources::build(taxonomy(), &reference);

    assert_eq!(
        sources.stats(),
        AggregationStats {
            diagnosis_records: 4,
            unclassified_diagnoses: 1,
            diagnosis_patients: 2,
            medication_records: 3,
            medication_patients: 2,
            vocabulary_size: 2,
            transcript_records: 1,
            transcript_patients: 1,
            year_stat_patients: 1,
        }
    );
}
