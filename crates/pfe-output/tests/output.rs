//! Integration tests for feature table rendering and writing.

use std::fs;

use pfe_core::{
    AggregatedSources, MissingDiagnosisPolicy, ReferenceData, SplitFeatures, compose_split,
};
use pfe_model::{
    DiagnosisCategory, DiagnosisRecord, FeatureSet, FeatureValue, MedicationRecord, PatientGuid,
    Roster, RosterEntry, Taxonomy, YearStatRecord,
};
use pfe_output::{feature_blob, table_headers, write_feature_csv, write_feature_file};

fn guid(value: &str) -> PatientGuid {
    PatientGuid::new(value).unwrap()
}

fn taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        DiagnosisCategory::new("Endocrine", 240, 279).unwrap(),
        DiagnosisCategory::new("Supplemental", 1000, 1000).unwrap(),
    ])
    .unwrap()
}

fn roster(headers: &[&str], rows: &[&[&str]]) -> Roster {
    Roster {
        headers: headers.iter().map(|h| (*h).to_string()).collect(),
        entries: rows
            .iter()
            .map(|values| RosterEntry {
                guid: guid(values[0]),
                values: values.iter().map(|v| (*v).to_string()).collect(),
            })
            .collect(),
    }
}

fn scenario_split() -> SplitFeatures {
    let reference = ReferenceData {
        diagnoses: vec![DiagnosisRecord {
            patient_guid: guid("A"),
            icd9_code: "250".to_string(),
        }],
        medications: vec![
            MedicationRecord {
                patient_guid: guid("A"),
                medication_name: "X".to_string(),
                medication_strength: "10".to_string(),
            },
            MedicationRecord {
                patient_guid: guid("A"),
                medication_name: "X".to_string(),
                medication_strength: String::new(),
            },
        ],
        ..ReferenceData::default()
    };
    let sources = AggregatedSources::build(taxonomy(), &reference);
    compose_split(
        &roster(&["PatientGuid", "Gender"], &[&["A", "M"]]),
        &sources,
        MissingDiagnosisPolicy::Fail,
    )
    .expect("compose split")
}

fn render(split: &SplitFeatures) -> String {
    let mut buffer = Vec::new();
    write_feature_csv(&mut buffer, split).expect("write csv");
    String::from_utf8(buffer).expect("utf-8 output")
}

#[test]
fn renders_blob_columns_after_roster_columns() {
    let output = render(&scenario_split());
    insta::assert_snapshot!(output, @r#"
    PatientGuid,Gender,avg_number_distinct_year_medication,max_number_distinct_year_medication,diagnosis_features,medication_features,transcript_features
    A,M,0,0,"{""[diagnosis_code]_250"":1,""[diagnosis_count]_Endocrine"":1,""[diagnosis_count]_Supplemental"":0}","{""X_COUNT"":2,""X_STRENGTH_AVG"":10,""X_STRENGTH_MAX"":10,""X_STRENGTH_MIN"":10}",{}
    "#);
}

#[test]
fn roster_column_with_derived_name_is_overwritten_in_place() {
    let headers = vec![
        "PatientGuid".to_string(),
        "avg_number_distinct_year_medication".to_string(),
        "Gender".to_string(),
    ];
    assert_eq!(
        table_headers(&headers),
        vec![
            "PatientGuid",
            "avg_number_distinct_year_medication",
            "Gender",
            "max_number_distinct_year_medication",
            "diagnosis_features",
            "medication_features",
            "transcript_features",
        ]
    );

    let reference = ReferenceData {
        diagnoses: vec![DiagnosisRecord {
            patient_guid: guid("B"),
            icd9_code: "V58".to_string(),
        }],
        year_stats: vec![YearStatRecord {
            patient_guid: guid("B"),
            avg_number_distinct_year_medication: "2.5".to_string(),
            max_number_distinct_year_medication: "4".to_string(),
        }],
        ..ReferenceData::default()
    };
    let sources = AggregatedSources::build(taxonomy(), &reference);
    let split = compose_split(
        &roster(
            &["PatientGuid", "avg_number_distinct_year_medication", "Gender"],
            &[&["B", "stale", "F"]],
        ),
        &sources,
        MissingDiagnosisPolicy::Fail,
    )
    .expect("compose split");
    let output = render(&split);
    let second_line = output.lines().nth(1).expect("data row");
    assert!(second_line.starts_with("B,2.5,F,4,"), "{second_line}");
}

#[test]
fn null_extremes_render_as_sentinel_text() {
    let mut features = FeatureSet::new();
    features.insert("Z_STRENGTH_MIN", FeatureValue::Null);
    features.insert("Z_STRENGTH_AVG", 0.5);
    let blob = feature_blob(&features, "medication_features").expect("blob");
    assert_eq!(blob, r#"{"Z_STRENGTH_AVG":0.5,"Z_STRENGTH_MIN":"NULL"}"#);
}

#[test]
fn writing_twice_produces_identical_bytes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = dir.path().join("first/extended-patient-train.csv");
    let second = dir.path().join("second/extended-patient-train.csv");
    write_feature_file(&first, &scenario_split()).expect("first write");
    write_feature_file(&second, &scenario_split()).expect("second write");
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert!(!dir.path().join("first/extended-patient-train.csv.partial").exists());
}

#[test]
fn empty_roster_writes_header_only() {
    let sources = AggregatedSources::build(taxonomy(), &ReferenceData::default());
    let split = compose_split(
        &roster(&["PatientGuid"], &[]),
        &sources,
        MissingDiagnosisPolicy::Fail,
    )
    .expect("compose split");
    let output = render(&split);
    assert_eq!(output.lines().count(), 1);
}
