//! Record builders shared by the integration tests.

#![allow(dead_code)]

use pfe_model::{
    DiagnosisCategory, DiagnosisRecord, MedicationRecord, PatientGuid, Roster, RosterEntry,
    Taxonomy, TranscriptRecord, YearStatRecord,
};

pub fn guid(value: &str) -> PatientGuid {
    PatientGuid::new(value).unwrap()
}

pub fn taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        DiagnosisCategory::new("Endocrine", 240, 279).unwrap(),
        DiagnosisCategory::new("Circulatory", 390, 459).unwrap(),
        DiagnosisCategory::new("Supplemental", 1000, 1000).unwrap(),
    ])
    .unwrap()
}

pub fn diagnosis(patient: &str, code: &str) -> DiagnosisRecord {
    DiagnosisRecord {
        patient_guid: guid(patient),
        icd9_code: code.to_string(),
    }
}

pub fn medication(patient: &str, name: &str, strength: &str) -> MedicationRecord {
    MedicationRecord {
        patient_guid: guid(patient),
        medication_name: name.to_string(),
        medication_strength: strength.to_string(),
    }
}

pub fn year_stat(patient: &str, avg: &str, max: &str) -> YearStatRecord {
    YearStatRecord {
        patient_guid: guid(patient),
        avg_number_distinct_year_medication: avg.to_string(),
        max_number_distinct_year_medication: max.to_string(),
    }
}

pub fn transcript(patient: &str, height: &str, weight: &str) -> TranscriptRecord {
    TranscriptRecord {
        patient_guid: guid(patient),
        height: height.to_string(),
        weight: weight.to_string(),
        bmi: String::new(),
        systolic_bp: String::new(),
        diastolic_bp: String::new(),
        respiratory_rate: String::new(),
        heart_rate: String::new(),
    }
}

pub fn roster(patients: &[&str]) -> Roster {
    Roster {
        headers: vec!["PatientGuid".to_string()],
        entries: patients
            .iter()
            .map(|patient| RosterEntry {
                guid: guid(patient),
                values: vec![(*patient).to_string()],
            })
            .collect(),
    }
}
