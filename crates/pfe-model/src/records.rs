//! Source records as they arrive from the relational extracts.
//!
//! Field renames match the extract headers; columns not listed here are
//! ignored on load.

use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, PatientGuid};
use crate::numeric::truthy_number;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    #[serde(rename = "PatientGuid")]
    pub patient_guid: PatientGuid,
    #[serde(rename = "ICD9Code", default)]
    pub icd9_code: String,
}

/// A diagnosis paired with the category it was classified into.
///
/// Produced once per record during grouping so reducers never re-classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDiagnosis {
    pub icd9_code: String,
    pub category: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    #[serde(rename = "PatientGuid")]
    pub patient_guid: PatientGuid,
    #[serde(rename = "MedicationName", default)]
    pub medication_name: String,
    #[serde(rename = "MedicationStrength", default)]
    pub medication_strength: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStatRecord {
    #[serde(rename = "PatientGuid")]
    pub patient_guid: PatientGuid,
    #[serde(default)]
    pub avg_number_distinct_year_medication: String,
    #[serde(default)]
    pub max_number_distinct_year_medication: String,
}

/// Prior-medication-year statistics for one patient.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearStats {
    pub avg: f64,
    pub max: f64,
}

impl YearStats {
    pub const AVG_COLUMN: &'static str = "avg_number_distinct_year_medication";
    pub const MAX_COLUMN: &'static str = "max_number_distinct_year_medication";

    /// Blank, zero and non-numeric values all collapse to `0`.
    pub fn from_record(record: &YearStatRecord) -> Self {
        Self {
            avg: truthy_number(&record.avg_number_distinct_year_medication).unwrap_or(0.0),
            max: truthy_number(&record.max_number_distinct_year_medication).unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    #[serde(rename = "patientGuid", alias = "PatientGuid")]
    pub patient_guid: PatientGuid,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub bmi: String,
    #[serde(rename = "systolicBP", default)]
    pub systolic_bp: String,
    #[serde(rename = "diastolicBP", default)]
    pub diastolic_bp: String,
    #[serde(rename = "respiratoryRate", default)]
    pub respiratory_rate: String,
    #[serde(rename = "heartRate", default)]
    pub heart_rate: String,
}

impl TranscriptRecord {
    pub fn value(&self, vital: VitalSign) -> &str {
        match vital {
            VitalSign::Height => &self.height,
            VitalSign::Weight => &self.weight,
            VitalSign::Bmi => &self.bmi,
            VitalSign::SystolicBp => &self.systolic_bp,
            VitalSign::DiastolicBp => &self.diastolic_bp,
            VitalSign::RespiratoryRate => &self.respiratory_rate,
            VitalSign::HeartRate => &self.heart_rate,
        }
    }
}

/// The vital-sign fields tracked from visit transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VitalSign {
    Height,
    Weight,
    Bmi,
    SystolicBp,
    DiastolicBp,
    RespiratoryRate,
    HeartRate,
}

impl VitalSign {
    pub const ALL: [VitalSign; 7] = [
        VitalSign::Height,
        VitalSign::Weight,
        VitalSign::Bmi,
        VitalSign::SystolicBp,
        VitalSign::DiastolicBp,
        VitalSign::RespiratoryRate,
        VitalSign::HeartRate,
    ];

    /// Column name in the transcript extract, also used as the feature key prefix.
    pub const fn field_name(self) -> &'static str {
        match self {
            VitalSign::Height => "height",
            VitalSign::Weight => "weight",
            VitalSign::Bmi => "bmi",
            VitalSign::SystolicBp => "systolicBP",
            VitalSign::DiastolicBp => "diastolicBP",
            VitalSign::RespiratoryRate => "respiratoryRate",
            VitalSign::HeartRate => "heartRate",
        }
    }
}

/// One roster row; `values` lines up with [`Roster::headers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub guid: PatientGuid,
    pub values: Vec<String>,
}

/// The authoritative patient list for one split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub headers: Vec<String>,
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
