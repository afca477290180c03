//! Typed loaders for the reference extracts and the patient roster.

use std::path::Path;

use csv::StringRecord;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use pfe_model::{
    DiagnosisRecord, MedicationRecord, PatientGuid, Roster, RosterEntry, TranscriptRecord,
    YearStatRecord,
};

use crate::csv_table::{column_index, is_blank_record, normalize_cell, open_csv, read_csv_table};
use crate::error::{IngestError, Result};

/// Identifier column of the diagnosis, medication, year-statistics and roster extracts.
pub const PATIENT_GUID_COLUMN: &str = "PatientGuid";
/// Identifier column of the transcript extract.
pub const TRANSCRIPT_GUID_COLUMN: &str = "patientGuid";

pub fn load_diagnoses(path: &Path) -> Result<Vec<DiagnosisRecord>> {
    read_records(path, PATIENT_GUID_COLUMN)
}

pub fn load_medications(path: &Path) -> Result<Vec<MedicationRecord>> {
    read_records(path, PATIENT_GUID_COLUMN)
}

pub fn load_transcripts(path: &Path) -> Result<Vec<TranscriptRecord>> {
    read_records(path, TRANSCRIPT_GUID_COLUMN)
}

pub fn load_year_stats(path: &Path) -> Result<Vec<YearStatRecord>> {
    read_records(path, PATIENT_GUID_COLUMN)
}

/// Deserialize every row of `path` into `T`.
///
/// Rows whose identifier cell is blank cannot join any roster entry; they are
/// skipped and counted in a warning.
pub fn read_records<T: DeserializeOwned>(path: &Path, guid_column: &str) -> Result<Vec<T>> {
    let (mut reader, headers) = open_csv(path)?;
    let header_names: Vec<String> = headers.iter().map(str::to_string).collect();
    let guid_idx =
        column_index(&header_names, guid_column).ok_or_else(|| IngestError::MissingColumn {
            column: guid_column.to_string(),
            path: path.to_path_buf(),
        })?;
    // Deserialization matches field names exactly, so the identifier column
    // takes the canonical spelling whatever case the extract used.
    let headers: StringRecord = header_names
        .iter()
        .enumerate()
        .map(|(idx, name)| if idx == guid_idx { guid_column } else { name.as_str() })
        .collect();
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::csv(path, &e))?;
        if is_blank_record(&row) {
            continue;
        }
        if row.get(guid_idx).is_none_or(|value| value.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let record = row
            .deserialize::<T>(Some(&headers))
            .map_err(|e| IngestError::csv(path, &e))?;
        records.push(record);
    }
    if skipped > 0 {
        warn!(
            path = %path.display(),
            skipped,
            "skipped rows without a patient identifier"
        );
    }
    debug!(path = %path.display(), record_count = records.len(), "loaded extract");
    Ok(records)
}

/// Load a roster, keeping every column so output rows can carry them through.
pub fn read_roster(path: &Path) -> Result<Roster> {
    let table = read_csv_table(path)?;
    let guid_idx =
        table
            .column_index(PATIENT_GUID_COLUMN)
            .ok_or_else(|| IngestError::MissingColumn {
                column: PATIENT_GUID_COLUMN.to_string(),
                path: path.to_path_buf(),
            })?;
    let mut entries = Vec::with_capacity(table.rows.len());
    for (values, line) in table.rows.into_iter().zip(table.lines) {
        let raw = values.get(guid_idx).map(String::as_str).unwrap_or("");
        let guid = PatientGuid::new(normalize_cell(raw)).map_err(|_| IngestError::InvalidValue {
            field: PATIENT_GUID_COLUMN.to_string(),
            value: raw.to_string(),
            path: path.to_path_buf(),
            line,
        })?;
        entries.push(RosterEntry { guid, values });
    }
    debug!(path = %path.display(), patient_count = entries.len(), "loaded roster");
    Ok(Roster {
        headers: table.headers,
        entries,
    })
}
