//! Rectangular feature table layout.
//!
//! Every row carries the roster columns, the two year-statistics columns and
//! one JSON column per reducer. The column set depends only on the roster
//! headers, so all rows of a file line up.

use pfe_core::{PatientFeatures, SplitFeatures};
use pfe_model::{FeatureSet, YearStats, format_number};

use crate::error::{OutputError, Result};

pub const DIAGNOSIS_FEATURES_COLUMN: &str = "diagnosis_features";
pub const MEDICATION_FEATURES_COLUMN: &str = "medication_features";
pub const TRANSCRIPT_FEATURES_COLUMN: &str = "transcript_features";

/// Columns appended after the roster columns, in output order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    YearStats::AVG_COLUMN,
    YearStats::MAX_COLUMN,
    DIAGNOSIS_FEATURES_COLUMN,
    MEDICATION_FEATURES_COLUMN,
    TRANSCRIPT_FEATURES_COLUMN,
];

/// Roster headers followed by the derived columns. A roster column that shares
/// a derived column's name keeps its position and takes the derived value.
pub fn table_headers(roster_headers: &[String]) -> Vec<String> {
    let mut headers = roster_headers.to_vec();
    for column in DERIVED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            headers.push(column.to_string());
        }
    }
    headers
}

/// Compact JSON object of a feature set, keys sorted.
pub fn feature_blob(features: &FeatureSet, column: &'static str) -> Result<String> {
    serde_json::to_string(features).map_err(|source| OutputError::Serialize { column, source })
}

pub fn render_row(headers: &[String], row: &PatientFeatures) -> Result<Vec<String>> {
    let mut cells = row.roster_values.clone();
    cells.resize(headers.len(), String::new());
    let derived = [
        (YearStats::AVG_COLUMN, format_number(row.year_stats.avg)),
        (YearStats::MAX_COLUMN, format_number(row.year_stats.max)),
        (
            DIAGNOSIS_FEATURES_COLUMN,
            feature_blob(&row.diagnosis, DIAGNOSIS_FEATURES_COLUMN)?,
        ),
        (
            MEDICATION_FEATURES_COLUMN,
            feature_blob(&row.medication, MEDICATION_FEATURES_COLUMN)?,
        ),
        (
            TRANSCRIPT_FEATURES_COLUMN,
            feature_blob(&row.transcript, TRANSCRIPT_FEATURES_COLUMN)?,
        ),
    ];
    for (column, value) in derived {
        if let Some(idx) = headers.iter().position(|header| header == column) {
            cells[idx] = value;
        }
    }
    Ok(cells)
}

/// Header row plus one rendered row per patient.
pub fn render_table(split: &SplitFeatures) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let headers = table_headers(&split.headers);
    let rows = split
        .rows
        .iter()
        .map(|row| render_row(&headers, row))
        .collect::<Result<Vec<_>>>()?;
    Ok((headers, rows))
}
