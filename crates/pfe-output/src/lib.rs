//! Feature table output.
//!
//! Composed splits are written as CSV: roster columns first, then the
//! year-statistics columns, then one JSON object column per reducer
//! (`diagnosis_features`, `medication_features`, `transcript_features`).
//! Reducer keys are sorted, so identical input gives byte-identical files.

mod error;
mod table;
mod writer;

pub use error::{OutputError, Result};
pub use table::{
    DERIVED_COLUMNS, DIAGNOSIS_FEATURES_COLUMN, MEDICATION_FEATURES_COLUMN,
    TRANSCRIPT_FEATURES_COLUMN, feature_blob, render_row, render_table, table_headers,
};
pub use writer::{write_feature_csv, write_feature_file};
