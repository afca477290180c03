//! Extract ingestion for patient feature extraction.
//!
//! Loads the relational CSV extracts into typed records from `pfe-model`:
//!
//! - **Reference extracts**: diagnoses, medications, visit transcripts and
//!   prior-medication-year statistics
//! - **Rosters**: the per-split patient lists, kept column-for-column
//!
//! Loading is all-or-nothing: a missing file or malformed row is an error.

mod csv_table;
mod error;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{CsvTable, read_csv_table};

// === Extract Loaders ===
pub use records::{
    PATIENT_GUID_COLUMN, TRANSCRIPT_GUID_COLUMN, load_diagnoses, load_medications,
    load_transcripts, load_year_stats, read_records, read_roster,
};
