//! Data model for patient feature extraction.
//!
//! - [`records`]: rows of the diagnosis, medication, transcript, year-statistics
//!   and roster extracts
//! - [`taxonomy`]: ordered diagnosis category taxonomy
//! - [`feature`]: feature values and feature dictionaries
//! - [`numeric`]: lenient numeric readings of extract cells

pub mod error;
pub mod feature;
pub mod ids;
pub mod numeric;
pub mod records;
pub mod taxonomy;

pub use error::{ModelError, Result};
pub use feature::{FeatureSet, FeatureValue, NULL_SENTINEL};
pub use ids::{CategoryId, PatientGuid};
pub use numeric::{format_number, leading_number, parse_number, truthy_number};
pub use records::{
    ClassifiedDiagnosis, DiagnosisRecord, MedicationRecord, Roster, RosterEntry,
    TranscriptRecord, VitalSign, YearStatRecord, YearStats,
};
pub use taxonomy::{CATEGORY_COUNT_PREFIX, DiagnosisCategory, Taxonomy};
