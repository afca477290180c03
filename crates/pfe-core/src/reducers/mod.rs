//! Per-patient feature reducers.
//!
//! Each reducer turns one patient's grouped records into a [`FeatureSet`]
//! whose keys depend only on the taxonomy, the medication vocabulary and the
//! fixed vital-sign list.
//!
//! [`FeatureSet`]: pfe_model::FeatureSet

pub mod diagnosis;
pub mod medication;
pub mod transcript;

pub use diagnosis::{CODE_FLAG_PREFIX, fill_category_defaults, reduce_diagnoses};
pub use medication::{MedicationAccumulator, MedicationTally, reduce_medications};
pub use transcript::reduce_transcripts;
