//! Feature aggregation engine.
//!
//! Pipeline stages, leaf first:
//!
//! - [`classify`]: ICD-9 code to taxonomy category
//! - [`aggregate`]: per-patient grouping of the flat extracts
//! - [`vocabulary`]: the global medication name set
//! - [`reducers`]: diagnosis, medication and vital-sign feature sets
//! - [`stats`]: min/avg/max helpers shared by the reducers
//! - [`compose`]: roster join producing one row per patient
//!
//! Reference extracts are aggregated once into [`AggregatedSources`] and shared
//! read-only by every roster split.

pub mod aggregate;
pub mod classify;
pub mod compose;
pub mod error;
pub mod reducers;
pub mod sources;
pub mod stats;
pub mod vocabulary;

pub use aggregate::{
    DiagnosisMap, MedicationMap, TranscriptMap, YearStatMap, group_diagnoses, group_medications,
    group_transcripts, group_year_stats,
};
pub use classify::DiagnosisClassifier;
pub use compose::{
    FeatureComposer, MissingDiagnosisPolicy, PatientFeatures, SplitCounts, SplitFeatures,
    compose_split,
};
pub use error::{CoreError, Result};
pub use reducers::{
    MedicationAccumulator, MedicationTally, reduce_diagnoses, reduce_medications,
    reduce_transcripts,
};
pub use sources::{AggregatedSources, AggregationStats, ReferenceData};
pub use stats::{Summary, summarize};
pub use vocabulary::MedicationVocabulary;
