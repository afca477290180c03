//! Reference extracts and their per-patient aggregation.

use tracing::{debug, info};

use pfe_model::{DiagnosisRecord, MedicationRecord, Taxonomy, TranscriptRecord, YearStatRecord};

use crate::aggregate::{
    DiagnosisMap, MedicationMap, TranscriptMap, YearStatMap, group_diagnoses, group_medications,
    group_transcripts, group_year_stats,
};
use crate::classify::DiagnosisClassifier;
use crate::vocabulary::MedicationVocabulary;

/// The four extracts shared by every roster split, loaded once.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub diagnoses: Vec<DiagnosisRecord>,
    pub medications: Vec<MedicationRecord>,
    pub transcripts: Vec<TranscriptRecord>,
    pub year_stats: Vec<YearStatRecord>,
}

/// Read-only per-patient views of [`ReferenceData`], reused across splits.
#[derive(Debug, Clone)]
pub struct AggregatedSources {
    pub taxonomy: Taxonomy,
    pub vocabulary: MedicationVocabulary,
    pub diagnoses: DiagnosisMap,
    pub medications: MedicationMap,
    pub transcripts: TranscriptMap,
    pub year_stats: YearStatMap,
    stats: AggregationStats,
}

/// Counts reported after aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    pub diagnosis_records: usize,
    pub unclassified_diagnoses: usize,
    pub diagnosis_patients: usize,
    pub medication_records: usize,
    pub medication_patients: usize,
    pub vocabulary_size: usize,
    pub transcript_records: usize,
    pub transcript_patients: usize,
    pub year_stat_patients: usize,
}

impl AggregatedSources {
    pub fn build(taxonomy: Taxonomy, reference: &ReferenceData) -> Self {
        // The vocabulary must be complete before any medication features are finalized.
        let vocabulary = MedicationVocabulary::from_records(&reference.medications);
        let classifier = DiagnosisClassifier::new(&taxonomy);
        let diagnoses = group_diagnoses(&reference.diagnoses, &classifier);
        let medications = group_medications(&reference.medications);
        let transcripts = group_transcripts(&reference.transcripts);
        let year_stats = group_year_stats(&reference.year_stats);
        let stats = AggregationStats {
            diagnosis_records: reference.diagnoses.len(),
            unclassified_diagnoses: diagnoses
                .values()
                .flatten()
                .filter(|diagnosis| diagnosis.category.is_none())
                .count(),
            diagnosis_patients: diagnoses.len(),
            medication_records: reference.medications.len(),
            medication_patients: medications.len(),
            vocabulary_size: vocabulary.len(),
            transcript_records: reference.transcripts.len(),
            transcript_patients: transcripts.len(),
            year_stat_patients: year_stats.len(),
        };
        info!(
            diagnosis_patients = stats.diagnosis_patients,
            medication_patients = stats.medication_patients,
            transcript_patients = stats.transcript_patients,
            year_stat_patients = stats.year_stat_patients,
            vocabulary_size = stats.vocabulary_size,
            "reference data aggregated"
        );
        debug!(
            diagnosis_records = stats.diagnosis_records,
            unclassified_diagnoses = stats.unclassified_diagnoses,
            medication_records = stats.medication_records,
            transcript_records = stats.transcript_records,
            "aggregation detail"
        );
        Self {
            taxonomy,
            vocabulary,
            diagnoses,
            medications,
            transcripts,
            year_stats,
            stats,
        }
    }

    /// Counts gathered by [`AggregatedSources::build`].
    pub fn stats(&self) -> AggregationStats {
        self.stats
    }
}
