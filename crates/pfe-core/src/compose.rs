//! Joins roster entries with the aggregated sources.

use tracing::info;

use pfe_model::{FeatureSet, PatientGuid, Roster, RosterEntry, YearStats};

use crate::error::{CoreError, Result};
use crate::reducers::{
    fill_category_defaults, reduce_diagnoses, reduce_medications, reduce_transcripts,
};
use crate::sources::AggregatedSources;

/// What to do with a roster patient that has no diagnosis group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingDiagnosisPolicy {
    /// Abort the split with [`CoreError::MissingDiagnoses`].
    #[default]
    Fail,
    /// Treat the patient as having an empty diagnosis list.
    Empty,
}

/// One output row before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientFeatures {
    pub guid: PatientGuid,
    /// Roster cells, aligned with the roster headers.
    pub roster_values: Vec<String>,
    pub year_stats: YearStats,
    pub diagnosis: FeatureSet,
    pub medication: FeatureSet,
    pub transcript: FeatureSet,
    /// Set when the diagnosis group was missing and replaced by an empty list.
    pub diagnoses_defaulted: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureComposer<'a> {
    sources: &'a AggregatedSources,
    policy: MissingDiagnosisPolicy,
}

impl<'a> FeatureComposer<'a> {
    pub fn new(sources: &'a AggregatedSources) -> Self {
        Self {
            sources,
            policy: MissingDiagnosisPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MissingDiagnosisPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn compose(&self, entry: &RosterEntry) -> Result<PatientFeatures> {
        let sources = self.sources;
        let (diagnoses, diagnoses_defaulted) = match sources.diagnoses.get(&entry.guid) {
            Some(diagnoses) => (diagnoses.as_slice(), false),
            None => match self.policy {
                MissingDiagnosisPolicy::Fail => {
                    return Err(CoreError::MissingDiagnoses {
                        patient: entry.guid.clone(),
                    });
                }
                MissingDiagnosisPolicy::Empty => (&[][..], true),
            },
        };
        let mut diagnosis = reduce_diagnoses(diagnoses, &sources.taxonomy);
        fill_category_defaults(&mut diagnosis, &sources.taxonomy);
        let year_stats = sources
            .year_stats
            .get(&entry.guid)
            .copied()
            .unwrap_or_default();
        let medication =
            reduce_medications(sources.medications.get(&entry.guid), &sources.vocabulary);
        let transcript = reduce_transcripts(
            sources
                .transcripts
                .get(&entry.guid)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        );
        Ok(PatientFeatures {
            guid: entry.guid.clone(),
            roster_values: entry.values.clone(),
            year_stats,
            diagnosis,
            medication,
            transcript,
            diagnoses_defaulted,
        })
    }
}

/// Composed rows for one roster, in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitFeatures {
    pub headers: Vec<String>,
    pub rows: Vec<PatientFeatures>,
    pub counts: SplitCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitCounts {
    pub patients: usize,
    pub with_year_stats: usize,
    pub with_medications: usize,
    pub with_transcripts: usize,
    pub defaulted_diagnoses: usize,
}

/// Composes every roster entry; the first failure aborts the whole split.
pub fn compose_split(
    roster: &Roster,
    sources: &AggregatedSources,
    policy: MissingDiagnosisPolicy,
) -> Result<SplitFeatures> {
    let composer = FeatureComposer::new(sources).with_policy(policy);
    let mut counts = SplitCounts {
        patients: roster.len(),
        ..SplitCounts::default()
    };
    let mut rows = Vec::with_capacity(roster.len());
    for entry in &roster.entries {
        let row = composer.compose(entry)?;
        if sources.year_stats.contains_key(&entry.guid) {
            counts.with_year_stats += 1;
        }
        if sources.medications.contains_key(&entry.guid) {
            counts.with_medications += 1;
        }
        if sources.transcripts.contains_key(&entry.guid) {
            counts.with_transcripts += 1;
        }
        if row.diagnoses_defaulted {
            counts.defaulted_diagnoses += 1;
        }
        rows.push(row);
    }
    info!(
        patients = counts.patients,
        defaulted_diagnoses = counts.defaulted_diagnoses,
        "split composed"
    );
    Ok(SplitFeatures {
        headers: roster.headers.clone(),
        rows,
        counts,
    })
}
