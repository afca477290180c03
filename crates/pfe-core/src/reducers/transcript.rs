use pfe_model::{FeatureSet, TranscriptRecord, VitalSign, truthy_number};

use crate::stats::summarize;

/// `<field>_MIN/AVG/MAX` for each vital sign with at least one usable reading.
///
/// Zero, blank and non-numeric readings are dropped, so a recorded zero is
/// treated the same as a missing reading.
pub fn reduce_transcripts(transcripts: &[TranscriptRecord]) -> FeatureSet {
    let mut features = FeatureSet::new();
    for vital in VitalSign::ALL {
        let values: Vec<f64> = transcripts
            .iter()
            .filter_map(|record| truthy_number(record.value(vital)))
            .collect();
        if let Some(summary) = summarize(&values) {
            summary.write_into(&mut features, vital.field_name());
        }
    }
    features
}
