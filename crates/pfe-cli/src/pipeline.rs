//! Build pipeline: load the extracts once, then compose and write each split.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use pfe_core::{AggregatedSources, MissingDiagnosisPolicy, ReferenceData, compose_split};
use pfe_ingest::{load_diagnoses, load_medications, load_transcripts, load_year_stats, read_roster};
use pfe_model::Taxonomy;
use pfe_output::write_feature_file;
use pfe_standards::{load_default_taxonomy, load_taxonomy};

use crate::layout::{DataLayout, Split};
use crate::logging::redact_value;
use crate::types::{BuildResult, SplitSummary};

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub layout: DataLayout,
    /// Taxonomy file; the embedded ICD-9 chapters when `None`.
    pub taxonomy: Option<PathBuf>,
    pub splits: Vec<Split>,
    pub policy: MissingDiagnosisPolicy,
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new(layout: DataLayout) -> Self {
        Self {
            layout,
            taxonomy: None,
            splits: Split::ALL.to_vec(),
            policy: MissingDiagnosisPolicy::default(),
            dry_run: false,
        }
    }
}

pub fn resolve_taxonomy(path: Option<&Path>) -> Result<Taxonomy> {
    match path {
        Some(path) => {
            load_taxonomy(path).with_context(|| format!("load taxonomy {}", path.display()))
        }
        None => load_default_taxonomy().context("load embedded taxonomy"),
    }
}

/// Loads the four reference extracts shared by every split.
pub fn load_reference(layout: &DataLayout) -> Result<ReferenceData> {
    let diagnoses = load_diagnoses(&layout.diagnoses()).context("load diagnoses")?;
    let year_stats = load_year_stats(&layout.year_stats()).context("load year statistics")?;
    let medications = load_medications(&layout.medications()).context("load medications")?;
    let transcripts = load_transcripts(&layout.transcripts()).context("load transcripts")?;
    Ok(ReferenceData {
        diagnoses,
        medications,
        transcripts,
        year_stats,
    })
}

/// Composes one roster split and writes its table unless `dry_run` is set.
pub fn build_split(
    layout: &DataLayout,
    split: Split,
    sources: &AggregatedSources,
    policy: MissingDiagnosisPolicy,
    dry_run: bool,
) -> Result<SplitSummary> {
    let roster_path = layout.roster(split);
    let roster = read_roster(&roster_path)
        .with_context(|| format!("load {split} roster {}", roster_path.display()))?;
    let features = compose_split(&roster, sources, policy)
        .with_context(|| format!("compose {split} split"))?;
    for row in features.rows.iter().filter(|row| row.diagnoses_defaulted) {
        debug!(
            patient = %redact_value(row.guid.as_str()),
            "no diagnoses, using empty list"
        );
    }

    if dry_run {
        info!(rows = features.rows.len(), "dry run, output not written");
        return Ok(SplitSummary {
            split,
            counts: features.counts,
            rows_written: 0,
            output: None,
        });
    }

    let output_path = layout.output(split);
    let written = write_feature_file(&output_path, &features)
        .with_context(|| format!("write {split} features {}", output_path.display()))?;
    Ok(SplitSummary {
        split,
        counts: features.counts,
        rows_written: features.rows.len(),
        output: Some(written),
    })
}

pub fn run_build(options: &BuildOptions) -> Result<BuildResult> {
    let taxonomy = resolve_taxonomy(options.taxonomy.as_deref())?;
    let categories = taxonomy.len();

    let ingest_span = info_span!(
        "ingest",
        input_dir = %options.layout.input_dir.display()
    );
    let ingest_start = Instant::now();
    let reference = ingest_span.in_scope(|| load_reference(&options.layout))?;
    info!(
        diagnoses = reference.diagnoses.len(),
        medications = reference.medications.len(),
        transcripts = reference.transcripts.len(),
        year_stats = reference.year_stats.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let sources = AggregatedSources::build(taxonomy, &reference);
    let stats = sources.stats();

    let mut splits = Vec::with_capacity(options.splits.len());
    for &split in &options.splits {
        let split_span = info_span!("split", split = %split);
        let _split_guard = split_span.enter();
        let split_start = Instant::now();
        let summary = build_split(
            &options.layout,
            split,
            &sources,
            options.policy,
            options.dry_run,
        )?;
        info!(
            rows = summary.rows_written,
            duration_ms = split_start.elapsed().as_millis(),
            "split complete"
        );
        splits.push(summary);
    }

    Ok(BuildResult {
        input_dir: options.layout.input_dir.clone(),
        output_dir: options.layout.output_dir.clone(),
        dry_run: options.dry_run,
        categories,
        reference: stats,
        splits,
    })
}
