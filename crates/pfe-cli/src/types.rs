use std::path::PathBuf;

use pfe_core::{AggregationStats, SplitCounts};

use crate::layout::Split;

#[derive(Debug)]
pub struct BuildResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub categories: usize,
    pub reference: AggregationStats,
    pub splits: Vec<SplitSummary>,
}

#[derive(Debug)]
pub struct SplitSummary {
    pub split: Split,
    pub counts: SplitCounts,
    pub rows_written: usize,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
}
