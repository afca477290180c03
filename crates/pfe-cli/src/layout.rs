//! File locations under a data root.

use std::fmt;
use std::path::{Path, PathBuf};

pub const INPUT_DIR_NAME: &str = "input-datasets";
pub const OUTPUT_DIR_NAME: &str = "output-datasets";

pub const DIAGNOSIS_FILE: &str = "SyncDiagnosis.csv";
pub const YEAR_STATS_FILE: &str = "number_of_distinct_predictionyear_with_same_medication.csv";
pub const MEDICATION_FILE: &str = "SyncMedication.csv";
pub const TRANSCRIPT_FILE: &str = "SyncTranscript.csv";

/// A roster partition; each produces its own output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }

    pub fn roster_file(self) -> &'static str {
        match self {
            Split::Train => "SyncPatient_train.csv",
            Split::Test => "SyncPatient_test.csv",
        }
    }

    pub fn output_file(self) -> &'static str {
        match self {
            Split::Train => "extended-patient-train.csv",
            Split::Test => "extended-patient-test.csv",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl DataLayout {
    /// `<root>/input-datasets` and `<root>/output-datasets`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            input_dir: root.join(INPUT_DIR_NAME),
            output_dir: root.join(OUTPUT_DIR_NAME),
        }
    }

    #[must_use]
    pub fn with_input_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.input_dir = dir;
        }
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }

    pub fn diagnoses(&self) -> PathBuf {
        self.input_dir.join(DIAGNOSIS_FILE)
    }

    pub fn year_stats(&self) -> PathBuf {
        self.input_dir.join(YEAR_STATS_FILE)
    }

    pub fn medications(&self) -> PathBuf {
        self.input_dir.join(MEDICATION_FILE)
    }

    pub fn transcripts(&self) -> PathBuf {
        self.input_dir.join(TRANSCRIPT_FILE)
    }

    pub fn roster(&self, split: Split) -> PathBuf {
        self.input_dir.join(split.roster_file())
    }

    pub fn output(&self, split: Split) -> PathBuf {
        self.output_dir.join(split.output_file())
    }
}
