//! CLI argument definitions for the patient feature extractor.

use std::path::PathBuf;

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pfe_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "pfe",
    version,
    about = "Patient feature extraction - build per-patient feature tables",
    long_about = "Join the relational patient extracts into one feature row per patient.\n\n\
                  Reads diagnoses, medications, visit transcripts and prior-medication-year\n\
                  statistics, then writes an extended roster for the train and test splits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the extended patient tables.
    Build(BuildArgs),

    /// List the diagnosis categories of the active taxonomy.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Data root containing `input-datasets/` and `output-datasets/`.
    #[arg(
        value_name = "DATA_ROOT",
        env = "PFE_DATA_DIR",
        default_value = "."
    )]
    pub data_root: PathBuf,

    /// Directory holding the input extracts (default: <DATA_ROOT>/input-datasets).
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory for the feature tables (default: <DATA_ROOT>/output-datasets).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Diagnosis taxonomy file (TOML, or legacy JSON object).
    #[arg(long = "taxonomy", value_name = "PATH")]
    pub taxonomy: Option<PathBuf>,

    /// Roster split(s) to build.
    #[arg(long = "split", value_enum, default_value = "both")]
    pub split: SplitArg,

    /// Give roster patients without diagnoses an empty diagnosis list.
    ///
    /// By default such a patient aborts the split.
    #[arg(long = "allow-missing-diagnoses")]
    pub allow_missing_diagnoses: bool,

    /// Compose and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Diagnosis taxonomy file (default: embedded ICD-9 chapters).
    #[arg(long = "taxonomy", value_name = "PATH")]
    pub taxonomy: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SplitArg {
    Train,
    Test,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Logging settings from the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter,
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            log_data: self.log_data,
            ..LogConfig::default()
        }
    }
}
