//! Embedded configuration data.
//!
//! The default taxonomy is compiled in with `include_str!()` so a run needs no
//! configuration file.

/// ICD-9-CM chapter taxonomy (TOML).
pub const ICD9_CATEGORIES: &str = include_str!("../data/icd9_categories.toml");

/// Origin reported in errors and logs for the embedded taxonomy.
pub const EMBEDDED_ORIGIN: &str = "<embedded>/icd9_categories.toml";
