//! Configuration standards for patient feature extraction.
//!
//! Currently this is the diagnosis category taxonomy: an embedded ICD-9
//! chapter default plus loaders for user-supplied TOML or legacy JSON files.

#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
pub mod taxonomy;

pub use crate::error::{Result, StandardsError};
pub use crate::taxonomy::{
    load_default_taxonomy, load_taxonomy, parse_taxonomy_json, parse_taxonomy_toml,
};
