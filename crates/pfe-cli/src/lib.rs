//! CLI library components for patient feature extraction.

pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod types;
