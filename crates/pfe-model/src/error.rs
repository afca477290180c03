use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid patient identifier: {0:?}")]
    InvalidPatientGuid(String),
    #[error("invalid range for category {name}: {start} > {end}")]
    InvalidRange { name: String, start: i64, end: i64 },
    #[error("taxonomy must declare at least one category")]
    EmptyTaxonomy,
}

pub type Result<T> = std::result::Result<T, ModelError>;
