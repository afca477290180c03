#![deny(unsafe_code)]

use std::path::PathBuf;

use pfe_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML taxonomy {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON taxonomy {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid taxonomy {path}: {source}")]
    InvalidTaxonomy {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(path: impl Into<PathBuf>, source: ModelError) -> Self {
        Self::InvalidTaxonomy {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StandardsError>;
