use thiserror::Error;

use pfe_model::PatientGuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no diagnosis group for roster patient {patient}")]
    MissingDiagnoses { patient: PatientGuid },
}

pub type Result<T> = std::result::Result<T, CoreError>;
