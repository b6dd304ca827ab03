// blueprint-core/src/error.rs

use crate::domain::error::ErrorReport;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum BlueprintError {
    // --- CONFIGURATION ERRORS (variants, references, uniqueness) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ErrorReport),

    // --- INFRASTRUCTURE ERRORS (IO, YAML syntax) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl BlueprintError {
    /// The collected configuration errors, when the failure is a rejected document.
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            BlueprintError::Config(report) => Some(report),
            BlueprintError::Infrastructure(_) => None,
        }
    }
}

impl From<std::io::Error> for BlueprintError {
    fn from(err: std::io::Error) -> Self {
        BlueprintError::Infrastructure(InfrastructureError::Io(err))
    }
}
