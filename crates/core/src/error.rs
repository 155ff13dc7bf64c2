// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Everything here is a hard error: it aborts the run without a report.
/// Soft findings never travel through this type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Probe error: {0}")]
    Probe(String),

    /// Aggregated findings of a failed, non-bypassed run
    #[error("{0}")]
    ValidationFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
