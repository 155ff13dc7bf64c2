// Domain Layer - Pure validation entities

pub mod constants;
pub mod error;
pub mod properties;
pub mod report;
pub mod size;
pub mod thresholds;

// Re-exports
pub use error::DomainError;
pub use properties::NodeProperties;
pub use report::{CheckKind, Finding, Outcome, ProbeReading, ValidationReport, ERROR_TAG};
pub use size::{format_bytes, parse_size};
pub use thresholds::Thresholds;
