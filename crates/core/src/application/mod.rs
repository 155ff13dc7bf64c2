// Application Layer - Checks, orchestration and outcome reporting

pub mod checks;
pub mod reporter;
pub mod validator;

// Re-exports
pub use reporter::{decide, report_outcome};
pub use validator::Validator;
