// Outcome Reporter - pass/fail/bypass decision and abort hand-off
use tracing::{error, info, warn};

use crate::domain::{Outcome, ValidationReport};
use crate::error::{AppError, Result};
use crate::port::ExecutionContext;

/// Decide the terminal outcome of a run
pub fn decide(report: ValidationReport, bypass: bool) -> Outcome {
    if report.is_empty() {
        Outcome::Pass
    } else if bypass {
        Outcome::PassWithWarnings(report)
    } else {
        Outcome::Fail(report)
    }
}

/// Surface an outcome through the execution context
///
/// `Fail` calls `abort_operation` exactly once with every finding, one
/// tagged line each, and returns `AppError::ValidationFailed` carrying the
/// same message. Bypassed findings are only logged.
pub fn report_outcome(outcome: &Outcome, context: &dyn ExecutionContext) -> Result<()> {
    match outcome {
        Outcome::Pass => {
            info!("All host validations passed");
            Ok(())
        }
        Outcome::PassWithWarnings(report) => {
            for finding in report.findings() {
                warn!(check = %finding.check, "{}", finding);
            }
            warn!(
                findings = report.len(),
                "Host validations failed but are being ignored (bypass mode)"
            );
            Ok(())
        }
        Outcome::Fail(report) => {
            let message = report.to_message();
            error!(findings = report.len(), "Host validations failed, aborting");
            context.abort_operation(&message);
            Err(AppError::ValidationFailed(message))
        }
    }
}
