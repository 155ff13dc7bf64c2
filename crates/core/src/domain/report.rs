// Findings, reports and outcomes of a validation run

use serde::Serialize;
use std::fmt;

/// Prefix of every operator-facing finding line
pub const ERROR_TAG: &str = "Validation Error: ";

/// The five checks, in the order they run and appear in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    SupportedDistro,
    Memory,
    DiskSpace,
    HeapSize,
    ResourcesUrl,
}

impl CheckKind {
    pub const ALL: [CheckKind; 5] = [
        CheckKind::SupportedDistro,
        CheckKind::Memory,
        CheckKind::DiskSpace,
        CheckKind::HeapSize,
        CheckKind::ResourcesUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::SupportedDistro => "supported_distro",
            CheckKind::Memory => "memory",
            CheckKind::DiskSpace => "disk_space",
            CheckKind::HeapSize => "heap_size",
            CheckKind::ResourcesUrl => "resources_url",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Facts gathered once at the start of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReading {
    pub distro_name: String,
    pub distro_version: String,
    pub total_memory_bytes: u64,
    pub available_disk_bytes: u64,
}

/// A single violated check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub check: CheckKind,
    pub message: String,
}

impl Finding {
    pub fn new(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ERROR_TAG, self.message)
    }
}

/// Ordered findings of one run
///
/// Invariant: at most one finding per `CheckKind`, in `CheckKind::ALL` order
/// (the orchestrator pushes in that order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check result; `None` means the check passed
    pub fn record(&mut self, result: Option<Finding>) {
        if let Some(finding) = result {
            debug_assert!(
                !self.has_finding(finding.check),
                "duplicate finding for {}",
                finding.check
            );
            self.findings.push(finding);
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn has_finding(&self, check: CheckKind) -> bool {
        self.findings.iter().any(|f| f.check == check)
    }

    /// One tagged line per finding, newline-separated
    pub fn to_message(&self) -> String {
        self.findings
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Terminal result of a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "report", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    /// Findings exist but bypass is active; callers must not treat this as failure
    PassWithWarnings(ValidationReport),
    Fail(ValidationReport),
}

impl Outcome {
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Outcome::Pass => None,
            Outcome::PassWithWarnings(report) | Outcome::Fail(report) => Some(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display_is_tagged() {
        let finding = Finding::new(CheckKind::Memory, "not enough");
        assert_eq!(finding.to_string(), "Validation Error: not enough");
    }

    #[test]
    fn test_report_skips_passed_checks() {
        let mut report = ValidationReport::new();
        report.record(None);
        report.record(Some(Finding::new(CheckKind::DiskSpace, "disk")));
        report.record(None);

        assert_eq!(report.len(), 1);
        assert!(report.has_finding(CheckKind::DiskSpace));
        assert!(!report.has_finding(CheckKind::Memory));
    }

    #[test]
    fn test_report_message_one_line_per_finding() {
        let mut report = ValidationReport::new();
        report.record(Some(Finding::new(CheckKind::Memory, "a")));
        report.record(Some(Finding::new(CheckKind::HeapSize, "b")));

        assert_eq!(
            report.to_message(),
            "Validation Error: a\nValidation Error: b"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(Outcome::Pass).unwrap();
        assert_eq!(json["outcome"], "pass");

        let mut report = ValidationReport::new();
        report.record(Some(Finding::new(CheckKind::ResourcesUrl, "down")));
        let json = serde_json::to_value(Outcome::Fail(report)).unwrap();
        assert_eq!(json["outcome"], "fail");
        assert_eq!(json["report"]["findings"][0]["check"], "resources_url");
    }
}
