//! Operator-facing rendering of readings and outcomes

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde_json::json;
use tabled::{Table, Tabled};

use preflight_core::domain::{format_bytes, CheckKind, Outcome, ProbeReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Tabled)]
struct CheckRow {
    check: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Tabled)]
struct FactRow {
    fact: &'static str,
    value: String,
}

/// One row per check; passed checks have no finding in the report
fn check_rows(outcome: &Outcome) -> Vec<CheckRow> {
    let failed_status = match outcome {
        Outcome::PassWithWarnings(_) => "WARN",
        _ => "FAIL",
    };

    CheckKind::ALL
        .iter()
        .map(|kind| {
            let finding = outcome
                .report()
                .and_then(|report| report.findings().iter().find(|f| f.check == *kind));
            match finding {
                Some(finding) => CheckRow {
                    check: kind.as_str(),
                    status: failed_status,
                    detail: finding.message.clone(),
                },
                None => CheckRow {
                    check: kind.as_str(),
                    status: "PASS",
                    detail: String::new(),
                },
            }
        })
        .collect()
}

pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => {
            let table = Table::new(check_rows(outcome)).to_string();
            let summary = match outcome {
                Outcome::Pass => "✓ Host is ready".green().bold(),
                Outcome::PassWithWarnings(_) => {
                    "⚠ Host validation failed (ignored: bypass mode)".yellow().bold()
                }
                Outcome::Fail(_) => "✗ Host is not ready".red().bold(),
            };
            Ok(format!("{}\n\n{}", table, summary))
        }
    }
}

pub fn render_reading(reading: &ProbeReading, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "reading": reading }))?),
        OutputFormat::Text => {
            let rows = vec![
                FactRow {
                    fact: "distribution",
                    value: format!("{} {}", reading.distro_name, reading.distro_version),
                },
                FactRow {
                    fact: "total memory",
                    value: format_bytes(reading.total_memory_bytes),
                },
                FactRow {
                    fact: "available disk",
                    value: format_bytes(reading.available_disk_bytes),
                },
            ];
            Ok(format!(
                "{}\n\n{}",
                "Host Facts".cyan().bold(),
                Table::new(rows)
            ))
        }
    }
}
