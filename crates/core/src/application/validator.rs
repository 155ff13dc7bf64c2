// Validation Orchestrator
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::checks::{
    check_heap_size, check_resources_url, check_sufficient_disk_space, check_sufficient_memory,
    check_supported_distro,
};
use super::reporter::{decide, report_outcome};
use crate::domain::{Outcome, ProbeReading, Thresholds, ValidationReport};
use crate::error::Result;
use crate::port::{ExecutionContext, NetworkProbe, SystemProbe};

/// Runs every check once, in fixed order, and decides the outcome
///
/// Owns the single execution context of a run; probes are injected so tests
/// can supply in-memory fakes.
pub struct Validator {
    context: Arc<dyn ExecutionContext>,
    system_probe: Arc<dyn SystemProbe>,
    network_probe: Arc<dyn NetworkProbe>,
}

impl Validator {
    /// Create a new validator
    ///
    /// # Example
    /// ```text
    /// let validator = Validator::new(
    ///     Arc::new(ProcessContext::new(properties)),
    ///     Arc::new(SystemProbeImpl::new()),
    ///     Arc::new(HttpNetworkProbe::new(Duration::from_secs(10))?),
    /// );
    /// let outcome = validator.validate().await?;
    /// ```
    pub fn new(
        context: Arc<dyn ExecutionContext>,
        system_probe: Arc<dyn SystemProbe>,
        network_probe: Arc<dyn NetworkProbe>,
    ) -> Self {
        Self {
            context,
            system_probe,
            network_probe,
        }
    }

    /// Thresholds from the context's properties (hard error if malformed)
    pub fn thresholds(&self) -> Result<Thresholds> {
        Ok(Thresholds::from_properties(self.context.properties())?)
    }

    /// Gather the probe reading for a run; disk space is read at `install_path`
    pub fn read_probes(&self, install_path: &Path) -> Result<ProbeReading> {
        let (distro_name, distro_version) = self.system_probe.os_distro()?;
        let total_memory_bytes = self.system_probe.total_memory();
        let available_disk_bytes = self
            .system_probe
            .available_disk_space(install_path)?;

        let reading = ProbeReading {
            distro_name,
            distro_version,
            total_memory_bytes,
            available_disk_bytes,
        };
        debug!(?reading, "Probe reading collected");
        Ok(reading)
    }

    /// Run all five checks and collect their findings
    ///
    /// Never short-circuits on a finding. Hard errors (malformed thresholds,
    /// probe failures) return `Err` and no partial report.
    pub async fn run(&self, thresholds: &Thresholds) -> Result<ValidationReport> {
        thresholds.validate()?;

        let reading = self.read_probes(&thresholds.install_path)?;
        let mut report = ValidationReport::new();

        report.record(check_supported_distro(
            &reading.distro_name,
            &reading.distro_version,
            &thresholds.supported_distros,
            &thresholds.supported_versions,
        ));
        report.record(check_sufficient_memory(
            reading.total_memory_bytes,
            thresholds.minimum_memory_bytes,
        ));
        report.record(check_sufficient_disk_space(
            reading.available_disk_bytes,
            thresholds.minimum_disk_bytes,
        ));
        report.record(check_heap_size(
            &thresholds.heap_size,
            reading.total_memory_bytes,
            thresholds.heap_gap_bytes,
        )?);
        report.record(
            check_resources_url(thresholds.target_url.as_deref(), self.network_probe.as_ref())
                .await,
        );

        info!(findings = report.len(), "Host validation run completed");
        Ok(report)
    }

    /// Full run: thresholds, checks, decision, and abort on failure
    ///
    /// Returns `AppError::ValidationFailed` after aborting on `Fail`; bypass
    /// yields `Ok(Outcome::PassWithWarnings)`.
    pub async fn validate(&self) -> Result<Outcome> {
        self.validate_with(|_| {}).await
    }

    /// Same as [`validate`](Self::validate), handing the decided outcome to
    /// `on_outcome` before the abort so callers can render it
    ///
    /// `on_outcome` is not called when a hard error ends the run early.
    pub async fn validate_with<F>(&self, on_outcome: F) -> Result<Outcome>
    where
        F: FnOnce(&Outcome),
    {
        let thresholds = self.thresholds()?;
        let report = self.run(&thresholds).await?;
        let outcome = decide(report, thresholds.bypass);
        on_outcome(&outcome);
        report_outcome(&outcome, self.context.as_ref())?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::size::{GIB, MIB};
    use crate::domain::{CheckKind, NodeProperties};
    use crate::error::AppError;
    use crate::port::execution_context::mocks::RecordingContext;
    use crate::port::network_probe::mocks::FakeNetworkProbe;
    use crate::port::system_probe::mocks::FakeSystemProbe;
    use crate::port::UrlStatus;

    const PACKAGE_URL: &str = "http://non-existing-domain.com/package";

    fn properties(bypass: bool) -> NodeProperties {
        NodeProperties {
            ignore_bootstrap_validations: bypass,
            es_heap_size: Some("2g".to_string()),
            manager_resources_package: Some(PACKAGE_URL.to_string()),
            ..Default::default()
        }
    }

    fn healthy_probe() -> FakeSystemProbe {
        FakeSystemProbe::new("redhat", "7", 16 * GIB, 100 * GIB)
    }

    fn starved_probe() -> FakeSystemProbe {
        FakeSystemProbe::new("distro", "1", 1, 1)
    }

    fn setup(
        props: NodeProperties,
        system: FakeSystemProbe,
        network: FakeNetworkProbe,
    ) -> (Validator, Arc<RecordingContext>, Arc<FakeNetworkProbe>) {
        let context = Arc::new(RecordingContext::new(props));
        let network = Arc::new(network);
        let validator = Validator::new(context.clone(), Arc::new(system), network.clone());
        (validator, context, network)
    }

    #[tokio::test]
    async fn test_successful_validation() {
        let (validator, context, _) =
            setup(properties(false), healthy_probe(), FakeNetworkProbe::reachable());

        let outcome = validator.validate().await.unwrap();

        assert_eq!(outcome, Outcome::Pass);
        assert!(context.aborts().is_empty());
    }

    #[tokio::test]
    async fn test_every_check_reports_in_order() {
        let (validator, _, _) = setup(
            properties(false),
            starved_probe(),
            FakeNetworkProbe::new(UrlStatus::HttpStatus(404)),
        );
        let thresholds = validator.thresholds().unwrap();

        let report = validator.run(&thresholds).await.unwrap();

        let checks: Vec<CheckKind> = report.findings().iter().map(|f| f.check).collect();
        assert_eq!(checks, CheckKind::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_failed_validation_aborts_with_all_findings() {
        let (validator, context, _) = setup(
            properties(false),
            starved_probe(),
            FakeNetworkProbe::new(UrlStatus::HttpStatus(404)),
        );

        let err = validator.validate().await.unwrap_err();

        let aborts = context.aborts();
        assert_eq!(aborts.len(), 1);
        for expected in [
            "Validation Error: The manager requires either",
            "Validation Error: The provided host does not have enough memory",
            "Validation Error: The provided host does not have enough disk space",
            "Validation Error: The heap size provided for Elasticsearch",
            "Validation Error: The resources package http://non-existing-domain.com/package",
        ] {
            assert!(aborts[0].contains(expected), "missing {:?}", expected);
        }
        assert_eq!(aborts[0].lines().count(), 5);
        assert!(matches!(err, AppError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_outcome_hook_sees_failure_before_abort() {
        let (validator, context, _) = setup(
            properties(false),
            starved_probe(),
            FakeNetworkProbe::new(UrlStatus::HttpStatus(404)),
        );
        let mut seen = Vec::new();

        let err = validator
            .validate_with(|outcome| {
                seen.push((outcome.clone(), context.aborts().len()));
            })
            .await
            .unwrap_err();

        assert_eq!(seen.len(), 1);
        match &seen[0] {
            (Outcome::Fail(report), aborts_so_far) => {
                assert_eq!(report.len(), 5);
                assert_eq!(*aborts_so_far, 0);
            }
            other => panic!("expected Fail, got {:?}", other),
        }
        assert_eq!(context.aborts().len(), 1);
        assert!(matches!(err, AppError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_outcome_hook_skipped_on_hard_error() {
        let props = NodeProperties {
            es_heap_size: None,
            ..properties(false)
        };
        let (validator, _, _) = setup(props, healthy_probe(), FakeNetworkProbe::reachable());
        let mut calls = 0;

        let result = validator.validate_with(|_| calls += 1).await;

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_failed_yet_ignored_validation() {
        let (validator, context, _) = setup(
            properties(true),
            starved_probe(),
            FakeNetworkProbe::new(UrlStatus::HttpStatus(404)),
        );

        let outcome = validator.validate().await.unwrap();

        match outcome {
            Outcome::PassWithWarnings(report) => assert_eq!(report.len(), 5),
            other => panic!("expected PassWithWarnings, got {:?}", other),
        }
        assert!(context.aborts().is_empty());
    }

    #[tokio::test]
    async fn test_missing_url_skips_network_probe() {
        let props = NodeProperties {
            manager_resources_package: None,
            ..properties(false)
        };
        let (validator, _, network) =
            setup(props, healthy_probe(), FakeNetworkProbe::reachable());

        validator.validate().await.unwrap();
        assert!(network.requests().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_heap_is_fatal_even_with_bypass() {
        let props = NodeProperties {
            es_heap_size: Some("2 gigs".to_string()),
            ..properties(true)
        };
        let (validator, context, network) =
            setup(props, starved_probe(), FakeNetworkProbe::reachable());

        let err = validator.validate().await.unwrap_err();

        assert!(matches!(err, AppError::Domain(_)));
        assert!(context.aborts().is_empty());
        assert!(network.requests().is_empty());
    }

    #[tokio::test]
    async fn test_run_rejects_malformed_thresholds_before_probing() {
        let (validator, _, network) =
            setup(properties(false), healthy_probe(), FakeNetworkProbe::reachable());
        let mut thresholds = validator.thresholds().unwrap();
        thresholds.heap_size = "512q".to_string();

        assert!(validator.run(&thresholds).await.is_err());
        assert!(network.requests().is_empty());
    }

    #[tokio::test]
    async fn test_probe_failure_is_fatal() {
        let (validator, context, _) = setup(
            properties(true),
            healthy_probe().without_disk(),
            FakeNetworkProbe::reachable(),
        );

        let err = validator.validate().await.unwrap_err();

        assert!(matches!(err, AppError::Probe(_)));
        assert!(context.aborts().is_empty());
    }

    #[tokio::test]
    async fn test_heap_gap_uses_configured_margin() {
        let props = NodeProperties {
            es_heap_size: Some("15g".to_string()),
            allowed_heap_size_gap_in_mb: 2048,
            ..properties(false)
        };
        let (validator, _, _) = setup(props, healthy_probe(), FakeNetworkProbe::reachable());
        let thresholds = validator.thresholds().unwrap();
        assert_eq!(thresholds.heap_gap_bytes, 2048 * MIB);

        let report = validator.run(&thresholds).await.unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.has_finding(CheckKind::HeapSize));
    }
}
