// Thresholds: the immutable inputs of one validation run

use serde::Serialize;
use std::path::PathBuf;

use super::error::{DomainError, Result};
use super::properties::NodeProperties;
use super::size::{parse_size, GIB, MIB};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub minimum_memory_bytes: u64,
    pub minimum_disk_bytes: u64,
    /// Resources package URL; `None` skips the reachability check
    pub target_url: Option<String>,
    /// Raw size string, e.g. "2g"
    pub heap_size: String,
    /// Memory that must remain outside the heap
    pub heap_gap_bytes: u64,
    pub supported_distros: Vec<String>,
    pub supported_versions: Vec<String>,
    pub install_path: PathBuf,
    pub bypass: bool,
}

impl Thresholds {
    /// Build thresholds from node properties
    ///
    /// Fails fast on missing or malformed required properties; these are
    /// defects in the install configuration, never findings.
    pub fn from_properties(props: &NodeProperties) -> Result<Self> {
        let heap_size = props
            .es_heap_size
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or(DomainError::MissingProperty("es_heap_size"))?;

        let thresholds = Self {
            minimum_memory_bytes: props
                .minimum_required_total_physical_memory_in_mb
                .saturating_mul(MIB),
            minimum_disk_bytes: props
                .minimum_required_available_disk_space_in_gb
                .saturating_mul(GIB),
            target_url: props
                .manager_resources_package
                .clone()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            heap_size,
            heap_gap_bytes: props.allowed_heap_size_gap_in_mb.saturating_mul(MIB),
            supported_distros: props.supported_distros.clone(),
            supported_versions: props.supported_distro_versions.clone(),
            install_path: props.install_path.clone(),
            bypass: props.ignore_bootstrap_validations,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reject configuration that would make later checks meaningless
    pub fn validate(&self) -> Result<()> {
        self.heap_size_bytes().map(|_| ())
    }

    pub fn heap_size_bytes(&self) -> Result<u64> {
        parse_size(&self.heap_size)
    }
}
