// Check functions
// Each takes already-gathered facts and returns a finding iff its condition is violated.
use tracing::{debug, info};

use crate::domain::error::Result;
use crate::domain::{format_bytes, parse_size, CheckKind, Finding};
use crate::port::{NetworkProbe, UrlStatus};

/// Distribution name must be allowed (case-insensitive) and version must be
/// allowed (exact string: "7.1" does not satisfy "7")
pub fn check_supported_distro(
    distro_name: &str,
    distro_version: &str,
    allowed_names: &[String],
    allowed_versions: &[String],
) -> Option<Finding> {
    info!("Validating supported OS distribution...");

    let name_ok = allowed_names
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(distro_name));
    let version_ok = allowed_versions.iter().any(|allowed| allowed == distro_version);

    if name_ok && version_ok {
        return None;
    }

    let combinations = allowed_names
        .iter()
        .flat_map(|name| {
            allowed_versions
                .iter()
                .map(move |version| format!("{} {}", name, version))
        })
        .collect::<Vec<_>>()
        .join(" or ");

    Some(Finding::new(
        CheckKind::SupportedDistro,
        format!(
            "The manager requires either {} (current distribution: {} {})",
            combinations, distro_name, distro_version
        ),
    ))
}

pub fn check_sufficient_memory(total_memory_bytes: u64, minimum_bytes: u64) -> Option<Finding> {
    info!("Validating physical memory...");

    if total_memory_bytes >= minimum_bytes {
        return None;
    }

    Some(Finding::new(
        CheckKind::Memory,
        format!(
            "The provided host does not have enough memory \
             (Current: {}, Required: {}, Shortfall: {})",
            format_bytes(total_memory_bytes),
            format_bytes(minimum_bytes),
            format_bytes(minimum_bytes - total_memory_bytes)
        ),
    ))
}

pub fn check_sufficient_disk_space(available_bytes: u64, minimum_bytes: u64) -> Option<Finding> {
    info!("Validating available disk space...");

    if available_bytes >= minimum_bytes {
        return None;
    }

    Some(Finding::new(
        CheckKind::DiskSpace,
        format!(
            "The provided host does not have enough disk space \
             (Current: {}, Required: {}, Shortfall: {})",
            format_bytes(available_bytes),
            format_bytes(minimum_bytes),
            format_bytes(minimum_bytes - available_bytes)
        ),
    ))
}

/// Heap must fit in memory and leave at least `heap_gap_bytes` for the host
///
/// # Errors
/// A malformed `heap_size` is a configuration defect, returned as `Err`
/// rather than a finding.
pub fn check_heap_size(
    heap_size: &str,
    total_memory_bytes: u64,
    heap_gap_bytes: u64,
) -> Result<Option<Finding>> {
    info!("Validating heap size allocation...");

    let heap_bytes = parse_size(heap_size)?;
    debug!(
        heap_bytes = %heap_bytes,
        total_memory_bytes = %total_memory_bytes,
        heap_gap_bytes = %heap_gap_bytes,
        "Heap size parsed"
    );

    if heap_bytes > total_memory_bytes {
        return Ok(Some(Finding::new(
            CheckKind::HeapSize,
            format!(
                "The heap size provided for Elasticsearch ({}) exceeds \
                 the total memory of the host ({})",
                format_bytes(heap_bytes),
                format_bytes(total_memory_bytes)
            ),
        )));
    }

    let remaining = total_memory_bytes - heap_bytes;
    if remaining < heap_gap_bytes {
        return Ok(Some(Finding::new(
            CheckKind::HeapSize,
            format!(
                "The heap size provided for Elasticsearch ({}) must be smaller than \
                 the total memory of the host ({}) minus the allowed gap ({})",
                format_bytes(heap_bytes),
                format_bytes(total_memory_bytes),
                format_bytes(heap_gap_bytes)
            ),
        )));
    }

    Ok(None)
}

/// Reachability of the resources package; skipped when no URL is configured
pub async fn check_resources_url(url: Option<&str>, probe: &dyn NetworkProbe) -> Option<Finding> {
    let url = match url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => {
            debug!("No resources package configured, skipping reachability check");
            return None;
        }
    };

    info!(url = %url, "Validating resources package URL...");

    match probe.check_url(url).await {
        UrlStatus::Reachable => None,
        status => Some(Finding::new(
            CheckKind::ResourcesUrl,
            format!(
                "The resources package {} is not accessible ({})",
                url, status
            ),
        )),
    }
}
