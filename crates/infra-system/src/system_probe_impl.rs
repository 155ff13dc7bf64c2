// System probe implementation
// reason: sysinfo for cross-platform host facts
use std::path::{Path, PathBuf};
use sysinfo::{Disks, System};
use tracing::debug;

use preflight_core::error::{AppError, Result};
use preflight_core::port::SystemProbe;

/// System probe implementation using sysinfo
///
/// Stateless: every call queries the host afresh.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbeImpl;

impl SystemProbeImpl {
    /// Create a new system probe
    ///
    /// # Example
    /// ```ignore
    /// let probe = SystemProbeImpl::new();
    /// let (name, version) = probe.os_distro()?;
    /// ```
    pub fn new() -> Self {
        Self
    }
}

/// Major component of an os-release version ("7.9" -> "7", "22.04" -> "22")
fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version).trim()
}

/// Closest existing ancestor of `path` (the install dir may not exist yet)
fn existing_ancestor(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|candidate| candidate.exists())
        .and_then(|candidate| candidate.canonicalize().ok())
}

/// Pick the mount with the longest mount-point prefix of `path`
fn select_mount<'a, I>(path: &Path, mounts: I) -> Option<u64>
where
    I: IntoIterator<Item = (&'a Path, u64)>,
{
    mounts
        .into_iter()
        .filter(|(mount_point, _)| path.starts_with(mount_point))
        .max_by_key(|(mount_point, _)| mount_point.components().count())
        .map(|(_, available)| available)
}

impl SystemProbe for SystemProbeImpl {
    fn os_distro(&self) -> Result<(String, String)> {
        let name = System::distribution_id().trim().to_lowercase();
        if name.is_empty() {
            return Err(AppError::Probe(
                "unable to determine OS distribution".to_string(),
            ));
        }

        let version = System::os_version()
            .ok_or_else(|| AppError::Probe("unable to determine OS version".to_string()))?;
        let version = major_version(&version).to_string();

        debug!(distro = %name, version = %version, "OS distribution detected");
        Ok((name, version))
    }

    fn total_memory(&self) -> u64 {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        debug!(total_memory_bytes = %total, "Physical memory detected");
        total
    }

    fn available_disk_space(&self, path: &Path) -> Result<u64> {
        let resolved = existing_ancestor(path).ok_or_else(|| {
            AppError::Probe(format!("cannot resolve path {}", path.display()))
        })?;

        let disks = Disks::new_with_refreshed_list();
        let available = select_mount(
            &resolved,
            disks
                .iter()
                .map(|disk| (disk.mount_point(), disk.available_space())),
        )
        .ok_or_else(|| {
            AppError::Probe(format!("no filesystem found for {}", resolved.display()))
        })?;

        debug!(
            path = %resolved.display(),
            available_disk_bytes = %available,
            "Disk space collected"
        );
        Ok(available)
    }
}
