// Host facts port (OS identity, memory, disk)
use std::path::Path;

use crate::error::Result;

/// System probe port: read-only queries against the local host
///
/// Implementations make no judgement; thresholds are applied by the checks.
pub trait SystemProbe: Send + Sync {
    /// OS distribution identity as `(name, version)`
    ///
    /// # Errors
    /// `AppError::Probe` if the identity cannot be read
    fn os_distro(&self) -> Result<(String, String)>;

    /// Total installed physical memory in bytes
    fn total_memory(&self) -> u64;

    /// Free space in bytes on the filesystem holding `path`
    ///
    /// # Errors
    /// `AppError::Probe` if no filesystem can be resolved for `path`
    fn available_disk_space(&self, path: &Path) -> Result<u64>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;

    /// Fixed-value SystemProbe for testing
    #[derive(Debug, Clone)]
    pub struct FakeSystemProbe {
        pub distro: Option<(String, String)>,
        pub total_memory: u64,
        pub available_disk: Option<u64>,
    }

    impl FakeSystemProbe {
        pub fn new(
            distro_name: &str,
            distro_version: &str,
            total_memory: u64,
            available_disk: u64,
        ) -> Self {
            Self {
                distro: Some((distro_name.to_string(), distro_version.to_string())),
                total_memory,
                available_disk: Some(available_disk),
            }
        }

        /// Probe whose OS identity lookup fails
        pub fn without_distro(mut self) -> Self {
            self.distro = None;
            self
        }

        /// Probe whose disk lookup fails
        pub fn without_disk(mut self) -> Self {
            self.available_disk = None;
            self
        }
    }

    impl SystemProbe for FakeSystemProbe {
        fn os_distro(&self) -> Result<(String, String)> {
            self.distro
                .clone()
                .ok_or_else(|| AppError::Probe("OS identity unavailable".to_string()))
        }

        fn total_memory(&self) -> u64 {
            self.total_memory
        }

        fn available_disk_space(&self, path: &Path) -> Result<u64> {
            self.available_disk.ok_or_else(|| {
                AppError::Probe(format!("no filesystem found for {}", path.display()))
            })
        }
    }
}
