// Validation defaults (No magic values)

/// Minimum total physical memory when not configured (3700 MB)
pub const DEFAULT_MINIMUM_MEMORY_MB: u64 = 3700;

/// Minimum free disk space at the install path when not configured (5 GB)
pub const DEFAULT_MINIMUM_DISK_GB: u64 = 5;

/// Memory that must stay available to the host outside the heap (1024 MB)
///
/// Heuristic: a heap that leaves less than this much memory for the OS and
/// the other services on the host is treated as a misconfiguration.
pub const DEFAULT_HEAP_SIZE_GAP_MB: u64 = 1024;

/// Distributions accepted when not configured (matched case-insensitively)
pub const DEFAULT_SUPPORTED_DISTROS: &[&str] = &["centos", "redhat", "rhel"];

/// Distribution versions accepted when not configured (matched exactly)
pub const DEFAULT_SUPPORTED_VERSIONS: &[&str] = &["7"];

/// Path whose filesystem must hold the installation
pub const DEFAULT_INSTALL_PATH: &str = "/";

/// Upper bound for the resources package reachability request (10s)
pub const DEFAULT_URL_TIMEOUT_SECS: u64 = 10;
