// Preflight Infrastructure - System Adapters
// Implements: SystemProbe, NetworkProbe

pub mod http_probe;
pub mod system_probe_impl;

pub use http_probe::HttpNetworkProbe;
pub use system_probe_impl::SystemProbeImpl;
