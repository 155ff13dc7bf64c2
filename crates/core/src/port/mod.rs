// Port Layer - Interfaces for the execution environment

pub mod execution_context;
pub mod network_probe;
pub mod system_probe;

// Re-exports
pub use execution_context::ExecutionContext;
pub use network_probe::{NetworkProbe, UrlStatus};
pub use system_probe::SystemProbe;
