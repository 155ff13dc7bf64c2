//! Process-level execution context
//!
//! Aborting prints the aggregated findings to stderr and records them; the
//! binary turns a recorded abort into a non-zero exit status.

use colored::Colorize;
use std::sync::Mutex;
use tracing::error;

use preflight_core::domain::NodeProperties;
use preflight_core::port::ExecutionContext;

pub struct ProcessContext {
    properties: NodeProperties,
    abort_message: Mutex<Option<String>>,
}

impl ProcessContext {
    pub fn new(properties: NodeProperties) -> Self {
        Self {
            properties,
            abort_message: Mutex::new(None),
        }
    }

    /// Message passed to `abort_operation`, if the run was aborted
    pub fn abort_message(&self) -> Option<String> {
        self.abort_message
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ExecutionContext for ProcessContext {
    fn properties(&self) -> &NodeProperties {
        &self.properties
    }

    fn abort_operation(&self, message: &str) {
        error!("Installation aborted by host validation");
        eprintln!("{}", "✗ Host validation failed".red().bold());
        eprintln!("{}", message);

        let mut guard = self
            .abort_message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(message.to_string());
    }
}
