// Execution context port (supplied by the surrounding deployment tool)
use crate::domain::NodeProperties;

/// The collaborator that hosts a validation run
///
/// Supplies configuration and the abort mechanism. The success path is
/// simply returning without calling `abort_operation`.
pub trait ExecutionContext: Send + Sync {
    /// Configuration mapping for this run
    fn properties(&self) -> &NodeProperties;

    /// Abort the overall installation with an operator-facing message
    fn abort_operation(&self, message: &str);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Context that records abort calls instead of terminating
    pub struct RecordingContext {
        properties: NodeProperties,
        aborts: Mutex<Vec<String>>,
    }

    impl RecordingContext {
        pub fn new(properties: NodeProperties) -> Self {
            Self {
                properties,
                aborts: Mutex::new(Vec::new()),
            }
        }

        pub fn aborts(&self) -> Vec<String> {
            self.aborts.lock().unwrap().clone()
        }
    }

    impl ExecutionContext for RecordingContext {
        fn properties(&self) -> &NodeProperties {
            &self.properties
        }

        fn abort_operation(&self, message: &str) {
            self.aborts.lock().unwrap().push(message.to_string());
        }
    }
}
