// Network reachability port
// reason: async-trait (the production probe awaits an HTTP round trip)
use async_trait::async_trait;
use std::fmt;

/// Classified result of a reachability request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStatus {
    /// Final response (after redirects) was 2xx
    Reachable,
    /// Final response carried a non-2xx status code
    HttpStatus(u16),
    /// Request could not complete (DNS, refused connection, timeout, ...)
    NetworkFailure(String),
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlStatus::Reachable => write!(f, "reachable"),
            UrlStatus::HttpStatus(code) => write!(f, "HTTP Error: {}", code),
            UrlStatus::NetworkFailure(reason) => write!(f, "Network Error: {}", reason),
        }
    }
}

/// Network probe port
///
/// A single lightweight request per call; implementations must bound it
/// with a timeout and must not retry.
#[async_trait]
pub trait NetworkProbe: Send + Sync {
    /// Issue a HEAD request (following redirects) and classify the outcome
    ///
    /// # Example
    /// ```text
    /// match probe.check_url("https://example.com/pkg.tar.gz").await {
    ///     UrlStatus::Reachable => {}
    ///     other => println!("unreachable: {}", other),
    /// }
    /// ```
    async fn check_url(&self, url: &str) -> UrlStatus;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// NetworkProbe returning a fixed status and recording requested URLs
    pub struct FakeNetworkProbe {
        status: UrlStatus,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeNetworkProbe {
        pub fn new(status: UrlStatus) -> Self {
            Self {
                status,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn reachable() -> Self {
            Self::new(UrlStatus::Reachable)
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NetworkProbe for FakeNetworkProbe {
        async fn check_url(&self, url: &str) -> UrlStatus {
            self.requests.lock().unwrap().push(url.to_string());
            self.status.clone()
        }
    }
}
