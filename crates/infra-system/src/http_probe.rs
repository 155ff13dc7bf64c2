// Network probe implementation
// reason: reqwest for HEAD requests with redirect following and a hard timeout
use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::time::Duration;
use tracing::{debug, warn};

use preflight_core::error::{AppError, Result};
use preflight_core::port::{NetworkProbe, UrlStatus};

/// Redirect hops followed before giving up
pub const MAX_REDIRECTS: usize = 10;

/// HEAD-request reachability probe
///
/// One request per call, no retries: a failed probe is reported, never
/// retried, so genuine unreachability is not masked.
pub struct HttpNetworkProbe {
    client: Client,
    timeout: Duration,
}

impl HttpNetworkProbe {
    /// Create a probe whose requests are bounded by `timeout`
    ///
    /// # Example
    /// ```ignore
    /// let probe = HttpNetworkProbe::new(Duration::from_secs(10))?;
    /// let status = probe.check_url("https://example.com/pkg.tar.gz").await;
    /// ```
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn classify_error(&self, err: &reqwest::Error) -> UrlStatus {
        if err.is_timeout() {
            UrlStatus::NetworkFailure(format!(
                "request timed out after {}ms",
                self.timeout.as_millis()
            ))
        } else if err.is_redirect() {
            UrlStatus::NetworkFailure(format!("more than {} redirects", MAX_REDIRECTS))
        } else if let Some(status) = err.status() {
            UrlStatus::HttpStatus(status.as_u16())
        } else {
            UrlStatus::NetworkFailure(error_chain(err))
        }
    }
}

/// Flatten an error and its sources ("error sending request: dns error: ...")
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl NetworkProbe for HttpNetworkProbe {
    async fn check_url(&self, url: &str) -> UrlStatus {
        let status = match self.client.head(url).send().await {
            Ok(response) if response.status().is_success() => UrlStatus::Reachable,
            Ok(response) => UrlStatus::HttpStatus(response.status().as_u16()),
            Err(e) => self.classify_error(&e),
        };

        match &status {
            UrlStatus::Reachable => debug!(url = %url, "URL reachable"),
            other => warn!(url = %url, status = %other, "URL not reachable"),
        }

        status
    }
}
