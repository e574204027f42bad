//! HTTP client with bounded retry and backoff
//!
//! All network traffic goes through [`HttpClient`]: one reqwest client built
//! once at startup, a fixed browser User-Agent on every request, and a retry
//! loop that absorbs transient failures. The client is passed by reference
//! to discovery and extraction so both can be exercised against mock servers.

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Status codes that trigger a retry instead of an immediate failure
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Returns true if the status code is worth retrying
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Retry configuration: attempt count and backoff curve
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,

    /// Base delay, doubled before each retry (1s, 2s, 4s with the default)
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Delay to sleep before the given retry (0-based)
    pub fn delay_before(&self, retry: u32) -> Duration {
        self.backoff * 2u32.saturating_pow(retry)
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,

    /// HTTP status code of the final response
    pub status: u16,

    /// Response body
    pub body: String,
}

/// HTTP client wrapper holding the session for the crawl's duration
pub struct HttpClient {
    inner: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Builds the client from the HTTP configuration
    ///
    /// # Arguments
    ///
    /// * `config` - User agent, retry, and timeout settings
    ///
    /// # Returns
    ///
    /// * `Ok(HttpClient)` - Successfully built client
    /// * `Err(FetchError)` - reqwest refused the configuration
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            inner,
            retry: RetryPolicy {
                max_retries: config.max_retries,
                backoff: Duration::from_millis(config.backoff_ms),
            },
        })
    }

    /// Fetches a URL, retrying transient failures
    ///
    /// Retries are limited to the statuses in [`RETRYABLE_STATUSES`] and to
    /// connection-level errors (refused, reset, timeout). Any other
    /// non-success status fails immediately with [`FetchError::Status`].
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedPage)` - Body and status of a successful response
    /// * `Err(FetchError)` - Non-retryable status, or retries exhausted
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let mut attempt = 0u32;

        loop {
            let failure = match self.inner.get(url).send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if response.status().is_success() {
                        let body =
                            response
                                .text()
                                .await
                                .map_err(|source| FetchError::Network {
                                    url: url.to_string(),
                                    source,
                                })?;
                        return Ok(FetchedPage {
                            url: url.to_string(),
                            status,
                            body,
                        });
                    }

                    if !is_retryable_status(status) {
                        return Err(FetchError::Status {
                            url: url.to_string(),
                            status,
                        });
                    }

                    format!("HTTP {}", status)
                }
                // Connection-level failures are treated as transient
                Err(source) => source.to_string(),
            };

            if attempt >= self.retry.max_retries {
                return Err(FetchError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt + 1,
                    last: failure,
                });
            }

            let delay = self.retry.delay_before(attempt);
            tracing::debug!("Retrying {} in {:?} after: {}", url, delay, failure);
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}
