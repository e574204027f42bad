use rand::Rng;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for moisson
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub pacing: PacingConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the paginated listing; a `page=<n>` parameter is appended
    #[serde(rename = "listing-url")]
    pub listing_url: String,

    /// Fixed origin used to resolve relative product links
    pub origin: String,

    /// Substring that identifies a product link within an href
    #[serde(rename = "link-marker")]
    pub link_marker: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://www.ouvrard.com/occasions-fr-fr.htm".to_string(),
            origin: "https://www.ouvrard.com".to_string(),
            link_marker: "/stock/".to_string(),
        }
    }
}

/// HTTP client behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Maximum number of retries after the initial attempt
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Base backoff delay in milliseconds, doubled on each retry
    #[serde(rename = "backoff-ms")]
    pub backoff_ms: u64,

    /// Overall request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            max_retries: 3,
            backoff_ms: 1000,
            timeout_secs: 30,
        }
    }
}

/// Politeness delay configuration
///
/// Delays are sampled uniformly from the configured ranges. They exist only
/// to avoid hammering the site; setting a maximum to zero disables the
/// corresponding delay entirely, which is how the tests run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Minimum delay between listing pages (milliseconds)
    #[serde(rename = "listing-delay-min-ms")]
    pub listing_delay_min_ms: u64,

    /// Maximum delay between listing pages (milliseconds)
    #[serde(rename = "listing-delay-max-ms")]
    pub listing_delay_max_ms: u64,

    /// Minimum delay between product pages (milliseconds)
    #[serde(rename = "product-delay-min-ms")]
    pub product_delay_min_ms: u64,

    /// Maximum delay between product pages (milliseconds)
    #[serde(rename = "product-delay-max-ms")]
    pub product_delay_max_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            listing_delay_min_ms: 1000,
            listing_delay_max_ms: 3000,
            product_delay_min_ms: 3000,
            product_delay_max_ms: 7000,
        }
    }
}

impl PacingConfig {
    /// Samples the delay to wait between two listing page fetches
    pub fn listing_delay(&self) -> Option<Duration> {
        sample_delay(self.listing_delay_min_ms, self.listing_delay_max_ms)
    }

    /// Samples the delay to wait between two product page fetches
    pub fn product_delay(&self) -> Option<Duration> {
        sample_delay(self.product_delay_min_ms, self.product_delay_max_ms)
    }
}

/// Draws a uniform delay from [min, max]; None when the range is disabled
fn sample_delay(min_ms: u64, max_ms: u64) -> Option<Duration> {
    if max_ms == 0 {
        return None;
    }
    let ms = rand::thread_rng().gen_range(min_ms..=max_ms);
    Some(Duration::from_millis(ms))
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the CSV file is written into
    pub directory: String,

    /// Filename prefix; the current date and `.csv` are appended
    #[serde(rename = "file-prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_prefix: "product_details".to_string(),
        }
    }
}
