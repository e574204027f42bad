use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a configuration
///
/// Checks that URLs parse as http(s), that the origin carries a host, that
/// required strings are non-empty, and that delay ranges are ordered.
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - The first problem found
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_url(&config.site.listing_url, "site.listing-url")?;

    let origin = validate_http_url(&config.site.origin, "site.origin")?;
    if origin.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "site.origin has no host: {}",
            config.site.origin
        )));
    }

    if config.site.link_marker.is_empty() {
        return Err(ConfigError::Validation(
            "site.link-marker must not be empty".to_string(),
        ));
    }

    if config.http.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "http.user-agent must not be empty".to_string(),
        ));
    }

    if config.http.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "http.timeout-secs must be greater than zero".to_string(),
        ));
    }

    validate_delay_range(
        config.pacing.listing_delay_min_ms,
        config.pacing.listing_delay_max_ms,
        "pacing.listing-delay",
    )?;
    validate_delay_range(
        config.pacing.product_delay_min_ms,
        config.pacing.product_delay_max_ms,
        "pacing.product-delay",
    )?;

    if config.output.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output.directory must not be empty".to_string(),
        ));
    }

    if config.output.file_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "output.file-prefix must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Parses a URL and requires an http or https scheme
fn validate_http_url(value: &str, field: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {} ({})", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must be http or https: {}",
            field, value
        )));
    }

    Ok(url)
}

/// Requires min <= max; a zero max disables the delay and is always valid
fn validate_delay_range(min_ms: u64, max_ms: u64, field: &str) -> Result<(), ConfigError> {
    if max_ms > 0 && min_ms > max_ms {
        return Err(ConfigError::Validation(format!(
            "{}-min-ms ({}) must not exceed {}-max-ms ({})",
            field, min_ms, field, max_ms
        )));
    }
    Ok(())
}
