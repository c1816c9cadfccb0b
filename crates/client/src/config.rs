//! Configuration types for the Riksbank client.

use std::time::Duration;
use url::Url;

/// Base address of the Riksbank Monetary Policy Data forecast API.
pub const DEFAULT_BASE_URL: &str = "https://api.riksbank.se/monetary_policy_data/v1/forecasts";

/// Configuration for the Riksbank client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the forecast API.
    pub base_url: Url,
    /// Per-attempt request timeout (connect + read).
    pub timeout: Duration,
    /// Retry configuration.
    pub retry: RetryConfig,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }
}

/// Configuration for retry behavior on rate-limited requests.
///
/// Invariant: `backoff_schedule.len() + 1 >= max_attempts`. The schedule is
/// indexed directly by attempt number; a schedule too short for the attempt
/// budget is a programming error, not a runtime condition.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts (first try included).
    pub max_attempts: u32,
    /// Wait duration before retry `i + 1`, indexed by attempt number `i`.
    pub backoff_schedule: Vec<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_schedule: [1, 2, 4, 8, 16].map(Duration::from_secs).to_vec(),
        }
    }
}

impl RetryConfig {
    /// Create a configuration that fails on the first rate-limit response.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff_schedule: Vec::new(),
        }
    }

    /// Backoff duration to wait after the given attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff_schedule[attempt as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_schedule_is_exponential() {
        let config = RetryConfig::default();

        assert_eq!(config.backoff_for_attempt(0), Duration::from_secs(1));
        assert_eq!(config.backoff_for_attempt(1), Duration::from_secs(2));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_secs(4));
        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(8));
        assert_eq!(config.backoff_for_attempt(4), Duration::from_secs(16));
    }

    #[test]
    fn test_schedule_covers_attempt_budget() {
        let config = RetryConfig::default();

        // One backoff between each pair of consecutive attempts.
        assert!(config.backoff_schedule.len() + 1 >= config.max_attempts as usize);
    }

    #[test]
    fn test_retry_config_no_retry() {
        let config = RetryConfig::no_retry();

        assert_eq!(config.max_attempts, 1);
        assert!(config.backoff_schedule.is_empty());
    }

    #[test]
    fn test_client_config_defaults() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = ClientConfig::new(url.clone());

        assert_eq!(config.base_url, url);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_attempts, 5);
    }

    #[test]
    fn test_default_base_url_parses() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.riksbank.se"));
    }
}
