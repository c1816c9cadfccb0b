//! Riksbank API client with bounded retry on rate limiting.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{RiksbankError, RiksbankResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, error, warn};
use url::Url;

/// Query-component encode set that leaves `:` unescaped.
///
/// Policy rounds use the literal form `YYYY:I` (e.g. `2024:3`); the API does
/// not accept the percent-encoded variant. Everything else that is reserved
/// in a query component is still escaped.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Client for the Riksbank Monetary Policy Data API.
///
/// Holds only immutable configuration; every call is independent and opens
/// its own connection scope.
#[derive(Debug, Clone)]
pub struct RiksbankClient {
    config: Arc<ClientConfig>,
}

impl RiksbankClient {
    /// Create a client against the fixed production base address.
    pub fn new() -> RiksbankResult<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Ok(Self::from_config(ClientConfig::new(base_url)))
    }

    /// Create a client with the given configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build the full request URL for an endpoint suffix and query pairs.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> RiksbankResult<Url> {
        let mut url = self.config.base_url.clone();

        if !endpoint.is_empty() {
            url.path_segments_mut()
                .map_err(|_| RiksbankError::Config("base URL cannot be a base".to_string()))?
                .push(endpoint);
        }

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(key, QUERY_COMPONENT),
                        utf8_percent_encode(value, QUERY_COMPONENT)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Execute a GET against the API, retrying on rate limiting.
    ///
    /// Classification per response:
    /// - 404 is normalized to an empty object, never retried.
    /// - 429 is retried with the configured backoff schedule; exhausting the
    ///   attempt budget surfaces it as an [`RiksbankError::Api`] error.
    /// - Any other non-2xx status fails immediately, regardless of attempt.
    /// - A 2xx with an empty body yields an empty object.
    ///
    /// Transport errors propagate immediately without retry.
    pub async fn request(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> RiksbankResult<serde_json::Value> {
        let url = self.build_url(endpoint, params)?;
        let max_attempts = self.config.retry.max_attempts;
        let mut attempt = 0;

        loop {
            // Per-call connection scope: the client is dropped on every exit
            // path, including errors.
            let client = reqwest::Client::builder()
                .timeout(self.config.timeout)
                .user_agent(concat!("riksbank-client/", env!("CARGO_PKG_VERSION")))
                .build()?;

            debug!(url = %url, attempt = attempt + 1, "GET request");
            let response = client.get(url.clone()).send().await?;
            let status = response.status();

            if status == StatusCode::NOT_FOUND {
                warn!(url = %url, "endpoint not found, returning empty result");
                return Ok(empty_object());
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt + 1 < max_attempts {
                    let backoff = self.config.retry.backoff_for_attempt(attempt);
                    warn!(
                        attempt = attempt + 1,
                        backoff_ms = backoff.as_millis(),
                        "rate limited, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    continue;
                }

                error!(url = %url, "retry budget exhausted for rate limiting");
                let body = response.text().await.unwrap_or_default();
                return Err(RiksbankError::from_response(429, &body));
            }

            if !status.is_success() {
                error!(status = status.as_u16(), url = %url, "request failed");
                let body = response.text().await.unwrap_or_default();
                return Err(RiksbankError::from_response(status.as_u16(), &body));
            }

            let body = response.text().await?;
            if body.trim().is_empty() {
                return Ok(empty_object());
            }
            return Ok(serde_json::from_str(&body)?);
        }
    }

    /// List all available policy round identifiers.
    pub async fn policy_rounds(&self) -> RiksbankResult<serde_json::Value> {
        self.request("policy_rounds", &[]).await
    }

    /// List all available data series with metadata.
    pub async fn series(&self) -> RiksbankResult<serde_json::Value> {
        self.request("series", &[]).await
    }

    /// Fetch forecast and observation data for a series, optionally filtered
    /// to one policy round (e.g. `"2024:3"` or `"latest"`).
    pub async fn policy_data(
        &self,
        series_id: &str,
        policy_round: Option<&str>,
    ) -> RiksbankResult<serde_json::Value> {
        let mut params = vec![("series_id", series_id)];
        if let Some(round) = policy_round {
            params.push(("policy_round", round));
        }
        self.request("data", &params).await
    }
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
