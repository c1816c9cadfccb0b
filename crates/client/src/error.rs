//! Error types for the Riksbank client.

/// Result type for client operations.
pub type RiksbankResult<T> = Result<T, RiksbankError>;

/// Error types that can occur when querying the Riksbank API.
///
/// Whether a failure carries an HTTP status is decided where the response is
/// first observed: `Api` always has one, `Transport` never does.
#[derive(Debug, thiserror::Error)]
pub enum RiksbankError {
    /// Request never produced an HTTP response (connect failure, timeout,
    /// body read failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned a terminal error status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response body that is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RiksbankError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.trim().to_string()
        };
        Self::Api { status, message }
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_body() {
        let err = RiksbankError::from_response(500, "internal failure");

        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("internal failure"));
    }

    #[test]
    fn test_from_response_empty_body() {
        let err = RiksbankError::from_response(429, "  ");

        assert_eq!(err.status(), Some(429));
        assert!(err.to_string().contains("HTTP 429"));
    }

    #[test]
    fn test_status_absent_for_non_api_errors() {
        let err = RiksbankError::Config("bad".to_string());
        assert_eq!(err.status(), None);

        let err: RiksbankError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), None);
    }
}
