//! DocWal API client error types.

/// Errors from DocWal API calls.
///
/// Non-2xx responses are classified by status code into distinct variants
/// so callers can match on the failure kind instead of inspecting numeric
/// codes. Variants that never saw a server response report status 0.
#[derive(Debug, thiserror::Error)]
pub enum DocWalError {
    /// The API key was missing, malformed, or revoked (HTTP 401).
    #[error("authentication failed at {endpoint} ({status}): {message}")]
    Authentication {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The server rejected the request payload (HTTP 400).
    #[error("validation failed at {endpoint} ({status}): {message}")]
    Validation {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The addressed resource does not exist (HTTP 404).
    #[error("not found at {endpoint} ({status}): {message}")]
    NotFound {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The institution exceeded its request quota (HTTP 429).
    #[error("rate limited at {endpoint} ({status}): {message}")]
    RateLimit {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// Any other non-2xx response.
    #[error("DocWal API {endpoint} returned {status}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// Network-level failure: no response was received. Includes timeouts.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// A required parameter was empty or missing, caught before dispatch.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl DocWalError {
    /// HTTP status code carried by this error, or 0 for failures that
    /// never produced a server response.
    pub fn status(&self) -> u16 {
        match self {
            Self::Authentication { status, .. }
            | Self::Validation { status, .. }
            | Self::NotFound { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Api { status, .. } => *status,
            Self::Http { .. }
            | Self::Deserialization { .. }
            | Self::MissingParameter(_)
            | Self::Config(_) => 0,
        }
    }

    /// Classify a non-2xx response into a typed error.
    ///
    /// The server reports failures as `{"error": "..."}`. When that field
    /// is absent the raw body text becomes the message, and an empty body
    /// falls back to the status line's canonical reason.
    pub(crate) fn from_response(
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    ) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_owned()
                } else {
                    body
                }
            });

        let code = status.as_u16();
        match code {
            401 => Self::Authentication {
                endpoint,
                status: code,
                message,
            },
            400 => Self::Validation {
                endpoint,
                status: code,
                message,
            },
            404 => Self::NotFound {
                endpoint,
                status: code,
                message,
            },
            429 => Self::RateLimit {
                endpoint,
                status: code,
                message,
            },
            _ => Self::Api {
                endpoint,
                status: code,
                message,
            },
        }
    }
}
