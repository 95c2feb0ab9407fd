use std::{error::Error as StdError, time::Duration};

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("Request to {endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: String, timeout: Duration },

    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Invalid response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("JSON-RPC error from {endpoint}: {message} (code {code})")]
    Rpc {
        endpoint: String,
        code: i64,
        message: String,
    },

    #[error("Failed to decode '{field}' value {value} from {endpoint}: {reason}")]
    Decode {
        endpoint: String,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// Wraps a reqwest failure. The request URL is dropped from the message since query
    /// parameters may carry credentials.
    pub fn transport(endpoint: &Url, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Timeout {
                endpoint: endpoint.to_string(),
                timeout,
            };
        }

        let err = err.without_url();
        let mut reason = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            source = cause.source();
        }

        FetchError::Transport {
            endpoint: endpoint.to_string(),
            reason,
        }
    }

    pub fn malformed(endpoint: &Url, reason: impl Into<String>) -> Self {
        FetchError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }

    pub fn decode(
        endpoint: &Url,
        field: &'static str,
        value: impl ToString,
        reason: impl ToString,
    ) -> Self {
        FetchError::Decode {
            endpoint: endpoint.to_string(),
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Failures of the request itself, as opposed to a response with unusable content.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. } | FetchError::Timeout { .. } | FetchError::Status { .. }
        )
    }
}
