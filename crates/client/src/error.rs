//! Remote-call failure taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single remote call.
///
/// Every client function propagates these unchanged after logging; callers
/// decide whether to surface a message or fall back to local data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the server-supplied message when the
    /// body carried one.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure plausibly means "backend unreachable" rather
    /// than a request-level rejection. Used for the offline fallback.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Optional structured error body (`{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turn a non-success response into a `Status` error, preferring the
/// server-supplied message over a status-derived one.
pub(crate) async fn status_error(response: reqwest::Response, context: &str) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => format!("{context}: {status}"),
    };

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}
