//! Backend client errors

use thiserror::Error;

/// Errors returned by the analysis backend client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-success HTTP status; `message` is the server's `detail` when present
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        details: Option<String>,
    },
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// A success response whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// Rejected locally before any request was sent
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status associated with the error; 0 when no response was received
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::Network(_) | ApiError::Decode(_) => 0,
            ApiError::InvalidRequest(_) => 400,
        }
    }

    /// Additional server-provided context, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            ApiError::Http { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// Build an HTTP error from a non-success status and its (possibly empty) body
    pub fn from_status(status: u16, body: &str) -> Self {
        let envelope = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |name: &str| {
            envelope
                .as_ref()
                .and_then(|value| value.get(name))
                .and_then(|value| value.as_str())
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };

        ApiError::Http {
            status,
            message: field("detail")
                .unwrap_or_else(|| format!("HTTP error with status: {}", status)),
            details: field("details"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_becomes_message() {
        let err = ApiError::from_status(404, r#"{"detail":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), 404);
        assert!(err.details().is_none());
    }

    #[test]
    fn test_details_are_kept() {
        let err = ApiError::from_status(
            500,
            r#"{"detail":"Analysis failed","details":"model timed out"}"#,
        );
        assert_eq!(err.to_string(), "Analysis failed");
        assert_eq!(err.details(), Some("model timed out"));
    }

    #[test]
    fn test_fallback_message() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP error with status: 502");

        // FastAPI validation errors carry a list, not a string
        let err = ApiError::from_status(422, r#"{"detail":[{"loc":["body"]}]}"#);
        assert_eq!(err.to_string(), "HTTP error with status: 422");
    }

    #[test]
    fn test_network_status_is_zero() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), 0);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
